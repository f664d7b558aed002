use super::types::{Document, GroupedEntry, Priority, PriorityGroup};

/// Group documents by priority, Low to High, skipping empty groups.
///
/// `detail_link` builds the lookup reference attached to every entry.
pub fn group_by_priority<F>(documents: &[Document], detail_link: F) -> Vec<PriorityGroup>
where
    F: Fn(i64) -> String,
{
    Priority::ALL
        .iter()
        .filter_map(|&priority| {
            let entries: Vec<GroupedEntry> = documents
                .iter()
                .filter(|d| d.priority == priority)
                .map(|d| GroupedEntry {
                    id: d.id,
                    name: d.name.clone(),
                    date_submitted: d.date_submitted,
                    date_approved: d.date_approved,
                    priority: d.priority,
                    detail: detail_link(d.id),
                })
                .collect();
            (!entries.is_empty()).then(|| PriorityGroup {
                priority,
                label: priority.label(),
                documents: entries,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::document::types::Status;

    fn doc(id: i64, priority: Priority) -> Document {
        Document {
            id,
            name: format!("doc{id}"),
            description: String::new(),
            priority,
            status: Status::Active,
            date_submitted: Utc::now(),
            date_approved: None,
            url: String::new(),
            user_id: 1,
        }
    }

    #[test]
    fn one_of_each_priority_gives_three_singleton_groups() {
        let docs = vec![doc(1, Priority::High), doc(2, Priority::Low), doc(3, Priority::Medium)];
        let groups = group_by_priority(&docs, |id| format!("/api/documents/{id}"));

        let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Low", "Medium", "High"]);
        assert!(groups.iter().all(|g| g.documents.len() == 1));
        assert_eq!(groups[2].documents[0].detail, "/api/documents/1");
    }

    #[test]
    fn empty_groups_are_omitted() {
        let docs = vec![doc(1, Priority::High), doc(2, Priority::High)];
        let groups = group_by_priority(&docs, |id| id.to_string());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].priority, Priority::High);
        assert_eq!(groups[0].documents.len(), 2);
    }

    #[test]
    fn entries_serialize_with_detail_reference() {
        let groups = group_by_priority(&[doc(7, Priority::Medium)], |id| format!("http://x/api/documents/{id}"));
        let json = serde_json::to_value(&groups[0].documents[0]).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["priority"], 2);
        assert_eq!(json["detail"], "http://x/api/documents/7");
        assert!(json["date_approved"].is_null());
    }
}
