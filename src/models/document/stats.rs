use chrono::{Datelike, NaiveDate};

use super::types::{Document, DocumentStats, MonthCount, Priority, PriorityCount};

const MONTHS: usize = 12;

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Per-priority counts and approvals per month for the twelve calendar
/// months ending with `today`'s month, oldest first.
pub fn summarize(documents: &[Document], today: NaiveDate) -> DocumentStats {
    let by_priority = Priority::ALL
        .iter()
        .map(|&priority| PriorityCount {
            priority,
            label: priority.label(),
            count: documents.iter().filter(|d| d.priority == priority).count(),
        })
        .collect();

    let current = month_index(today);
    let mut counts = [0usize; MONTHS];
    for approved in documents.iter().filter_map(|d| d.date_approved) {
        let age = current - month_index(approved.date_naive());
        if (0..MONTHS as i32).contains(&age) {
            counts[MONTHS - 1 - age as usize] += 1;
        }
    }

    let approvals_by_month = counts
        .iter()
        .enumerate()
        .map(|(slot, &count)| {
            let idx = current - (MONTHS - 1 - slot) as i32;
            MonthCount {
                month: format!("{} / {}", idx.rem_euclid(12) + 1, idx.div_euclid(12)),
                count,
            }
        })
        .collect();

    DocumentStats {
        total: documents.len(),
        by_priority,
        approvals_by_month,
    }
}
