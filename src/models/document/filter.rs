use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::{AppError, FieldErrors};

use super::types::{Document, DocumentQuery};
use super::validate::check_priority;

fn within(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.is_none_or(|f| date >= f) && to.is_none_or(|t| date <= t)
}

fn day(ts: &DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// Apply list filters to an already visible document set.
///
/// Date bounds are inclusive and compare the UTC calendar day. Any approved
/// bound drops documents that were never approved.
pub fn apply(query: &DocumentQuery, documents: Vec<Document>) -> Result<Vec<Document>, AppError> {
    let priority = match query.priority.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => {
            let mut errors = FieldErrors::new();
            let priority = check_priority(raw, &mut errors);
            errors.into_result()?;
            priority
        }
        None => None,
    };
    let needle = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_lowercase);
    let approved_bounded = query.approved_from.is_some() || query.approved_to.is_some();

    Ok(documents
        .into_iter()
        .filter(|d| needle.as_ref().is_none_or(|n| d.name.to_lowercase().contains(n)))
        .filter(|d| priority.is_none_or(|p| d.priority == p))
        .filter(|d| within(day(&d.date_submitted), query.submitted_from, query.submitted_to))
        .filter(|d| {
            if !approved_bounded {
                return true;
            }
            d.date_approved
                .as_ref()
                .is_some_and(|a| within(day(a), query.approved_from, query.approved_to))
        })
        .collect())
}
