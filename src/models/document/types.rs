use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Document urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl TryFrom<i16> for Priority {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(format!("priority must be between 1 and 3, got {other}")),
        }
    }
}

impl From<Priority> for i16 {
    fn from(p: Priority) -> Self {
        p as i16
    }
}

/// Active/withdrawn flag. Withdrawn documents are kept but never listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum Status {
    Withdrawn = 0,
    Active = 1,
}

impl TryFrom<i16> for Status {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Status::Withdrawn),
            1 => Ok(Status::Active),
            other => Err(format!("status must be 0 or 1, got {other}")),
        }
    }
}

impl From<Status> for i16 {
    fn from(s: Status) -> Self {
        s as i16
    }
}

/// A submitted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub date_submitted: DateTime<Utc>,
    pub date_approved: Option<DateTime<Utc>>,
    pub url: String,
    pub user_id: i64,
}

/// Validated data for a new document. `url` points at the already stored blob.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub date_submitted: DateTime<Utc>,
    pub url: String,
    pub user_id: i64,
}

/// An uploaded file taken from a multipart body.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Raw multipart fields for create and update, before validation.
#[derive(Debug, Clone, Default)]
pub struct DocumentForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub user_id: Option<String>,
    pub document: Option<Upload>,
}

/// Update fields that passed validation; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct DocumentChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub user_id: Option<i64>,
    pub document: Option<Upload>,
}

/// Query-string filters for the document list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentQuery {
    pub name: Option<String>,
    /// Raw so a blank value means "any" and bad input maps to a field error.
    pub priority: Option<String>,
    pub submitted_from: Option<NaiveDate>,
    pub submitted_to: Option<NaiveDate>,
    pub approved_from: Option<NaiveDate>,
    pub approved_to: Option<NaiveDate>,
}

/// One entry of the grouped summary listing.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedEntry {
    pub id: i64,
    pub name: String,
    pub date_submitted: DateTime<Utc>,
    pub date_approved: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityGroup {
    pub priority: Priority,
    pub label: &'static str,
    pub documents: Vec<GroupedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentStats {
    pub total: usize,
    pub by_priority: Vec<PriorityCount>,
    pub approvals_by_month: Vec<MonthCount>,
}
