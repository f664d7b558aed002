use crate::errors::FieldErrors;
use crate::validate::{parse_integer, validate_between, validate_required};

use super::types::{DocumentForm, Priority, Upload};

pub const NAME_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 255;

/// Text fields of a create request after validation.
#[derive(Debug, Clone)]
pub struct CreateFields {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub user_id: Option<i64>,
    pub document: Upload,
}

pub(super) fn check_priority(raw: &str, errors: &mut FieldErrors) -> Option<Priority> {
    match parse_integer(raw, "priority") {
        Ok(value) => {
            if let Some(msg) = validate_between(value, "priority", 1, 3) {
                errors.add("priority", msg);
                return None;
            }
            i16::try_from(value).ok().and_then(|v| Priority::try_from(v).ok())
        }
        Err(msg) => {
            errors.add("priority", msg);
            None
        }
    }
}

fn check_user_id(raw: &str, errors: &mut FieldErrors) -> Option<i64> {
    match parse_integer(raw, "user id") {
        Ok(id) => Some(id),
        Err(msg) => {
            errors.add("user_id", msg);
            None
        }
    }
}

fn check_upload(upload: &Upload, max_bytes: usize, errors: &mut FieldErrors) {
    if upload.bytes.is_empty() {
        errors.add("document", "The document field is required.");
    } else if upload.bytes.len() > max_bytes {
        errors.add(
            "document",
            format!("The document field must not be greater than {} kilobytes.", max_bytes / 1024),
        );
    }
}

fn required_text(value: Option<&String>, field: &str, max: usize, errors: &mut FieldErrors) -> String {
    let raw = value.map(String::as_str).unwrap_or("");
    errors.check(field, validate_required(raw, field, max));
    raw.trim().to_string()
}

/// Validate a create request. Every field is checked; all messages are
/// returned together. User existence is checked by the caller.
pub fn validate_create(form: DocumentForm, max_upload_bytes: usize) -> Result<CreateFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = required_text(form.name.as_ref(), "name", NAME_MAX, &mut errors);
    let description = required_text(form.description.as_ref(), "description", DESCRIPTION_MAX, &mut errors);

    let priority = match form.priority.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => check_priority(raw, &mut errors),
        None => {
            errors.add("priority", "The priority field is required.");
            None
        }
    };

    let user_id = form
        .user_id
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .and_then(|raw| check_user_id(raw, &mut errors));

    match &form.document {
        Some(upload) => check_upload(upload, max_upload_bytes, &mut errors),
        None => errors.add("document", "The document field is required."),
    }

    match (priority, form.document) {
        (Some(priority), Some(document)) if errors.is_empty() => Ok(CreateFields {
            name,
            description,
            priority,
            user_id,
            document,
        }),
        _ => Err(errors),
    }
}

/// Validate an update request. Absent fields are left alone; present ones
/// follow the create rules.
pub fn validate_update(
    form: DocumentForm,
    max_upload_bytes: usize,
) -> Result<super::types::DocumentChanges, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form
        .name
        .as_ref()
        .map(|n| required_text(Some(n), "name", NAME_MAX, &mut errors));
    let description = form
        .description
        .as_ref()
        .map(|d| required_text(Some(d), "description", DESCRIPTION_MAX, &mut errors));
    let priority = form
        .priority
        .as_deref()
        .and_then(|raw| check_priority(raw, &mut errors));
    let user_id = form
        .user_id
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .and_then(|raw| check_user_id(raw, &mut errors));
    if let Some(upload) = &form.document {
        check_upload(upload, max_upload_bytes, &mut errors);
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(super::types::DocumentChanges {
        name,
        description,
        priority,
        user_id,
        document: form.document,
    })
}
