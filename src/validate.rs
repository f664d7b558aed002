//! Field validators. Each returns `Some(message)` when the value is rejected.

/// Validate a required text field with a max length in characters.
pub fn validate_required(value: &str, field: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("The {field} field is required."));
    }
    validate_max(trimmed, field, max_len)
}

/// Validate a text field's length in characters (multi-byte safe).
pub fn validate_max(value: &str, field: &str, max_len: usize) -> Option<String> {
    if value.chars().count() > max_len {
        return Some(format!("The {field} field must not be greater than {max_len} characters."));
    }
    None
}

/// Parse an integer field, reporting a message instead of an error.
pub fn parse_integer(value: &str, field: &str) -> Result<i64, String> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("The {field} field must be an integer."))
}

/// Validate an integer against an inclusive range.
pub fn validate_between(value: i64, field: &str, min: i64, max: i64) -> Option<String> {
    if value < min || value > max {
        return Some(format!("The {field} field must be between {min} and {max}."));
    }
    None
}
