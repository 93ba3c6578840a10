use crate::error::{PickerError, PickerResult};

/// Splits comma-separated input into trimmed, non-empty names.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a group size typed by the user. Must be a positive whole number.
pub fn group_size(raw: &str) -> PickerResult<usize> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| PickerError::InvalidNumber {
        field: "group size".into(),
        value: trimmed.to_string(),
    })?;
    positive(value, "group size")
}

/// Validates that an integer is positive (> 0).
pub fn positive(value: i64, field: &str) -> PickerResult<usize> {
    if value <= 0 {
        Err(PickerError::NonPositive {
            field: field.to_string(),
        })
    } else {
        usize::try_from(value).map_err(|_| PickerError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}
