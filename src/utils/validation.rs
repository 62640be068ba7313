use crate::utils::error::{TaskError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TaskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TaskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(TaskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TaskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Returns the first character of `value`; the rest is ignored.
pub fn first_char(field_name: &str, value: &str) -> Result<char> {
    value
        .chars()
        .next()
        .ok_or_else(|| TaskError::MissingConfigError {
            field: field_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("numbers.file", "data/numbers.txt").is_ok());
        assert!(validate_path("numbers.file", "").is_err());
        assert!(validate_path("numbers.file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("filter.max_occurrences", 3, 1).is_ok());
        assert!(validate_positive_number("filter.max_occurrences", 0, 1).is_err());
    }

    #[test]
    fn test_non_empty_string_allows_whitespace() {
        assert!(validate_non_empty_string("numbers.sentinel", " ").is_ok());
        assert!(validate_non_empty_string("numbers.sentinel", "").is_err());
    }

    #[test]
    fn test_first_char() {
        assert_eq!(first_char("char", "abc").unwrap(), 'a');
        assert_eq!(first_char("char", "ü").unwrap(), 'ü');
        assert!(matches!(
            first_char("char", ""),
            Err(TaskError::MissingConfigError { .. })
        ));
    }
}
