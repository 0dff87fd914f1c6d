use crate::utils::error::{Result, ToolkitError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Extensions are bare (`cpp`, not `.cpp` or `*.cpp`) and must be unique.
pub fn validate_extensions(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(ToolkitError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for ext in extensions {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ToolkitError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: "Extension must be alphanumeric without a leading dot".to_string(),
            });
        }
        if !seen.insert(ext.as_str()) {
            return Err(ToolkitError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: "Duplicate extension".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct(field_name: &str, a: &str, b: &str) -> Result<()> {
    if a == b {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: a.to_string(),
            reason: "Start and end values must differ".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("paths.readme", "README.md").is_ok());
        assert!(validate_path("paths.readme", "").is_err());
        assert!(validate_path("paths.readme", "READ\0ME").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("listing.max_key_items", 2, 1).is_ok());
        assert!(validate_positive_number("listing.max_key_items", 0, 1).is_err());
    }

    #[test]
    fn test_validate_extensions() {
        let exts = vec!["cpp".to_string(), "cppm".to_string()];
        assert!(validate_extensions("scan.extensions", &exts).is_ok());

        assert!(validate_extensions("scan.extensions", &[]).is_err());
        assert!(validate_extensions("scan.extensions", &[".cpp".to_string()]).is_err());
        assert!(validate_extensions("scan.extensions", &["cpp".to_string(), "cpp".to_string()]).is_err());
    }

    #[test]
    fn test_validate_distinct() {
        assert!(validate_distinct("markers", "## A", "## B").is_ok());
        assert!(validate_distinct("markers", "## A", "## A").is_err());
    }
}
