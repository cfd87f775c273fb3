use crate::utils::error::{Result, ToolkitError};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reject filenames that are empty or carry characters no sane filename
/// should contain. Checked before any file access is attempted.
pub fn validate_filename(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Filename cannot be empty".to_string(),
        });
    }

    let forbidden = Regex::new(r#"[<>:"/\\|?*]"#).unwrap();
    if forbidden.is_match(name) {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Filename contains invalid characters".to_string(),
        });
    }

    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("filename", "notes.txt").is_ok());
        assert!(validate_filename("filename", "logs-2024_01.txt").is_ok());
        assert!(validate_filename("filename", "").is_err());
        assert!(validate_filename("filename", "   ").is_err());
    }

    #[test]
    fn test_validate_filename_rejects_each_forbidden_character() {
        for c in ['<', '>', ':', '"', '/', '\\', '|', '?', '*'] {
            let name = format!("bad{}name.txt", c);
            assert!(
                validate_filename("filename", &name).is_err(),
                "expected rejection for {:?}",
                c
            );
        }
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "out/result.txt").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("prompt", "hello").is_ok());
        assert!(validate_non_empty_string("prompt", "  ").is_err());
    }
}
