use crate::utils::error::{ConfigError, ConfigResult};

pub trait Validate {
    fn validate(&self) -> ConfigResult<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> ConfigResult<()> {
    if path.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> ConfigResult<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::InvalidValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> ConfigResult<&'a T> {
    value.as_ref().ok_or_else(|| ConfigError::InvalidValue {
        field: field_name.to_string(),
        value: String::new(),
        reason: "Value is required".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.path", "./users.json").is_ok());
        assert!(validate_path("storage.path", "").is_err());
        assert!(validate_path("storage.path", "   ").is_err());
        assert!(validate_path("storage.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());

        let err = validate_one_of("logging.format", "xml", &["compact", "json"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'xml' for 'logging.format': Expected one of: compact, json"
        );
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("x".to_string());
        assert_eq!(validate_required_field("storage.path", &present).unwrap(), "x");

        let missing: Option<String> = None;
        assert!(validate_required_field("storage.path", &missing).is_err());
    }
}
