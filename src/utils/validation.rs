use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_marks(field_name: &str, marks: f64) -> Result<()> {
    if !marks.is_finite() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: marks.to_string(),
            reason: "Marks must be a finite number".to_string(),
        });
    }
    if marks < 0.0 {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: marks.to_string(),
            reason: "Marks cannot be negative".to_string(),
        });
    }
    Ok(())
}
