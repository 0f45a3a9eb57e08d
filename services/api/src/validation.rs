//! Input validation utilities

/// Maximum accepted length for free-text name fields
const MAX_NAME_LENGTH: usize = 255;

/// Validate a user or meal name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err("Name must be at most 255 characters long".to_string());
    }

    Ok(())
}
