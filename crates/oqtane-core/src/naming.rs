//! Owner and module name checks.
//!
//! Both names end up in C# namespaces and folder names, so they are limited
//! to letters and digits.

use crate::error::{OqtaneError, Result};

/// Which caller-supplied name is being checked. Used in the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Owner,
    Module,
}

impl NameField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Module => "Module",
        }
    }
}

/// Reject empty names and names containing anything but letters and digits.
pub fn validate_name(field: NameField, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(char::is_alphanumeric) {
        return Err(OqtaneError::InvalidName {
            field: field.as_str(),
            value: value.to_string(),
        });
    }
    Ok(())
}
