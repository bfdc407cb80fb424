//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are absent or empty
    Required { fields: &'static [&'static str] },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { fields } => {
                let verb = if fields.len() > 1 { "are" } else { "is" };
                write!(f, "{} {} required", fields.join(" and "), verb)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Return the trimmed-nonempty value of an optional string field.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
