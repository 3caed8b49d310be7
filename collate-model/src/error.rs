use std::fmt::{self, Display};

/// Errors produced while building sort descriptors from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A single-field description contained more than one field.
    MultipleFields(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MultipleFields(text) => write!(
                f,
                "the field description [{text}] contains more than one field \
                 description, use `parse_fields` instead"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

/// Result alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
