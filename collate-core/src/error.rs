use collate_model::ModelError;
use thiserror::Error;

/// Failures raised while resolving or comparing values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparatorError {
    /// A strict extractor found nothing under a path segment.
    #[error("no member or accessor '{segment}' found on type '{type_name}'")]
    ValueResolution {
        /// The segment that did not resolve.
        segment: String,
        /// Type the segment was looked up on.
        type_name: String,
    },

    /// Two values, or two whole objects, have no ordering.
    #[error("comparison of {} is not possible", describe_path(.path))]
    NotComparable {
        /// Path of the failing field, `None` for whole objects.
        path: Option<String>,
    },

    /// A descriptor or preset could not be turned into a comparator.
    #[error("invalid comparator configuration: {0}")]
    Configuration(String),
}

fn describe_path(path: &Option<String>) -> String {
    match path {
        Some(path) => format!("field '{path}'"),
        None => "objects".to_string(),
    }
}

impl From<ModelError> for ComparatorError {
    fn from(err: ModelError) -> Self {
        ComparatorError::Configuration(err.to_string())
    }
}

/// Result alias for comparator operations.
pub type Result<T> = std::result::Result<T, ComparatorError>;
