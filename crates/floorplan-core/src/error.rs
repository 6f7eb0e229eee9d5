//! Error handling for the floor-plan editor
//!
//! Provides the error types used across the editor layers:
//! - Import errors (malformed or invalid plan documents)
//! - Scene errors (references to elements that do not exist)
//!
//! Constraint violations during editing are not errors: they are silent
//! no-ops reported through `Option`/`bool` return values.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Import error type
///
/// Returned when a plan document cannot be turned into a scene. An import
/// that fails leaves the current scene untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// The payload is not valid JSON or does not match the document schema
    #[error("Malformed plan document: {reason}")]
    Malformed {
        /// Parser message.
        reason: String,
    },

    /// A required field is missing
    #[error("Missing field '{field}' in {element}")]
    MissingField {
        /// The element kind being read.
        element: String,
        /// The missing field name.
        field: String,
    },

    /// A value is present but unusable
    #[error("Invalid value for {element}[{index}]: {reason}")]
    InvalidValue {
        /// The element kind being read.
        element: String,
        /// Position of the element in its collection.
        index: usize,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ImportError {
    /// Build a `Malformed` error from any displayable parser error
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        ImportError::Malformed {
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::malformed(err)
    }
}

/// Scene error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// No element with this id exists
    #[error("No {kind} with id {id}")]
    UnknownElement {
        /// Element kind name.
        kind: String,
        /// Element id.
        id: u64,
    },

    /// The property does not apply to this element kind
    #[error("Property '{property}' does not apply to {kind}")]
    PropertyMismatch {
        /// Element kind name.
        kind: String,
        /// Property name.
        property: String,
    },

    /// A numeric edit carried NaN or infinity
    #[error("Property '{property}' must be a finite number")]
    NonFinite {
        /// Property name.
        property: String,
    },
}

/// Main error type for the editor
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Import error
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an import error
    pub fn is_import_error(&self) -> bool {
        matches!(self, Error::Import(_))
    }

    /// Check if this is a scene error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_display() {
        let err = ImportError::MissingField {
            element: "rooms[0]".to_string(),
            field: "polygon".to_string(),
        };
        assert_eq!(err.to_string(), "Missing field 'polygon' in rooms[0]");

        let err = ImportError::InvalidValue {
            element: "walls".to_string(),
            index: 2,
            reason: "start equals end".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for walls[2]: start equals end");
    }

    #[test]
    fn test_json_error_becomes_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ImportError = json_err.into();
        assert!(matches!(err, ImportError::Malformed { .. }));
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ImportError::malformed("bad").into();
        assert!(err.is_import_error());
        assert!(!err.is_scene_error());

        let err: Error = SceneError::UnknownElement {
            kind: "room".to_string(),
            id: 7,
        }
        .into();
        assert!(err.is_scene_error());
        assert_eq!(err.to_string(), "No room with id 7");

        let err = SceneError::NonFinite {
            property: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Property 'x' must be a finite number");

        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
