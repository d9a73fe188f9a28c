//! Error types for SVG generation
//!
//! Configuration errors are raised while a `GeneratorContext` is being
//! assembled. Generation errors are raised by collaborators while a pipeline
//! is running and are routed through the context's `ErrorHandler`.

use std::fmt;
use thiserror::Error;

/// Names a required collaborator slot of the generator context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    DocumentFactory,
    IdGenerator,
    ExtensionHandler,
    ImageHandler,
    StyleHandler,
    ErrorHandler,
}

impl Collaborator {
    /// All required collaborators, in validation order
    pub const ALL: [Collaborator; 6] = [
        Collaborator::DocumentFactory,
        Collaborator::IdGenerator,
        Collaborator::ExtensionHandler,
        Collaborator::ImageHandler,
        Collaborator::StyleHandler,
        Collaborator::ErrorHandler,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collaborator::DocumentFactory => "document factory",
            Collaborator::IdGenerator => "id generator",
            Collaborator::ExtensionHandler => "extension handler",
            Collaborator::ImageHandler => "image handler",
            Collaborator::StyleHandler => "style handler",
            Collaborator::ErrorHandler => "error handler",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while configuring a generator context
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required collaborator was absent
    #[error("{0} must not be null")]
    NullConfiguration(Collaborator),

    /// Configuration values are inconsistent (e.g. file images without a directory)
    #[error("invalid generator configuration: {0}")]
    Invalid(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    /// The collaborator a `NullConfiguration` error refers to
    pub fn collaborator(&self) -> Option<Collaborator> {
        match self {
            ConfigError::NullConfiguration(field) => Some(*field),
            _ => None,
        }
    }
}

/// Errors raised by collaborators during a generation pass
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Output could not be written (image files, streams)
    #[error("I/O error during SVG generation: {0}")]
    Io(#[from] std::io::Error),

    /// Recoverable problem; the default handler only reports it
    #[error("SVG generation warning: {0}")]
    Runtime(String),
}

/// Errors from building, parsing or serializing element trees
#[derive(Debug, Error)]
pub enum DomError {
    /// XML comments may not contain "--" or end with "-"
    #[error("invalid comment text: {0:?}")]
    InvalidComment(String),

    #[error("XML write failed: {0}")]
    Xml(String),

    #[error("SVG parse failed: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_configuration_message_names_field() {
        let err = ConfigError::NullConfiguration(Collaborator::IdGenerator);
        assert_eq!(err.to_string(), "id generator must not be null");
        assert_eq!(err.collaborator(), Some(Collaborator::IdGenerator));
    }

    #[test]
    fn test_collaborator_order() {
        assert_eq!(Collaborator::ALL[0], Collaborator::DocumentFactory);
        assert_eq!(Collaborator::ALL[5], Collaborator::ErrorHandler);
    }

    #[test]
    fn test_invalid_has_no_collaborator() {
        assert!(ConfigError::Invalid("x".into()).collaborator().is_none());
    }
}
