//! Error handling during a generation pass

use std::fmt::Debug;

use crate::errors::GenerationError;

/// Receives errors raised by collaborators while generating
///
/// Returning `Err` aborts the pass; returning `Ok` lets it continue.
pub trait ErrorHandler: Send + Sync + Debug {
    fn handle_error(&self, error: GenerationError) -> Result<(), GenerationError>;
}

/// Propagates I/O errors and logs runtime errors as warnings
#[derive(Debug, Clone, Default)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    fn handle_error(&self, error: GenerationError) -> Result<(), GenerationError> {
        match error {
            GenerationError::Io(_) => Err(error),
            GenerationError::Runtime(message) => {
                log::warn!("{}", message);
                Ok(())
            }
        }
    }
}
