//! SVG Generator Context
//!
//! Bundles the collaborators an SVG generation pass depends on (document
//! factory, id generator, image, extension, style and error handlers, and the
//! output comment) into one immutable, shareable `GeneratorContext`.

pub mod config;
pub mod context;
pub mod dom;
pub mod errors;
pub mod handlers;

// Re-export commonly used types
pub use config::{GeneratorConfig, IdStrategy, ImageStrategy};
pub use context::{GeneratorContext, GeneratorContextBuilder, DEFAULT_COMMENT};
pub use dom::{DocumentFactory, Element, Node, SvgDocumentFactory};
pub use errors::{Collaborator, ConfigError, DomError, GenerationError};
pub use handlers::{
    Base64ImageHandler, DefaultErrorHandler, DefaultExtensionHandler, DefaultStyleHandler,
    ErrorHandler, ExtensionHandler, FileImageHandler, IdGenerator, ImageFormat, ImageHandler,
    RasterImage, SequentialIdGenerator, StyleHandler, StyleMap,
};
