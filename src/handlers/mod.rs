//! Collaborators held by the generator context
//!
//! Each concern is a trait with one default implementation; callers swap
//! behavior by supplying another implementation to the context builder.

pub mod error;
pub mod extension;
pub mod id;
pub mod image;
pub mod style;

pub use error::{DefaultErrorHandler, ErrorHandler};
pub use extension::{
    CustomComposite, CustomFilter, CustomPaint, DefaultExtensionHandler, ExtensionHandler,
};
#[cfg(feature = "uuid")]
pub use id::UuidIdGenerator;
pub use id::{IdGenerator, SequentialIdGenerator};
pub use image::{Base64ImageHandler, FileImageHandler, ImageFormat, ImageHandler, RasterImage};
pub use style::{DefaultStyleHandler, StyleHandler, StyleMap};
