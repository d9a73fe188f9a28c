//! Generator context
//!
//! Non-graphical information a generation pass needs: the document factory,
//! the image, extension, style and error handlers, the id generator and the
//! comment written at the top of the output.
//!
//! A `GeneratorContext` is assembled through `GeneratorContextBuilder` and is
//! immutable afterwards. Reconfiguring means building a new context with
//! `to_builder()`; contexts already handed to a pipeline never change.

use std::sync::Arc;

use crate::dom::DocumentFactory;
use crate::errors::{Collaborator, ConfigError};
use crate::handlers::{
    Base64ImageHandler, DefaultErrorHandler, DefaultExtensionHandler, DefaultStyleHandler,
    ErrorHandler, ExtensionHandler, IdGenerator, ImageHandler, SequentialIdGenerator, StyleHandler,
};

/// Comment inserted by `create_default`
pub const DEFAULT_COMMENT: &str = "Generated by the svggen SVG Generator";

/// Collaborators shared by a generation pass
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    document_factory: Arc<dyn DocumentFactory>,
    image_handler: Arc<dyn ImageHandler>,
    extension_handler: Arc<dyn ExtensionHandler>,
    id_generator: Arc<dyn IdGenerator>,
    style_handler: Arc<dyn StyleHandler>,
    error_handler: Arc<dyn ErrorHandler>,
    comment: Option<String>,
}

impl GeneratorContext {
    /// Context with the given factory and default collaborators:
    /// sequential ids, no extensions, base64-embedded images, attribute
    /// styling, warn-and-continue runtime errors, and `DEFAULT_COMMENT`.
    pub fn create_default(document_factory: Arc<dyn DocumentFactory>) -> Self {
        Self {
            document_factory,
            image_handler: Arc::new(Base64ImageHandler),
            extension_handler: Arc::new(DefaultExtensionHandler),
            id_generator: Arc::new(SequentialIdGenerator::new()),
            style_handler: Arc::new(DefaultStyleHandler),
            error_handler: Arc::new(DefaultErrorHandler),
            comment: Some(DEFAULT_COMMENT.to_string()),
        }
    }

    /// Like `create_default`, for callers holding an optional factory
    pub fn try_create_default(
        document_factory: Option<Arc<dyn DocumentFactory>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = GeneratorContextBuilder::with_defaults();
        builder.set_document_factory(document_factory)?;
        builder.build()
    }

    pub fn builder() -> GeneratorContextBuilder {
        GeneratorContextBuilder::new()
    }

    /// A builder pre-filled with this context's collaborators
    pub fn to_builder(&self) -> GeneratorContextBuilder {
        GeneratorContextBuilder {
            document_factory: Some(Arc::clone(&self.document_factory)),
            image_handler: Some(Arc::clone(&self.image_handler)),
            extension_handler: Some(Arc::clone(&self.extension_handler)),
            id_generator: Some(Arc::clone(&self.id_generator)),
            style_handler: Some(Arc::clone(&self.style_handler)),
            error_handler: Some(Arc::clone(&self.error_handler)),
            comment: self.comment.clone(),
        }
    }

    pub fn document_factory(&self) -> &Arc<dyn DocumentFactory> {
        &self.document_factory
    }

    pub fn id_generator(&self) -> &Arc<dyn IdGenerator> {
        &self.id_generator
    }

    pub fn extension_handler(&self) -> &Arc<dyn ExtensionHandler> {
        &self.extension_handler
    }

    pub fn image_handler(&self) -> &Arc<dyn ImageHandler> {
        &self.image_handler
    }

    pub fn style_handler(&self) -> &Arc<dyn StyleHandler> {
        &self.style_handler
    }

    pub fn error_handler(&self) -> &Arc<dyn ErrorHandler> {
        &self.error_handler
    }

    /// Comment for the top of the output; `None` disables it
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Mutable stage of a `GeneratorContext`
///
/// `set_*` methods take an `Option` and reject `None` for required
/// collaborators without touching the current value. The by-value methods
/// take a present value and cannot fail.
#[derive(Debug, Clone, Default)]
pub struct GeneratorContextBuilder {
    document_factory: Option<Arc<dyn DocumentFactory>>,
    image_handler: Option<Arc<dyn ImageHandler>>,
    extension_handler: Option<Arc<dyn ExtensionHandler>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
    style_handler: Option<Arc<dyn StyleHandler>>,
    error_handler: Option<Arc<dyn ErrorHandler>>,
    comment: Option<String>,
}

fn require<T: ?Sized>(value: Option<Arc<T>>, field: Collaborator) -> Result<Arc<T>, ConfigError> {
    value.ok_or(ConfigError::NullConfiguration(field))
}

impl GeneratorContextBuilder {
    /// Empty builder; every required collaborator must be supplied
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with every default collaborator except the document factory
    pub fn with_defaults() -> Self {
        Self {
            document_factory: None,
            image_handler: Some(Arc::new(Base64ImageHandler)),
            extension_handler: Some(Arc::new(DefaultExtensionHandler)),
            id_generator: Some(Arc::new(SequentialIdGenerator::new())),
            style_handler: Some(Arc::new(DefaultStyleHandler)),
            error_handler: Some(Arc::new(DefaultErrorHandler)),
            comment: Some(DEFAULT_COMMENT.to_string()),
        }
    }

    pub fn set_document_factory(
        &mut self,
        factory: Option<Arc<dyn DocumentFactory>>,
    ) -> Result<&mut Self, ConfigError> {
        self.document_factory = Some(require(factory, Collaborator::DocumentFactory)?);
        Ok(self)
    }

    pub fn set_id_generator(
        &mut self,
        generator: Option<Arc<dyn IdGenerator>>,
    ) -> Result<&mut Self, ConfigError> {
        self.id_generator = Some(require(generator, Collaborator::IdGenerator)?);
        Ok(self)
    }

    pub fn set_extension_handler(
        &mut self,
        handler: Option<Arc<dyn ExtensionHandler>>,
    ) -> Result<&mut Self, ConfigError> {
        self.extension_handler = Some(require(handler, Collaborator::ExtensionHandler)?);
        Ok(self)
    }

    pub fn set_image_handler(
        &mut self,
        handler: Option<Arc<dyn ImageHandler>>,
    ) -> Result<&mut Self, ConfigError> {
        self.image_handler = Some(require(handler, Collaborator::ImageHandler)?);
        Ok(self)
    }

    pub fn set_style_handler(
        &mut self,
        handler: Option<Arc<dyn StyleHandler>>,
    ) -> Result<&mut Self, ConfigError> {
        self.style_handler = Some(require(handler, Collaborator::StyleHandler)?);
        Ok(self)
    }

    pub fn set_error_handler(
        &mut self,
        handler: Option<Arc<dyn ErrorHandler>>,
    ) -> Result<&mut Self, ConfigError> {
        self.error_handler = Some(require(handler, Collaborator::ErrorHandler)?);
        Ok(self)
    }

    /// `None` disables comment emission
    pub fn set_comment(&mut self, comment: Option<String>) -> &mut Self {
        self.comment = comment;
        self
    }

    pub fn document_factory(mut self, factory: Arc<dyn DocumentFactory>) -> Self {
        self.document_factory = Some(factory);
        self
    }

    pub fn id_generator(mut self, generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    pub fn extension_handler(mut self, handler: Arc<dyn ExtensionHandler>) -> Self {
        self.extension_handler = Some(handler);
        self
    }

    pub fn image_handler(mut self, handler: Arc<dyn ImageHandler>) -> Self {
        self.image_handler = Some(handler);
        self
    }

    pub fn style_handler(mut self, handler: Arc<dyn StyleHandler>) -> Self {
        self.style_handler = Some(handler);
        self
    }

    pub fn error_handler(mut self, handler: Arc<dyn ErrorHandler>) -> Self {
        self.error_handler = Some(handler);
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Validate and freeze. Reports the first missing collaborator in
    /// `Collaborator::ALL` order.
    pub fn build(self) -> Result<GeneratorContext, ConfigError> {
        let context = GeneratorContext {
            document_factory: require(self.document_factory, Collaborator::DocumentFactory)?,
            id_generator: require(self.id_generator, Collaborator::IdGenerator)?,
            extension_handler: require(self.extension_handler, Collaborator::ExtensionHandler)?,
            image_handler: require(self.image_handler, Collaborator::ImageHandler)?,
            style_handler: require(self.style_handler, Collaborator::StyleHandler)?,
            error_handler: require(self.error_handler, Collaborator::ErrorHandler)?,
            comment: self.comment,
        };
        log::debug!("generator context built (comment: {:?})", context.comment);
        Ok(context)
    }
}
