//! Image references in generated SVG
//!
//! Images arrive already encoded (PNG or JPEG bytes). A handler decides how
//! the `<image>` element refers to them: inline as a data URI, or as a link
//! to a file written next to the SVG.

use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::context::GeneratorContext;
use crate::dom::Element;
use crate::errors::GenerationError;

pub const XLINK_HREF: &str = "xlink:href";

/// Encoding of the bytes in a `RasterImage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

/// An encoded raster image and its size in user units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, format: ImageFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format,
            data,
        }
    }

    pub fn png(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self::new(width, height, ImageFormat::Png, data)
    }

    /// Zero-sized images have nothing to draw
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Fills an `<image>` element for a raster image
pub trait ImageHandler: Send + Sync + Debug {
    fn handle_image(
        &self,
        image: &RasterImage,
        element: &mut Element,
        ctx: &GeneratorContext,
    ) -> Result<(), GenerationError>;
}

fn set_size(image: &RasterImage, element: &mut Element) {
    element.set_attribute("width", image.width.to_string());
    element.set_attribute("height", image.height.to_string());
}

/// Embeds image bytes as a base64 `data:` URI
#[derive(Debug, Clone, Default)]
pub struct Base64ImageHandler;

impl Base64ImageHandler {
    const EMPTY_HREF: &'static str = "data:image/png;base64,";

    pub fn data_uri(image: &RasterImage) -> String {
        format!("data:{};base64,{}", image.format.mime_type(), BASE64.encode(&image.data))
    }
}

impl ImageHandler for Base64ImageHandler {
    fn handle_image(
        &self,
        image: &RasterImage,
        element: &mut Element,
        _ctx: &GeneratorContext,
    ) -> Result<(), GenerationError> {
        set_size(image, element);
        if image.is_empty() {
            element.set_attribute(XLINK_HREF, Self::EMPTY_HREF);
        } else {
            element.set_attribute(XLINK_HREF, Self::data_uri(image));
        }
        Ok(())
    }
}

/// Writes each image to `image_dir` and links it through `url_root`
///
/// File names come from the context's id generator (`image1.png`, ...).
#[derive(Debug, Clone)]
pub struct FileImageHandler {
    image_dir: PathBuf,
    url_root: String,
}

impl FileImageHandler {
    pub fn new(image_dir: impl Into<PathBuf>, url_root: impl Into<String>) -> Self {
        Self {
            image_dir: image_dir.into(),
            url_root: url_root.into(),
        }
    }

    pub fn image_dir(&self) -> &PathBuf {
        &self.image_dir
    }

    pub fn url_root(&self) -> &str {
        &self.url_root
    }

    fn href_for(&self, file_name: &str) -> String {
        let root = self.url_root.trim_end_matches('/');
        if root.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", root, file_name)
        }
    }
}

impl ImageHandler for FileImageHandler {
    fn handle_image(
        &self,
        image: &RasterImage,
        element: &mut Element,
        ctx: &GeneratorContext,
    ) -> Result<(), GenerationError> {
        set_size(image, element);
        if image.is_empty() {
            return ctx
                .error_handler()
                .handle_error(GenerationError::Runtime("skipping empty image".to_string()));
        }

        let file_name = format!(
            "{}.{}",
            ctx.id_generator().generate_id("image"),
            image.format.extension()
        );
        let path = self.image_dir.join(&file_name);

        if let Err(err) = fs::write(&path, &image.data) {
            log::debug!("failed to write {}: {}", path.display(), err);
            return ctx.error_handler().handle_error(GenerationError::Io(err));
        }

        element.set_attribute(XLINK_HREF, self.href_for(&file_name));
        Ok(())
    }
}
