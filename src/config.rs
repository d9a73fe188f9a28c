//! File-based generator configuration
//!
//! Selects the comment, the image strategy and the id strategy for a
//! context. Collaborators that cannot be described in a file (custom
//! factories and handlers) are supplied through `GeneratorContextBuilder`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::context::{GeneratorContext, DEFAULT_COMMENT};
use crate::dom::DocumentFactory;
use crate::errors::ConfigError;
use crate::handlers::{Base64ImageHandler, FileImageHandler, IdGenerator, ImageHandler, SequentialIdGenerator};

/// Configuration options for a generator context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Comment at the top of the output; explicit `null` disables it,
    /// a missing key keeps `DEFAULT_COMMENT`
    pub comment: Option<String>,

    pub images: ImageStrategy,

    pub ids: IdStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            comment: Some(DEFAULT_COMMENT.to_string()),
            images: ImageStrategy::default(),
            ids: IdStrategy::default(),
        }
    }
}

/// How `<image>` elements reference their data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ImageStrategy {
    /// Inline base64 `data:` URIs
    Embed,
    /// Files written to `image_dir`, linked as `url_root/<name>`
    Files {
        image_dir: PathBuf,
        #[serde(default)]
        url_root: String,
    },
}

impl Default for ImageStrategy {
    fn default() -> Self {
        ImageStrategy::Embed
    }
}

/// How ids are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum IdStrategy {
    /// `prefix1`, `prefix2`, ...
    #[default]
    Sequential,
    /// `prefix-<uuid>`; requires the `uuid` feature
    Uuid,
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        log::info!("loading generator config from {}", path.display());

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            other => Err(ConfigError::Invalid(format!(
                "unsupported config extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let ImageStrategy::Files { image_dir, .. } = &self.images {
            if image_dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("image_dir must not be empty".to_string()));
            }
        }
        if self.ids == IdStrategy::Uuid && !cfg!(feature = "uuid") {
            return Err(ConfigError::Invalid(
                "uuid ids require the \"uuid\" feature".to_string(),
            ));
        }
        Ok(())
    }

    fn image_handler(&self) -> Arc<dyn ImageHandler> {
        match &self.images {
            ImageStrategy::Embed => Arc::new(Base64ImageHandler),
            ImageStrategy::Files { image_dir, url_root } => {
                Arc::new(FileImageHandler::new(image_dir.clone(), url_root.clone()))
            }
        }
    }

    fn id_generator(&self) -> Arc<dyn IdGenerator> {
        match self.ids {
            #[cfg(feature = "uuid")]
            IdStrategy::Uuid => Arc::new(crate::handlers::UuidIdGenerator),
            _ => Arc::new(SequentialIdGenerator::new()),
        }
    }
}

impl GeneratorContext {
    /// Default collaborators, overridden by what `config` selects
    pub fn from_config(
        document_factory: Arc<dyn DocumentFactory>,
        config: &GeneratorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        GeneratorContext::create_default(document_factory)
            .to_builder()
            .image_handler(config.image_handler())
            .id_generator(config.id_generator())
            .comment(config.comment.clone())
            .build()
    }
}
