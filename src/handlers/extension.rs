//! Extension hooks for paints, composites and filters the generator does not
//! know natively
//!
//! An extension handler turns a custom descriptor into a definition element
//! (e.g. a `<pattern>` or `<filter>`) that the pipeline places in `<defs>`.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::context::GeneratorContext;
use crate::dom::Element;

/// Custom paint (fill/stroke) not expressible as a color or gradient
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomPaint {
    pub kind: String,
    pub properties: BTreeMap<String, String>,
}

/// Custom compositing rule
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomComposite {
    pub kind: String,
    pub properties: BTreeMap<String, String>,
}

/// Custom raster filter applied over a region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomFilter {
    pub kind: String,
    pub properties: BTreeMap<String, String>,
}

macro_rules! descriptor_ctor {
    ($ty:ident) => {
        impl $ty {
            pub fn new(kind: impl Into<String>) -> Self {
                Self {
                    kind: kind.into(),
                    properties: BTreeMap::new(),
                }
            }

            pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
                self.properties.insert(key.into(), value.into());
                self
            }
        }
    };
}

descriptor_ctor!(CustomPaint);
descriptor_ctor!(CustomComposite);
descriptor_ctor!(CustomFilter);

/// Translates custom descriptors to SVG definitions; `None` means unsupported
pub trait ExtensionHandler: Send + Sync + Debug {
    fn handle_paint(&self, paint: &CustomPaint, ctx: &GeneratorContext) -> Option<Element>;

    fn handle_composite(&self, composite: &CustomComposite, ctx: &GeneratorContext) -> Option<Element>;

    fn handle_filter(&self, filter: &CustomFilter, ctx: &GeneratorContext) -> Option<Element>;
}

/// Supports no extensions
#[derive(Debug, Clone, Default)]
pub struct DefaultExtensionHandler;

impl ExtensionHandler for DefaultExtensionHandler {
    fn handle_paint(&self, paint: &CustomPaint, _ctx: &GeneratorContext) -> Option<Element> {
        log::debug!("no extension for paint '{}'", paint.kind);
        None
    }

    fn handle_composite(&self, composite: &CustomComposite, _ctx: &GeneratorContext) -> Option<Element> {
        log::debug!("no extension for composite '{}'", composite.kind);
        None
    }

    fn handle_filter(&self, filter: &CustomFilter, _ctx: &GeneratorContext) -> Option<Element> {
        log::debug!("no extension for filter '{}'", filter.kind);
        None
    }
}
