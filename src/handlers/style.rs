//! Style application
//!
//! Presentation properties are written as attributes rather than a `style`
//! attribute, which keeps the output readable by tools without CSS support.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Debug;

use once_cell::sync::Lazy;

use crate::context::GeneratorContext;
use crate::dom::Element;

/// Presentation properties keyed by SVG attribute name
pub type StyleMap = BTreeMap<String, String>;

/// Applies a style map to an element
pub trait StyleHandler: Send + Sync + Debug {
    fn set_style(&self, element: &mut Element, style: &StyleMap, ctx: &GeneratorContext);
}

const FONT_PROPERTIES: [&str; 4] = ["font-size", "font-family", "font-style", "font-weight"];

const SHAPE_TAGS: [&str; 7] = ["rect", "circle", "ellipse", "polygon", "polyline", "line", "path"];

// Properties that have no effect on a given element and are left out
static IGNORED_PROPERTIES: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    SHAPE_TAGS
        .iter()
        .map(|tag| (*tag, FONT_PROPERTIES.iter().copied().collect::<HashSet<_>>()))
        .collect()
});

/// Writes each property as an attribute unless the element already sets it
#[derive(Debug, Clone, Default)]
pub struct DefaultStyleHandler;

impl DefaultStyleHandler {
    /// Whether `property` is meaningful on an element named `tag`
    pub fn applies_to(property: &str, tag: &str) -> bool {
        IGNORED_PROPERTIES
            .get(tag)
            .map_or(true, |ignored| !ignored.contains(property))
    }
}

impl StyleHandler for DefaultStyleHandler {
    fn set_style(&self, element: &mut Element, style: &StyleMap, _ctx: &GeneratorContext) {
        for (property, value) in style {
            if element.has_attribute(property) {
                continue;
            }
            if Self::applies_to(property, element.name()) {
                element.set_attribute(property.as_str(), value.as_str());
            }
        }
    }
}
