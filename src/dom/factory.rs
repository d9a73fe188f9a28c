//! Document factories
//!
//! The factory is the single place a generation pass creates nodes, so a
//! caller can swap in a factory that tags or namespaces elements differently.

use std::fmt::Debug;

use super::element::{Element, Node};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Creates the nodes of a generated document
pub trait DocumentFactory: Send + Sync + Debug {
    /// Namespace URI of the elements this factory creates
    fn namespace(&self) -> &str;

    fn create_element(&self, name: &str) -> Element;

    fn create_text(&self, text: &str) -> Node {
        Node::Text(text.to_string())
    }

    fn create_comment(&self, text: &str) -> Node {
        Node::Comment(text.to_string())
    }
}

/// Factory for plain SVG 1.1 elements
#[derive(Debug, Clone, Default)]
pub struct SvgDocumentFactory;

impl SvgDocumentFactory {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentFactory for SvgDocumentFactory {
    fn namespace(&self) -> &str {
        SVG_NAMESPACE
    }

    fn create_element(&self, name: &str) -> Element {
        Element::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_factory_creates_named_elements() {
        let factory = SvgDocumentFactory::new();
        let rect = factory.create_element("rect");
        assert_eq!(rect.name(), "rect");
        assert_eq!(rect.attributes().count(), 0);
        assert_eq!(factory.namespace(), SVG_NAMESPACE);
    }

    #[test]
    fn test_default_node_constructors() {
        let factory = SvgDocumentFactory;
        assert_eq!(factory.create_text("hi"), Node::Text("hi".into()));
        assert_eq!(factory.create_comment("c"), Node::Comment("c".into()));
    }
}
