//! Creation of the `<svg>` root for a generation pass

use super::element::Element;
use super::factory::XLINK_NAMESPACE;
use crate::context::GeneratorContext;

/// Create the root `<svg>` element through the context's document factory.
///
/// The context's comment, when present, becomes the first child.
pub fn create_svg_root(ctx: &GeneratorContext) -> Element {
    let factory = ctx.document_factory();
    let mut root = factory.create_element("svg");
    root.set_attribute("xmlns", factory.namespace());
    root.set_attribute("xmlns:xlink", XLINK_NAMESPACE);
    root.set_attribute("version", "1.1");

    if let Some(comment) = ctx.comment() {
        root.append_child(factory.create_comment(comment));
    }

    log::debug!("created svg root (comment: {})", ctx.comment().is_some());
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DEFAULT_COMMENT;
    use crate::dom::{Node, SvgDocumentFactory, SVG_NAMESPACE};
    use std::sync::Arc;

    #[test]
    fn test_root_carries_namespaces_and_comment() {
        let ctx = GeneratorContext::create_default(Arc::new(SvgDocumentFactory::new()));
        let root = create_svg_root(&ctx);

        assert_eq!(root.name(), "svg");
        assert_eq!(root.attribute("xmlns"), Some(SVG_NAMESPACE));
        assert_eq!(root.attribute("xmlns:xlink"), Some(XLINK_NAMESPACE));
        assert_eq!(root.children(), &[Node::Comment(DEFAULT_COMMENT.to_string())]);
    }

    #[test]
    fn test_root_without_comment_has_no_children() {
        let ctx = GeneratorContext::create_default(Arc::new(SvgDocumentFactory::new()))
            .to_builder()
            .comment(None)
            .build()
            .unwrap();
        let root = create_svg_root(&ctx);
        assert!(root.children().is_empty());
    }
}
