//! Import of existing SVG markup, e.g. templates a pipeline fills in
//!
//! Uses roxmltree with DTDs allowed, so templates may carry a DOCTYPE and
//! internal entity declarations.

use roxmltree::{Document, Node as XmlNode, NodeType, ParsingOptions};

use super::element::{Element, Node};
use crate::errors::DomError;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Parse SVG markup into an owned element tree
///
/// Element and attribute names keep the prefixes the source bound them to,
/// and each element re-declares the namespaces it introduces, so the tree
/// serializes back to well-formed XML. Whitespace-only text is dropped.
pub fn parse_svg(svg: &str) -> Result<Element, DomError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(svg, options).map_err(|e| DomError::Parse(e.to_string()))?;
    Ok(convert_element(doc.root_element()))
}

fn qualified_name(node: XmlNode<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    let prefix = match namespace {
        Some(XML_NAMESPACE) => Some("xml"),
        Some(uri) => node.lookup_prefix(uri),
        None => None,
    };
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, local),
        None => local.to_string(),
    }
}

fn declare_namespaces(node: XmlNode<'_, '_>, element: &mut Element) {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| parent.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    for ns in node.namespaces() {
        // The xml prefix is bound implicitly
        if ns.name() == Some("xml") || inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        let attr = match ns.name() {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        };
        element.set_attribute(attr, ns.uri());
    }
}

fn convert_element(node: XmlNode<'_, '_>) -> Element {
    let tag = node.tag_name();
    let mut element = Element::new(qualified_name(node, tag.namespace(), tag.name()));
    declare_namespaces(node, &mut element);

    for attr in node.attributes() {
        element.set_attribute(qualified_name(node, attr.namespace(), attr.name()), attr.value());
    }

    for child in node.children() {
        match child.node_type() {
            NodeType::Element => element.append_child(Node::Element(convert_element(child))),
            NodeType::Text => {
                if let Some(text) = child.text() {
                    if !text.trim().is_empty() {
                        element.append_text(text);
                    }
                }
            }
            NodeType::Comment => {
                if let Some(text) = child.text() {
                    element.append_comment(text.trim());
                }
            }
            _ => {}
        }
    }

    element
}
