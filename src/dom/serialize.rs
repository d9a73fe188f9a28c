//! XML serialization of element trees using quick-xml

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::element::{Element, Node};
use crate::errors::DomError;

/// Output options for `to_xml_string`
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first
    pub xml_declaration: bool,
    /// Indentation width in spaces; `None` writes everything on one line
    pub indent: Option<usize>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            indent: Some(2),
        }
    }
}

impl SerializeOptions {
    pub fn compact() -> Self {
        Self {
            xml_declaration: false,
            indent: None,
        }
    }
}

/// Serialize an element tree to a string
pub fn to_xml_string(root: &Element, options: &SerializeOptions) -> Result<String, DomError> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(Cursor::new(Vec::new()), b' ', width),
        None => Writer::new(Cursor::new(Vec::new())),
    };

    if options.xml_declaration {
        write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_element(&mut writer, root)?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| DomError::Xml(format!("output is not UTF-8: {}", e)))
}

fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &Element) -> Result<(), DomError> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name, value));
    }

    if element.children().is_empty() {
        return write(writer, Event::Empty(start));
    }

    write(writer, Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(e) => write_element(writer, e)?,
            Node::Text(text) => write(writer, Event::Text(BytesText::new(text)))?,
            Node::Comment(text) => {
                validate_comment(text)?;
                write(writer, Event::Comment(BytesText::from_escaped(format!(" {} ", text))))?;
            }
        }
    }
    write(writer, Event::End(BytesEnd::new(element.name())))
}

fn write(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<(), DomError> {
    writer
        .write_event(event)
        .map_err(|e| DomError::Xml(e.to_string()))
}

fn validate_comment(text: &str) -> Result<(), DomError> {
    if text.contains("--") || text.ends_with('-') {
        return Err(DomError::InvalidComment(text.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_is_self_closing() {
        let rect = Element::new("rect").with_attribute("width", "10");
        let xml = to_xml_string(&rect, &SerializeOptions::compact()).unwrap();
        assert_eq!(xml, r#"<rect width="10"/>"#);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let mut text = Element::new("text").with_attribute("data-x", "a<b & \"c\"");
        text.append_text("Song & Dance <Test>");
        let xml = to_xml_string(&text, &SerializeOptions::compact()).unwrap();

        assert!(xml.contains("Song &amp; Dance &lt;Test&gt;"));
        assert!(xml.contains("a&lt;b &amp; &quot;c&quot;"));
    }

    #[test]
    fn test_declaration_and_comment() {
        let mut svg = Element::new("svg");
        svg.append_comment("made here");
        let xml = to_xml_string(&svg, &SerializeOptions::default()).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<!-- made here -->"));
        assert!(xml.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_comment_with_double_dash_is_rejected() {
        let mut svg = Element::new("svg");
        svg.append_comment("bad -- comment");
        let err = to_xml_string(&svg, &SerializeOptions::compact()).unwrap_err();
        assert!(matches!(err, DomError::InvalidComment(_)));
    }

    #[test]
    fn test_output_is_well_formed() {
        let mut g = Element::new("g").with_attribute("id", "g1");
        g.append_child(Element::new("circle").with_attribute("r", "4"));
        let mut svg = Element::new("svg").with_attribute("xmlns", super::super::SVG_NAMESPACE);
        svg.append_child(g);

        let xml = to_xml_string(&svg, &SerializeOptions::default()).unwrap();
        let parsed = roxmltree::Document::parse(&xml).unwrap();
        let circle = parsed.descendants().find(|n| n.has_tag_name("circle")).unwrap();
        assert_eq!(circle.attribute("r"), Some("4"));
    }
}
