//! Document model for generated SVG
//!
//! - **element**: owned element tree (`Element`, `Node`)
//! - **factory**: `DocumentFactory` trait and the SVG default
//! - **serialize**: XML output via quick-xml
//! - **parse**: SVG import via roxmltree
//! - **root**: `<svg>` root creation from a `GeneratorContext`

pub mod element;
pub mod factory;
pub mod parse;
pub mod root;
pub mod serialize;

pub use element::{Element, Node};
pub use factory::{DocumentFactory, SvgDocumentFactory, SVG_NAMESPACE, XLINK_NAMESPACE};
pub use parse::parse_svg;
pub use root::create_svg_root;
pub use serialize::{to_xml_string, SerializeOptions};
