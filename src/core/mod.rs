// Response rendering
pub mod document;
pub mod xml;

pub use document::render;
pub use xml::{escape_xml, XML_DECLARATION};
