use std::fmt::Write;

use crate::core::xml::{escape_xml, XML_DECLARATION};
use crate::models::{ErrorResponse, GeocodeResponse, ResponseDocument};

/// Render a response document in the legacy layout.
pub fn render(document: &ResponseDocument) -> String {
    match document {
        ResponseDocument::Geocode(response) => render_geocode(response),
        ResponseDocument::Error(response) => render_error(response),
    }
}

fn render_geocode(response: &GeocodeResponse) -> String {
    let candidate = &response.candidate;
    let mut xml = String::with_capacity(512);

    // Writing into a String cannot fail
    let _ = write!(
        xml,
        "{decl}\n<results>\n  <query>{query}</query>\n  <geodetic>{geodetic}</geodetic>\n  <iConf>{conf}</iConf>\n  <converted>{converted}</converted>\n  <candidate>\n    <address>{address}</address>\n    <longitude>{lng}</longitude>\n    <latitude>{lat}</latitude>\n    <iLvl>{level}</iLvl>\n  </candidate>\n</results>",
        decl = XML_DECLARATION,
        query = escape_xml(&response.query),
        geodetic = response.geodetic,
        conf = response.confidence,
        converted = escape_xml(&response.converted),
        address = escape_xml(&candidate.address),
        lng = format_coordinate(candidate.longitude),
        lat = format_coordinate(candidate.latitude),
        level = candidate.level,
    );

    xml
}

fn render_error(response: &ErrorResponse) -> String {
    format!(
        "{}\n<results>\n  <error>{}</error>\n</results>",
        XML_DECLARATION,
        escape_xml(&response.message)
    )
}

/// Shortest round-trip decimal form, empty when the normalizer gave no point
fn format_coordinate(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
