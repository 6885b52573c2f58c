//! Text-fragment selection from HTML documents.
//!
//! Thin wrapper over the `scraper` crate: the rest of the pipeline
//! only ever sees plain text fragments, never the DOM.

use scraper::Html;

/// Collect the text nodes of `html` that contain `needle`, in document
/// order.
///
/// The returned fragments are owned so the parsed document does not
/// outlive this call.
pub fn fragments_containing(html: &str, needle: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .filter(|t| t.contains(needle))
        .map(str::to_string)
        .collect()
}
