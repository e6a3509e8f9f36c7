//! GEO document structure

use crate::model::{Header, Part};

/// A complete GEO document: one header plus an ordered sequence of parts.
///
/// Built in one pass by [`crate::io::geo::read`] from a text buffer; an
/// immutable input to the writer and the SVG renderer.
#[derive(Debug, Clone, Default)]
pub struct GeoDocument {
    pub header: Header,
    pub parts: Vec<Part>,
}

impl GeoDocument {
    /// Create an empty document with a current-version header
    pub fn new() -> Self {
        GeoDocument::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeoVersion;

    #[test]
    fn test_new_document() {
        let doc = GeoDocument::new();
        assert_eq!(doc.header.version, GeoVersion::CURRENT);
        assert!(doc.parts.is_empty());
    }
}
