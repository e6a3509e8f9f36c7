//! GEO file format support
//!
//! Reading is a single recursive-descent pass over the text; writing
//! produces canonical output (sorted, renumbered point tables and a fixed
//! section order).  Files are decoded as UTF-8 when valid and as Windows
//! code page 1252 otherwise, which covers the Latin-1 output of the legacy
//! CAD tools this format comes from.

pub(crate) mod constants;
pub(crate) mod parser;
mod reader;
mod writer;

use std::fs;
use std::path::Path;

use crate::document::GeoDocument;
use crate::error::Result;

pub use writer::WriteOptions;

/// Parse a GEO document from text
pub fn read(content: &str) -> Result<GeoDocument> {
    reader::GeoReader::read(content)
}

/// Read and parse a GEO file from disk
pub fn read_file(path: impl AsRef<Path>) -> Result<GeoDocument> {
    let bytes = fs::read(path)?;
    let content = match std::str::from_utf8(&bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            text.into_owned()
        }
    };
    read(&content)
}

/// Serialize a document to GEO text
pub fn write(document: &GeoDocument, options: &WriteOptions) -> String {
    writer::GeoWriter::write(document, options)
}

/// Serialize a document and write it to disk
pub fn write_file(
    document: &GeoDocument,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<()> {
    fs::write(path, write(document, options))?;
    Ok(())
}
