//! # geo-tools-rs
//!
//! A pure Rust library for reading, writing and rendering sheet-metal part
//! files in GEO format.
//!
//! GEO is the line-oriented text format used by sheet-metal CAD/CAM tooling
//! to exchange flat part geometry: point tables, drawing elements, contour
//! boundaries, bend lines and nesting metadata.
//!
//! ## Features
//!
//! - Read GEO versions 1.01, 1.02 and 1.03, with or without the optional
//!   sub-header and mirror fields
//! - Canonical writing: sorted and renumbered point tables, fixed section
//!   order, nine-digit doubles
//! - SVG rendering with per-part `<defs>` groups and `<use>` placement
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use geo_tools_rs::io::geo;
//! use geo_tools_rs::io::geo::WriteOptions;
//!
//! // Read a GEO file
//! let doc = geo::read_file("sample.geo")?;
//!
//! // Access parts
//! for part in &doc.parts {
//!     println!("Part: {} ({} points)", part.name, part.points.len());
//! }
//!
//! // Write canonical GEO text
//! let text = geo::write(&doc, &WriteOptions::default());
//!
//! // Render to SVG
//! use geo_tools_rs::io::svg::{SvgOptions, SvgWriter};
//! let svg = SvgWriter::new().to_svg(&doc, &SvgOptions::default());
//! # Ok::<(), geo_tools_rs::error::GeoError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod elements;
pub mod error;
pub mod io;
pub mod model;
pub mod types;

// Re-export commonly used types
pub use document::GeoDocument;
pub use error::{GeoError, Result};
pub use types::{Matrix4, Vector3};

pub use elements::{
    ArcSegment, ArrowElement, CircleElement, ConstructionCircleElement, ConstructionLineElement,
    Element, ElementColor, ElementCommon, ElementStroke, LineSegment, PointElement, QuadElement,
    TextAlignment, TextElement,
};
pub use model::{
    Attribute, Bending, Contour, ContourClass, ContourType, GeoVersion, Header, Part, PartCopy,
    Subpart,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
