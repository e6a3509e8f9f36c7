//! GEO document model
//!
//! Plain data records built by the reader hierarchy and consumed by the
//! writer and the SVG renderer.  There is no incremental mutation API;
//! callers construct or modify the records directly between read and write.

pub mod attribute;
pub mod bending;
pub mod contour;
pub mod header;
pub mod part;
pub mod part_copy;
pub mod subpart;

pub use attribute::Attribute;
pub use bending::Bending;
pub use contour::{Contour, ContourClass, ContourType};
pub use header::{GeoVersion, Header};
pub use part::Part;
pub use part_copy::PartCopy;
pub use subpart::Subpart;
