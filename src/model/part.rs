//! Part record

use indexmap::IndexMap;

use super::{Attribute, Bending, Contour, PartCopy, Subpart};
use crate::elements::Element;
use crate::types::{Matrix4, Vector3};

/// A top-level geometric unit of a GEO document.
///
/// The point table maps a part-local integer key to a coordinate; every
/// element below this part references points through that key.  Insertion
/// order of the table is irrelevant to readers but is the tie-break order
/// used when the writer sorts the table by coordinate.
#[derive(Debug, Clone, Default)]
pub struct Part {
    pub id: Option<String>,
    pub name: String,
    pub info: String,
    pub processing_rule: String,
    pub norm_direction: Vector3,
    pub transformation: Matrix4,
    pub min: Vector3,
    pub max: Vector3,
    pub center_of_gravity: Vector3,
    pub area: f64,
    pub contours_count: i32,
    pub copies_count: i32,
    pub subparts_count: i32,
    /// Optional trailing field pair; omitted on write when both are zero and
    /// the legacy-compatibility option is set
    pub is_mirrored: i32,
    pub mirroring_index: i32,

    pub points: IndexMap<i32, Vector3>,
    pub elements: Vec<Element>,
    pub contours: Vec<Contour>,
    pub copies: Vec<PartCopy>,
    pub bendings: Vec<Bending>,
    pub subparts: Vec<Subpart>,
    /// Free-form named attributes, emission order = insertion order
    pub attributes: IndexMap<String, String>,
    /// Attributes referenced by elements, keyed by attribute number
    pub element_attributes: IndexMap<i32, Attribute>,
    /// Attributes referenced by bendings, keyed by attribute number
    pub bending_attributes: IndexMap<i32, Attribute>,
}
