//! Subpart record

use indexmap::IndexMap;

use super::Contour;
use crate::elements::Element;
use crate::types::Vector3;

/// A nested geometric unit below a part, with its own independent point
/// table.  Unlike a part it carries bend line geometry directly instead of
/// bending records, and no copies or attribute maps.
#[derive(Debug, Clone, Default)]
pub struct Subpart {
    pub id: Option<String>,
    pub name: String,
    pub info: String,
    pub number: String,
    pub min: Vector3,
    pub max: Vector3,
    pub center_of_gravity: Vector3,
    pub area: f64,
    pub contours_count: i32,

    pub points: IndexMap<i32, Vector3>,
    pub elements: Vec<Element>,
    pub bending_lines: Vec<Element>,
    pub contours: Vec<Contour>,
}
