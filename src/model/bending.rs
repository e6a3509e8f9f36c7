//! Bending record

use crate::elements::Element;

/// A bend line description: classification fields, tool identifiers and the
/// bend line geometry (its own element sequence, not contour-linked).
#[derive(Debug, Clone, Default)]
pub struct Bending {
    pub id: Option<String>,
    pub bending_type: i32,
    pub method: i32,
    pub technique: i32,
    pub angle: f64,
    pub pre_angle: f64,
    pub start_radius: f64,
    pub radius_from_table: f64,
    pub bending_factor: f64,
    pub upper_tool: String,
    pub lower_tool: String,
    /// Indices into the part's bending attribute map
    pub attributes: Option<Vec<i32>>,
    pub bending_lines: Vec<Element>,
}
