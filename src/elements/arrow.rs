//! Arrow element

use super::ElementCommon;

/// An arrow from start to end point with a triangular tip.
///
/// `tip_width` is the half-width of the tip measured perpendicular to the
/// shaft direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrowElement {
    pub common: ElementCommon,
    pub start_point_index: i32,
    pub end_point_index: i32,
    pub tip_length: f64,
    pub tip_width: f64,
}
