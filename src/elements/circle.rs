//! Circle element

use super::ElementCommon;

/// A full circle around a point of the owning part's point table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleElement {
    pub common: ElementCommon,
    pub center_point_index: i32,
    pub radius: f64,
}
