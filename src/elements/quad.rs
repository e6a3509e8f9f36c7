//! Quadrilateral element

use super::ElementCommon;

/// A closed quadrilateral over four corner points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadElement {
    pub common: ElementCommon,
    pub corner_point1_index: i32,
    pub corner_point2_index: i32,
    pub corner_point3_index: i32,
    pub corner_point4_index: i32,
    pub fill: i32,
    pub fill_color: i32,
}
