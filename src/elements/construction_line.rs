//! Construction line element

use super::ElementCommon;

/// An infinite helper line through a point, given by slope components and an
/// offset.  Construction geometry is carried through read/write but never
/// rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructionLineElement {
    pub common: ElementCommon,
    pub point_index: i32,
    pub x_slope: f64,
    pub y_slope: f64,
    pub offset: f64,
}
