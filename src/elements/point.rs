//! Point marker element

use super::ElementCommon;

/// A drawn point marker at a point of the owning part's point table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointElement {
    pub common: ElementCommon,
    pub point_index: i32,
}
