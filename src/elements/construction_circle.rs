//! Construction circle element

use super::ElementCommon;

/// A helper circle around a point.  Construction geometry is carried through
/// read/write but never rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructionCircleElement {
    pub common: ElementCommon,
    pub center_point_index: i32,
    pub radius: f64,
}
