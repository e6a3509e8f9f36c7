//! Line segment element

use super::ElementCommon;

/// A straight segment between two points of the owning part's point table.
///
/// Chamfer segments share this layout; `is_chamfer` selects the `CHA`
/// discriminator instead of `LIN`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSegment {
    pub common: ElementCommon,
    pub start_point_index: i32,
    pub end_point_index: i32,
    pub is_chamfer: bool,
}
