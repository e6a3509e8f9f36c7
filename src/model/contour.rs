//! Contour record

use crate::elements::Element;
use crate::types::Vector3;

/// Contour open/closed classification as stored in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ContourType {
    Closed = 24,
    Open = 25,
}

/// Inner/outer classification as stored in the `is_inner` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ContourClass {
    Outer = 0,
    Inner = 1,
    Unknown = 2,
}

/// An ordered boundary of a part or subpart.
///
/// `segments` form one connected boundary path; `offset_segments` is a
/// separately stored, unconnected sequence of derived geometry that is
/// carried through but never recomputed.  `parent_contour_number` is a weak
/// back-reference by contour number, not ownership.
#[derive(Debug, Clone, Default)]
pub struct Contour {
    pub id: Option<String>,
    pub info: String,
    pub number: i32,
    pub contour_type: i32,
    pub is_inner: i32,
    pub inner_contours_count: i32,
    pub orientation: Vector3,
    pub min: Vector3,
    pub max: Vector3,
    pub center_of_gravity: Vector3,
    pub area: f64,
    pub parent_contour_number: i32,
    pub segments: Vec<Element>,
    pub offset_segments: Vec<Element>,
}

impl Contour {
    /// Whether the boundary path is closed
    pub fn is_closed(&self) -> bool {
        self.contour_type == ContourType::Closed as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_closed() {
        let mut contour = Contour {
            contour_type: ContourType::Closed as i32,
            ..Contour::default()
        };
        assert!(contour.is_closed());
        contour.contour_type = ContourType::Open as i32;
        assert!(!contour.is_closed());
    }
}
