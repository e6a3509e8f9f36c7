//! Text element

use super::ElementCommon;
use bitflags::bitflags;

bitflags! {
    /// Text anchor flags; horizontal and vertical bits are combined
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextAlignment: i32 {
        const VERTICAL_BOTTOM = 1;
        const VERTICAL_CENTER = 2;
        const VERTICAL_TOP = 4;
        const HORIZONTAL_LEFT = 8;
        const HORIZONTAL_CENTER = 16;
        const HORIZONTAL_RIGHT = 32;
    }
}

/// Text flow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum TextOrientation {
    #[default]
    Right = 1,
    Left = 2,
    Up = 3,
    Down = 4,
}

/// A text block anchored at a point of the owning part's point table.
///
/// `char_angle` rotates individual characters, `text_angle` rotates the whole
/// block around the anchor.  `text` holds one entry per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextElement {
    pub common: ElementCommon,
    pub start_point_index: i32,
    pub char_height: f64,
    pub char_ratio: f64,
    pub char_angle: f64,
    pub line_separation: f64,
    pub text_angle: f64,
    pub alignment: TextAlignment,
    pub orientation: i32,
    pub text: Vec<String>,
}
