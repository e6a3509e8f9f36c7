//! GEO drawing element types
//!
//! Every element carries a color index, a stroke (dash pattern) index and an
//! optional list of attribute indices.  Variant-specific geometry references
//! points by key into the owning part's (or subpart's) point table, never by
//! direct coordinate.

pub mod arc;
pub mod arrow;
pub mod circle;
pub mod construction_circle;
pub mod construction_line;
pub mod line;
pub mod point;
pub mod quad;
pub mod text;

pub use arc::ArcSegment;
pub use arrow::ArrowElement;
pub use circle::CircleElement;
pub use construction_circle::ConstructionCircleElement;
pub use construction_line::ConstructionLineElement;
pub use line::LineSegment;
pub use point::PointElement;
pub use quad::QuadElement;
pub use text::{TextAlignment, TextElement, TextOrientation};

/// Data shared by all element kinds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementCommon {
    /// Optional identifier token carried after the discriminator
    pub id: Option<String>,
    /// Color palette index (-1 marks "undefined")
    pub color: i32,
    /// Stroke / dash pattern index
    pub stroke: i32,
    /// Indices into the part's element attribute map
    pub attributes: Option<Vec<i32>>,
}

/// Named palette slots of the standard GEO color table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ElementColor {
    Undefined = -1,
    Black = 0,
    White = 1,
    Red = 2,
    Yellow = 3,
    Green = 4,
    Cyan = 5,
    Blue = 6,
    Magenta = 7,
    Highlight1 = 8,
    Highlight2 = 9,
    LightGrey = 10,
}

/// Named slots of the standard GEO stroke (dash pattern) table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ElementStroke {
    Solid = 0,
    Dash = 1,
    Dot = 2,
    DashDot = 3,
    DashDotDot = 4,
    LongDash = 5,
    CenterDash = 6,
    CenterDashDash = 7,
    SolidThick = 8,
}

/// A GEO drawing element
///
/// The closed set of element kinds found in free element lists, contour
/// boundaries, offset sequences and bend lines.  Chamfer and rounding are
/// sub-kinds of [`LineSegment`] and [`ArcSegment`] respectively, selected by
/// a flag on the variant rather than a separate case.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Point(PointElement),
    Line(LineSegment),
    Circle(CircleElement),
    Arc(ArcSegment),
    ConstructionLine(ConstructionLineElement),
    ConstructionCircle(ConstructionCircleElement),
    Arrow(ArrowElement),
    Quad(QuadElement),
    Text(TextElement),
}

impl Element {
    /// Shared element data
    pub fn common(&self) -> &ElementCommon {
        match self {
            Element::Point(e) => &e.common,
            Element::Line(e) => &e.common,
            Element::Circle(e) => &e.common,
            Element::Arc(e) => &e.common,
            Element::ConstructionLine(e) => &e.common,
            Element::ConstructionCircle(e) => &e.common,
            Element::Arrow(e) => &e.common,
            Element::Quad(e) => &e.common,
            Element::Text(e) => &e.common,
        }
    }

    /// Shared element data, mutable
    pub fn common_mut(&mut self) -> &mut ElementCommon {
        match self {
            Element::Point(e) => &mut e.common,
            Element::Line(e) => &mut e.common,
            Element::Circle(e) => &mut e.common,
            Element::Arc(e) => &mut e.common,
            Element::ConstructionLine(e) => &mut e.common,
            Element::ConstructionCircle(e) => &mut e.common,
            Element::Arrow(e) => &mut e.common,
            Element::Quad(e) => &mut e.common,
            Element::Text(e) => &mut e.common,
        }
    }

    /// The short token written in front of the element block
    pub fn discriminator(&self) -> &'static str {
        match self {
            Element::Point(_) => "PKT",
            Element::Line(e) if e.is_chamfer => "CHA",
            Element::Line(_) => "LIN",
            Element::Circle(_) => "CIR",
            Element::Arc(e) if e.is_rounding => "FIL",
            Element::Arc(_) => "ARC",
            Element::ConstructionLine(_) => "CLIN",
            Element::ConstructionCircle(_) => "CCIR",
            Element::Arrow(_) => "LED",
            Element::Quad(_) => "QUAD",
            Element::Text(_) => "TXT",
        }
    }
}
