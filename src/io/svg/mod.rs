//! SVG rendering of GEO documents
//!
//! Each part becomes a `<defs>` group referenced with `<use>` once for the
//! part and once per copy, so copies stay cheap however large the geometry
//! is.  GEO's y axis points up while SVG's points down; every emitted y
//! coordinate is negated in one place instead of transforming the groups,
//! which keeps text upright.  Contour boundaries are stitched into a single
//! `<path>`; construction geometry is never rendered.

use indexmap::IndexMap;

use crate::document::GeoDocument;
use crate::elements::{
    ArcSegment, ArrowElement, CircleElement, Element, ElementColor, LineSegment, PointElement,
    QuadElement, TextAlignment, TextElement,
};
use crate::model::{Contour, Part};
use crate::types::{Matrix4, Vector3};

/// Dash patterns by stroke index; index 0 and the last index render solid
const DASHES: [&str; 9] = [
    "",
    "10,10",
    "5,5",
    "10,10,5,10",
    "10,10,5,5,5,10",
    "15,10",
    "10,10",
    "10,10,5,10",
    "",
];

/// Default palette by color index; index 0 is the background fill and
/// index 1 the default stroke
const DEFAULT_PALETTE: [&str; 11] = [
    "white",
    "black",
    "red",
    "yellow",
    "green",
    "cyan",
    "blue",
    "magenta",
    "plum",
    "brown",
    "lightgrey",
];

const POINT_SYMBOL_ID: &str = "point";
const POINT_SYMBOL_DEF: &str = concat!(
    "<symbol id=\"point\" viewport=\"-2 -2 2 2\">",
    "<path d=\"M-2 0 H2 M0 -2 V2 M-1.5 -1.5 L1.5 1.5 M-1.5 1.5 L1.5 -1.5\" />",
    "</symbol>"
);

/// Stroke width for the global group
pub enum StrokeWidth {
    /// A width in user units
    Width(f64),
    /// A raw attribute value such as `"0.1%"` or `"2px"`
    Raw(String),
}

/// Raw SVG content injected into each part definition group
pub enum PartContent {
    Literal(String),
    Generate(Box<dyn Fn(&Part) -> Option<String>>),
}

impl PartContent {
    fn render(&self, part: &Part) -> String {
        match self {
            PartContent::Literal(content) => content.clone(),
            PartContent::Generate(generate) => generate(part).unwrap_or_default(),
        }
    }
}

/// Rendering options for [`SvgWriter::to_svg`]
#[derive(Default)]
pub struct SvgOptions {
    /// Stroke width of the global group, `"0.1%"` unless overridden;
    /// superseded by `target_stroke_width`
    pub stroke_width: Option<StrokeWidth>,
    /// Padding around the drawing in the viewBox, in user units
    pub padding: f64,
    /// Stroke width in target pixels; scaled back into user units and the
    /// padding widened so strokes are not clipped at the viewBox edge
    pub target_stroke_width: Option<f64>,
    pub target_width: Option<f64>,
    pub target_height: Option<f64>,
    /// Content prepended inside each part's definition group
    pub prepend_part: Option<PartContent>,
    /// Content appended inside each part's definition group
    pub append_part: Option<PartContent>,
}

/// The `<defs>` content of a rendering, addressable by name
pub struct SvgDefs {
    pub symbol_defs: IndexMap<String, String>,
    pub part_defs: IndexMap<String, String>,
}

/// Renders GEO documents to standalone SVG markup
pub struct SvgWriter {
    palette: Vec<String>,
}

impl Default for SvgWriter {
    fn default() -> Self {
        SvgWriter::new()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        SvgWriter {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Override palette entries by index; entries beyond the given slice
    /// keep their defaults
    pub fn set_colors(&mut self, colors: &[String]) {
        for (i, color) in colors.iter().enumerate() {
            if i < self.palette.len() {
                self.palette[i] = color.clone();
            } else {
                self.palette.push(color.clone());
            }
        }
    }

    /// Render a complete document as one `<svg>` element
    pub fn to_svg(&self, document: &GeoDocument, options: &SvgOptions) -> String {
        let min = document.header.min;
        let max = document.header.max;
        let svg_width = max.x - min.x;
        let svg_height = max.y - min.y;

        let target_width = options.target_width.unwrap_or(if svg_height != 0.0 {
            svg_width * options.target_height.unwrap_or(svg_height) / svg_height
        } else {
            svg_width
        });
        let target_height = options.target_height.unwrap_or(if svg_width != 0.0 {
            svg_height * options.target_width.unwrap_or(svg_width) / svg_width
        } else {
            svg_height
        });

        let mut stroke_width = match &options.stroke_width {
            Some(StrokeWidth::Width(width)) => fmt(*width),
            Some(StrokeWidth::Raw(raw)) => raw.clone(),
            None => "0.1%".to_string(),
        };
        let mut padding = options.padding;
        if let Some(target_stroke_width) = options.target_stroke_width {
            let effective =
                target_stroke_width * (svg_width / target_width).max(svg_height / target_height);
            padding = padding.max(effective / 2.0);
            stroke_width = format!("{}px", fmt(effective));
        }

        let view_box = format!(
            "viewBox=\"{} {} {} {}\"",
            fmt(min.x - padding),
            fmt(-max.y - padding),
            fmt(svg_width + padding * 2.0),
            fmt(svg_height + padding * 2.0),
        );
        let dimensions = if options.target_width.is_some() || options.target_height.is_some() {
            format!(
                " width=\"{}\" height=\"{}\"",
                fmt(target_width),
                fmt(target_height)
            )
        } else {
            String::new()
        };
        let global_group = format!(
            "<g stroke=\"{}\" stroke-width=\"{stroke_width}\" fill=\"none\">",
            self.palette[ElementColor::White as usize]
        );

        let names: Vec<String> = document
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| part_display_name(part, i))
            .collect();

        let mut defs = String::from("<defs>");
        defs.push_str(POINT_SYMBOL_DEF);
        for (part, name) in document.parts.iter().zip(&names) {
            defs.push_str(&self.write_part_def(part, name, options));
        }
        defs.push_str("</defs>");

        let part_uses: String = document
            .parts
            .iter()
            .zip(&names)
            .map(|(part, name)| self.write_part_and_copies(part, name))
            .collect();

        format!(
            "<svg {view_box}{dimensions} xmlns=\"http://www.w3.org/2000/svg\">{defs}{global_group}{part_uses}</g></svg>"
        )
    }

    /// The definition groups alone, for embedding into an existing SVG
    pub fn get_defs(&self, parts: &[Part], options: &SvgOptions) -> SvgDefs {
        let mut symbol_defs = IndexMap::new();
        symbol_defs.insert(POINT_SYMBOL_ID.to_string(), POINT_SYMBOL_DEF.to_string());

        let mut part_defs = IndexMap::new();
        for (i, part) in parts.iter().enumerate() {
            let name = if part.name.is_empty() {
                format!("part:{}", i + 1)
            } else {
                part.name.clone()
            };
            let def = self.write_part_def(part, &name, options);
            part_defs.insert(name, def);
        }

        SvgDefs {
            symbol_defs,
            part_defs,
        }
    }

    fn write_part_def(&self, part: &Part, name: &str, options: &SvgOptions) -> String {
        let prepend = options
            .prepend_part
            .as_ref()
            .map(|content| content.render(part))
            .unwrap_or_default();
        let append = options
            .append_part
            .as_ref()
            .map(|content| content.render(part))
            .unwrap_or_default();
        let contours = self.write_contours(&part.points, &part.contours);
        let elements = self.write_elements(&part.points, &part.elements);
        let bendings: String = part
            .bendings
            .iter()
            .map(|bending| self.write_elements(&part.points, &bending.bending_lines))
            .collect();
        format!("<g id=\"{name}\">{prepend}{contours}{elements}{bendings}{append}</g>")
    }

    fn write_part_and_copies(&self, part: &Part, name: &str) -> String {
        let transform = if part.transformation.is_identity_2d() {
            String::new()
        } else {
            format!(" transform=\"{}\"", write_transform(&part.transformation))
        };
        let copies: String = part
            .copies
            .iter()
            .map(|copy| {
                format!(
                    "<use href=\"#{name}\" transform=\"{}\" />",
                    write_transform(&copy.transformation)
                )
            })
            .collect();
        format!("<use href=\"#{name}\"{transform} />{copies}")
    }

    fn write_contours(&self, points: &IndexMap<i32, Vector3>, contours: &[Contour]) -> String {
        let mut non_path_elements: Vec<&Element> = Vec::new();
        let fragments: Vec<String> = contours
            .iter()
            .map(|contour| write_contour_fragment(points, contour, &mut non_path_elements))
            .collect();
        let path = if fragments.is_empty() {
            String::new()
        } else {
            format!(
                "<path fill=\"{}\" stroke=\"{}\" d=\"{}\" />",
                self.palette[ElementColor::Black as usize],
                self.palette[ElementColor::White as usize],
                fragments.join(" ")
            )
        };
        let elements: String = non_path_elements
            .iter()
            .map(|element| self.write_element(points, element))
            .collect();
        let offset_segments: String = contours
            .iter()
            .flat_map(|contour| &contour.offset_segments)
            .map(|element| self.write_element(points, element))
            .collect();
        format!("{path}{elements}{offset_segments}")
    }

    fn write_elements(&self, points: &IndexMap<i32, Vector3>, elements: &[Element]) -> String {
        elements
            .iter()
            .map(|element| self.write_element(points, element))
            .collect()
    }

    fn write_element(&self, points: &IndexMap<i32, Vector3>, element: &Element) -> String {
        match element {
            Element::Point(point) => write_point(points, point),
            Element::Line(line) => self.write_line(points, line),
            Element::Circle(circle) => self.write_circle(points, circle),
            Element::Arc(arc) => self.write_arc(points, arc),
            Element::Arrow(arrow) => self.write_arrow(points, arrow),
            Element::Quad(quad) => self.write_quad(points, quad),
            Element::Text(text) => self.write_text(points, text),
            // Construction geometry is never rendered
            Element::ConstructionLine(_) | Element::ConstructionCircle(_) => String::new(),
        }
    }

    fn write_line(&self, points: &IndexMap<i32, Vector3>, line: &LineSegment) -> String {
        format!(
            "<path {} d=\"{}\" />",
            self.write_stroke(line.common.color, line.common.stroke),
            write_line_fragment(points, line, true)
        )
    }

    fn write_circle(&self, points: &IndexMap<i32, Vector3>, circle: &CircleElement) -> String {
        let center = point(points, circle.center_point_index);
        format!(
            "<circle {} cx=\"{}\" cy=\"{}\" r=\"{}\" />",
            self.write_stroke(circle.common.color, circle.common.stroke),
            fmt(center.x),
            fmt(-center.y),
            fmt(circle.radius)
        )
    }

    fn write_arc(&self, points: &IndexMap<i32, Vector3>, arc: &ArcSegment) -> String {
        format!(
            "<path {} d=\"{}\" />",
            self.write_stroke(arc.common.color, arc.common.stroke),
            write_arc_fragment(points, arc, true)
        )
    }

    fn write_arrow(&self, points: &IndexMap<i32, Vector3>, arrow: &ArrowElement) -> String {
        let p1 = point(points, arrow.start_point_index);
        let p2 = point(points, arrow.end_point_index);
        let delta = p2 - p1;
        let len = (delta.x * delta.x + delta.y * delta.y).sqrt();
        let dx = delta.x / len;
        let dy = delta.y / len;
        let p3 = Vector3::new(p2.x - dx * arrow.tip_length, p2.y - dy * arrow.tip_length, 0.0);
        let p4 = Vector3::new(p3.x + dy * arrow.tip_width, p3.y - dx * arrow.tip_width, 0.0);
        let p5 = Vector3::new(p3.x - dy * arrow.tip_width, p3.y + dx * arrow.tip_width, 0.0);
        format!(
            "<path {} d=\"M{} L{} L{} L{} L{} L{}\" />",
            self.write_stroke(arrow.common.color, arrow.common.stroke),
            xy(p1),
            xy(p3),
            xy(p4),
            xy(p2),
            xy(p5),
            xy(p3)
        )
    }

    fn write_quad(&self, points: &IndexMap<i32, Vector3>, quad: &QuadElement) -> String {
        format!(
            "<path {} d=\"{} Z\" />",
            self.write_stroke(quad.common.color, quad.common.stroke),
            write_quad_fragment(points, quad)
        )
    }

    fn write_text(&self, points: &IndexMap<i32, Vector3>, text: &TextElement) -> String {
        let p1 = point(points, text.start_point_index);

        let anchor = if text.alignment.contains(TextAlignment::HORIZONTAL_CENTER) {
            "middle"
        } else if text.alignment.contains(TextAlignment::HORIZONTAL_RIGHT) {
            "end"
        } else {
            "start"
        };
        let baseline = if text.alignment.contains(TextAlignment::VERTICAL_CENTER) {
            "middle"
        } else if text.alignment.contains(TextAlignment::VERTICAL_TOP) {
            "hanging"
        } else {
            "auto"
        };

        let color = format!(
            "fill=\"{}\" stroke=\"none\"",
            self.palette_color(text.common.color)
        );

        let char_angle = if text.char_angle != 0.0 {
            format!(" rotate=\"{}\"", fmt(text.char_angle))
        } else {
            String::new()
        };
        let font = format!("font-size=\"{}\" font-family=\"serif\"{char_angle}", fmt(text.char_height));

        let transform = if text.text_angle != 0.0 {
            format!(
                " transform=\"rotate({} {} {})\"",
                fmt(text.text_angle),
                fmt(p1.x),
                fmt(-p1.y)
            )
        } else {
            String::new()
        };
        let placement = format!(
            "x=\"{}\" y=\"{}\"{transform} text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\"",
            fmt(p1.x),
            fmt(-p1.y)
        );

        let content = text.text.join("\n");
        format!("<text {placement} {color} {font}><![CDATA[{content}]]></text>")
    }

    fn palette_color(&self, color: i32) -> &str {
        usize::try_from(color)
            .ok()
            .and_then(|i| self.palette.get(i))
            .map(String::as_str)
            .unwrap_or(DEFAULT_PALETTE[ElementColor::White as usize])
    }

    fn write_stroke(&self, color: i32, stroke: i32) -> String {
        if color < 0 || color as usize >= self.palette.len() {
            return "fill=\"none\"".to_string();
        }
        let color = &self.palette[color as usize];
        if stroke <= 0 || stroke as usize >= DASHES.len() - 1 {
            format!("fill=\"none\" stroke=\"{color}\"")
        } else {
            format!(
                "fill=\"none\" stroke=\"{color}\" stroke-dasharray=\"{}\"",
                DASHES[stroke as usize]
            )
        }
    }
}

/// Parts get unique display names so repeated `<use>` references resolve
fn part_display_name(part: &Part, index: usize) -> String {
    let base = if part.name.is_empty() { "part" } else { &part.name };
    format!("{base}:{}", index + 1)
}

fn point(points: &IndexMap<i32, Vector3>, index: i32) -> Vector3 {
    points.get(&index).copied().unwrap_or(Vector3::ZERO)
}

/// Shortest decimal form, with negative zero normalized
fn fmt(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

/// A point as SVG path coordinates, y negated
fn xy(p: Vector3) -> String {
    format!("{} {}", fmt(p.x), fmt(-p.y))
}

fn write_transform(matrix: &Matrix4) -> String {
    let m = &matrix.rows;
    format!(
        "matrix({}, {}, {}, {}, {}, {})",
        fmt(m[0][0]),
        fmt(m[1][0]),
        fmt(m[0][1]),
        fmt(m[1][1]),
        fmt(m[3][0]),
        fmt(-m[3][1])
    )
}

fn write_point(points: &IndexMap<i32, Vector3>, element: &PointElement) -> String {
    let p = point(points, element.point_index);
    format!(
        "<use href=\"#{POINT_SYMBOL_ID}\" x=\"{}\" y=\"{}\" />",
        fmt(p.x),
        fmt(-p.y)
    )
}

fn write_line_fragment(points: &IndexMap<i32, Vector3>, line: &LineSegment, with_start: bool) -> String {
    let p1 = point(points, line.start_point_index);
    let p2 = point(points, line.end_point_index);
    if with_start {
        format!("M{} L{}", xy(p1), xy(p2))
    } else {
        format!("L{}", xy(p2))
    }
}

/// A full circle as two half-circle arcs, since a single SVG arc command
/// cannot express a closed circle
fn write_circle_fragment(points: &IndexMap<i32, Vector3>, circle: &CircleElement) -> String {
    let r = circle.radius;
    let c = point(points, circle.center_point_index);
    let p1 = Vector3::new(c.x + r, c.y, 0.0);
    let p2 = Vector3::new(c.x - r, c.y, 0.0);
    format!(
        "M{} A{r} {r} 0 1 0 {} A{r} {r} 0 1 0 {}",
        xy(p1),
        xy(p2),
        xy(p1),
        r = fmt(r)
    )
}

fn write_arc_fragment(points: &IndexMap<i32, Vector3>, arc: &ArcSegment, with_start: bool) -> String {
    let pc = point(points, arc.center_point_index);
    let p1 = point(points, arc.start_point_index);
    let p2 = point(points, arc.end_point_index);
    let dx1 = p1.x - pc.x;
    let dy1 = p1.y - pc.y;
    let r = (dx1 * dx1 + dy1 * dy1).sqrt();
    let mut span_angle =
        arc.orientation as f64 * ((p2.y - pc.y).atan2(p2.x - pc.x) - dy1.atan2(dx1));
    if span_angle < 0.0 {
        span_angle += 2.0 * std::f64::consts::PI;
    }
    let large = i32::from(span_angle >= std::f64::consts::PI);
    let sweep = i32::from(arc.orientation < 0);
    if with_start {
        format!("M{} A{} {} 0 {large} {sweep} {}", xy(p1), fmt(r), fmt(r), xy(p2))
    } else {
        format!("A{} {} 0 {large} {sweep} {}", fmt(r), fmt(r), xy(p2))
    }
}

fn write_quad_fragment(points: &IndexMap<i32, Vector3>, quad: &QuadElement) -> String {
    let p1 = point(points, quad.corner_point1_index);
    let p2 = point(points, quad.corner_point2_index);
    let p3 = point(points, quad.corner_point3_index);
    let p4 = point(points, quad.corner_point4_index);
    format!("M{} L{} L{} L{}", xy(p1), xy(p2), xy(p3), xy(p4))
}

/// Stitch a contour's path-capable segments into one fragment; segments
/// without a path form are collected for standalone rendering
fn write_contour_fragment<'a>(
    points: &IndexMap<i32, Vector3>,
    contour: &'a Contour,
    non_path_elements: &mut Vec<&'a Element>,
) -> String {
    let mut fragments: Vec<String> = Vec::new();
    for element in &contour.segments {
        let with_start = fragments.is_empty();
        match element {
            Element::Line(line) => {
                fragments.push(write_line_fragment(points, line, with_start));
            }
            Element::Arc(arc) => {
                fragments.push(write_arc_fragment(points, arc, with_start));
            }
            Element::Circle(circle) => {
                fragments.push(write_circle_fragment(points, circle));
            }
            Element::Quad(quad) => {
                fragments.push(write_quad_fragment(points, quad));
            }
            other => non_path_elements.push(other),
        }
    }
    let path = fragments.join(" ");
    if !path.is_empty() && contour.is_closed() {
        format!("{path} Z")
    } else {
        path
    }
}
