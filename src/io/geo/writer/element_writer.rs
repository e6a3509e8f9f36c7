//! Element list writer
//!
//! Serializes elements with point references remapped through the index map
//! produced by the point table writer.  A reference with no entry in the map
//! is written unchanged.

use std::collections::HashMap;

use crate::elements::{
    ArcSegment, ArrowElement, CircleElement, ConstructionCircleElement, ConstructionLineElement,
    Element, LineSegment, PointElement, QuadElement, TextElement,
};
use crate::io::geo::constants;
use crate::io::geo::writer::line_writer::LineWriter;

pub(crate) struct ElementWriter<'a> {
    writer: &'a mut LineWriter,
    point_index_map: &'a HashMap<i32, i32>,
}

impl<'a> ElementWriter<'a> {
    pub fn new(writer: &'a mut LineWriter, point_index_map: &'a HashMap<i32, i32>) -> Self {
        Self {
            writer,
            point_index_map,
        }
    }

    pub fn write_list(&mut self, section_code: &str, elements: &[Element]) {
        self.writer.write_section_line(section_code, None);
        for element in elements {
            self.write(element);
        }
        self.writer.write_token_line(constants::SECTION_END, None);
    }

    pub fn write(&mut self, element: &Element) {
        match element {
            Element::Point(point) => self.on_point(point),
            Element::Line(line) => self.on_line(line),
            Element::Circle(circle) => self.on_circle(circle),
            Element::Arc(arc) => self.on_arc(arc),
            Element::ConstructionLine(line) => self.on_construction_line(line),
            Element::ConstructionCircle(circle) => self.on_construction_circle(circle),
            Element::Arrow(arrow) => self.on_arrow(arrow),
            Element::Quad(quad) => self.on_quad(quad),
            Element::Text(text) => self.on_text(text),
        }
        self.write_attributes(element);
        self.writer.write_token_line(constants::ELEMENT_END, None);
    }

    fn remap(&self, point_index: i32) -> i32 {
        self.point_index_map
            .get(&point_index)
            .copied()
            .unwrap_or(point_index)
    }

    fn on_line(&mut self, line: &LineSegment) {
        self.writer
            .write_token_line(if line.is_chamfer { "CHA" } else { "LIN" }, line.common.id.as_deref());
        self.write_color_and_stroke(line.common.color, line.common.stroke);
        self.writer
            .write_int_list_line(&[self.remap(line.start_point_index), self.remap(line.end_point_index)]);
    }

    fn on_circle(&mut self, circle: &CircleElement) {
        self.writer.write_token_line("CIR", circle.common.id.as_deref());
        self.write_color_and_stroke(circle.common.color, circle.common.stroke);
        self.writer
            .write_int_line(self.remap(circle.center_point_index))
            .write_double_line(circle.radius);
    }

    fn on_arc(&mut self, arc: &ArcSegment) {
        self.writer
            .write_token_line(if arc.is_rounding { "FIL" } else { "ARC" }, arc.common.id.as_deref());
        self.write_color_and_stroke(arc.common.color, arc.common.stroke);
        self.writer
            .write_int_list_line(&[
                self.remap(arc.center_point_index),
                self.remap(arc.start_point_index),
                self.remap(arc.end_point_index),
            ])
            .write_int_line(arc.orientation);
    }

    fn on_point(&mut self, point: &PointElement) {
        self.writer.write_token_line("PKT", point.common.id.as_deref());
        self.write_color_and_stroke(point.common.color, point.common.stroke);
        self.writer.write_int_line(self.remap(point.point_index));
    }

    fn on_construction_line(&mut self, line: &ConstructionLineElement) {
        self.writer.write_token_line("CLIN", line.common.id.as_deref());
        self.write_color_and_stroke(line.common.color, line.common.stroke);
        self.writer
            .write_int_line(self.remap(line.point_index))
            .write_double_list_line(&[line.x_slope, line.y_slope, line.offset]);
    }

    fn on_construction_circle(&mut self, circle: &ConstructionCircleElement) {
        self.writer.write_token_line("CCIR", circle.common.id.as_deref());
        self.write_color_and_stroke(circle.common.color, circle.common.stroke);
        self.writer
            .write_int_line(self.remap(circle.center_point_index))
            .write_double_line(circle.radius);
    }

    fn on_arrow(&mut self, arrow: &ArrowElement) {
        self.writer.write_token_line("LED", arrow.common.id.as_deref());
        self.write_color_and_stroke(arrow.common.color, arrow.common.stroke);
        self.writer
            .write_int_list_line(&[
                self.remap(arrow.start_point_index),
                self.remap(arrow.end_point_index),
            ])
            .write_double_list_line(&[arrow.tip_length, arrow.tip_width]);
    }

    fn on_quad(&mut self, quad: &QuadElement) {
        self.writer.write_token_line("QUAD", quad.common.id.as_deref());
        self.write_color_and_stroke(quad.common.color, quad.common.stroke);
        self.writer
            .write_int_list_line(&[
                self.remap(quad.corner_point1_index),
                self.remap(quad.corner_point2_index),
                self.remap(quad.corner_point3_index),
                self.remap(quad.corner_point4_index),
            ])
            .write_int_list_line(&[quad.fill, quad.fill_color]);
    }

    fn on_text(&mut self, text: &TextElement) {
        self.writer.write_token_line("TXT", text.common.id.as_deref());
        self.write_color_and_stroke(text.common.color, text.common.stroke);
        self.writer
            .write_int_line(self.remap(text.start_point_index))
            .write_double_list_line(&[text.char_height, text.char_ratio, text.char_angle])
            .write_double_list_line(&[text.line_separation, text.text_angle])
            .write_int_list_line(&[
                text.alignment.bits(),
                text.orientation,
                text.text.len() as i32,
            ]);
        for line in &text.text {
            self.writer.write_text_line(line);
        }
    }

    fn write_color_and_stroke(&mut self, color: i32, stroke: i32) {
        self.writer.write_int_list_line(&[color, stroke]);
    }

    fn write_attributes(&mut self, element: &Element) {
        if let Some(attributes) = &element.common().attributes {
            if !attributes.is_empty() {
                self.writer.write_int_line(attributes.len() as i32);
                for attribute_index in attributes {
                    self.writer.write_int_line(*attribute_index);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ElementCommon;

    fn remapped(element: Element, map: &[(i32, i32)]) -> String {
        let map: HashMap<i32, i32> = map.iter().copied().collect();
        let mut writer = LineWriter::new();
        ElementWriter::new(&mut writer, &map).write(&element);
        writer.into_string("\n")
    }

    #[test]
    fn test_line_with_remapped_points() {
        let line = Element::Line(LineSegment {
            common: ElementCommon {
                color: 1,
                stroke: 0,
                ..ElementCommon::default()
            },
            start_point_index: 10,
            end_point_index: 20,
            is_chamfer: false,
        });
        assert_eq!(remapped(line, &[(10, 1), (20, 2)]), "LIN\n1 0\n1 2\n|~\n");
    }

    #[test]
    fn test_dangling_reference_passes_through() {
        let point = Element::Point(PointElement {
            common: ElementCommon::default(),
            point_index: 42,
        });
        assert_eq!(remapped(point, &[]), "PKT\n0 0\n42\n|~\n");
    }

    #[test]
    fn test_attributes_written_after_fields() {
        let circle = Element::Circle(CircleElement {
            common: ElementCommon {
                color: 3,
                stroke: 1,
                attributes: Some(vec![5]),
                ..ElementCommon::default()
            },
            center_point_index: 1,
            radius: 2.0,
        });
        assert_eq!(
            remapped(circle, &[(1, 1)]),
            "CIR\n3 1\n1\n2.000000000\n1\n5\n|~\n"
        );
    }

    #[test]
    fn test_rounding_discriminator() {
        let arc = Element::Arc(ArcSegment {
            common: ElementCommon::default(),
            center_point_index: 1,
            start_point_index: 2,
            end_point_index: 3,
            orientation: 1,
            is_rounding: true,
        });
        assert!(remapped(arc, &[(1, 1), (2, 2), (3, 3)]).starts_with("FIL\n"));
    }
}
