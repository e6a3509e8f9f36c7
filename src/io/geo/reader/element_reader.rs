//! Element block reader
//!
//! One reader function per element kind, selected by a match on the short
//! discriminator token; the table is exhaustive so an unknown discriminator
//! is rejected at the point of dispatch.

use crate::elements::{
    ArcSegment, ArrowElement, CircleElement, ConstructionCircleElement, ConstructionLineElement,
    Element, ElementCommon, LineSegment, PointElement, QuadElement, TextAlignment, TextElement,
};
use crate::error::Result;
use crate::io::geo::constants;
use crate::io::geo::parser::Parser;

pub(crate) struct ElementReader<'a> {
    parser: &'a mut Parser,
}

impl<'a> ElementReader<'a> {
    pub fn new(parser: &'a mut Parser) -> Self {
        Self { parser }
    }

    /// Read elements until the next section marker, then the list end token
    pub fn read_list(&mut self) -> Result<Vec<Element>> {
        let mut elements = Vec::new();
        while !self.parser.is_section_char() {
            elements.push(self.read()?);
        }
        self.parser
            .read_expected_section_end_line(constants::SECTION_END)?;
        Ok(elements)
    }

    /// Read one element block: discriminator, color/stroke, kind-specific
    /// fields, optional attribute list, end token
    pub fn read(&mut self) -> Result<Element> {
        let (discriminator, id) = self.parser.read_token_line_with_optional_id()?;
        let color = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let stroke = self.parser.read_int_line()?;
        let common = ElementCommon {
            id,
            color,
            stroke,
            attributes: None,
        };

        let mut element = match discriminator.as_str() {
            "LIN" => Element::Line(self.read_line(common, false)?),
            "CHA" => Element::Line(self.read_line(common, true)?),
            "CIR" => Element::Circle(self.read_circle(common)?),
            "ARC" => Element::Arc(self.read_arc(common, false)?),
            "FIL" => Element::Arc(self.read_arc(common, true)?),
            "PKT" => Element::Point(self.read_point(common)?),
            "CLIN" => Element::ConstructionLine(self.read_construction_line(common)?),
            "CCIR" => Element::ConstructionCircle(self.read_construction_circle(common)?),
            "LED" => Element::Arrow(self.read_arrow(common)?),
            "QUAD" => Element::Quad(self.read_quad(common)?),
            "TXT" => Element::Text(self.read_text(common)?),
            _ => {
                return self
                    .parser
                    .fail(format!("Unknown element type \"{discriminator}\""))
            }
        };

        element.common_mut().attributes = self.read_attributes()?;
        self.parser
            .read_expected_token_line(constants::ELEMENT_END, "element end")?;
        Ok(element)
    }

    fn read_line(&mut self, common: ElementCommon, is_chamfer: bool) -> Result<LineSegment> {
        let start_point_index = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let end_point_index = self.parser.read_int_line()?;
        Ok(LineSegment {
            common,
            start_point_index,
            end_point_index,
            is_chamfer,
        })
    }

    fn read_circle(&mut self, common: ElementCommon) -> Result<CircleElement> {
        let center_point_index = self.parser.read_int_line()?;
        let radius = self.parser.read_double_line()?;
        Ok(CircleElement {
            common,
            center_point_index,
            radius,
        })
    }

    fn read_arc(&mut self, common: ElementCommon, is_rounding: bool) -> Result<ArcSegment> {
        let center_point_index = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let start_point_index = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let end_point_index = self.parser.read_int_line()?;
        let orientation = self.parser.read_int_line()?;
        Ok(ArcSegment {
            common,
            center_point_index,
            start_point_index,
            end_point_index,
            orientation,
            is_rounding,
        })
    }

    fn read_point(&mut self, common: ElementCommon) -> Result<PointElement> {
        let point_index = self.parser.read_int_line()?;
        Ok(PointElement {
            common,
            point_index,
        })
    }

    fn read_construction_line(
        &mut self,
        common: ElementCommon,
    ) -> Result<ConstructionLineElement> {
        let point_index = self.parser.read_int_line()?;
        let v = self.parser.read_vector_line()?;
        Ok(ConstructionLineElement {
            common,
            point_index,
            x_slope: v.x,
            y_slope: v.y,
            offset: v.z,
        })
    }

    fn read_construction_circle(
        &mut self,
        common: ElementCommon,
    ) -> Result<ConstructionCircleElement> {
        let center_point_index = self.parser.read_int_line()?;
        let radius = self.parser.read_double_line()?;
        Ok(ConstructionCircleElement {
            common,
            center_point_index,
            radius,
        })
    }

    fn read_arrow(&mut self, common: ElementCommon) -> Result<ArrowElement> {
        let start_point_index = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let end_point_index = self.parser.read_int_line()?;
        let tip_length = self.parser.read_double()?;
        self.parser.skip_whitespace()?;
        let tip_width = self.parser.read_double_line()?;
        Ok(ArrowElement {
            common,
            start_point_index,
            end_point_index,
            tip_length,
            tip_width,
        })
    }

    fn read_quad(&mut self, common: ElementCommon) -> Result<QuadElement> {
        let corner_point1_index = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let corner_point2_index = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let corner_point3_index = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let corner_point4_index = self.parser.read_int_line()?;
        let fill = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let fill_color = self.parser.read_int_line()?;
        Ok(QuadElement {
            common,
            corner_point1_index,
            corner_point2_index,
            corner_point3_index,
            corner_point4_index,
            fill,
            fill_color,
        })
    }

    fn read_text(&mut self, common: ElementCommon) -> Result<TextElement> {
        let start_point_index = self.parser.read_int_line()?;
        let char_height = self.parser.read_double()?;
        self.parser.skip_whitespace()?;
        let char_ratio = self.parser.read_double()?;
        self.parser.skip_whitespace()?;
        let char_angle = self.parser.read_double_line()?;
        let line_separation = self.parser.read_double()?;
        self.parser.skip_whitespace()?;
        let text_angle = self.parser.read_double_line()?;
        let alignment = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let orientation = self.parser.read_int()?;
        self.parser.skip_whitespace()?;
        let count = self.parser.read_int_line()?;
        let mut text = Vec::with_capacity(count.max(0) as usize);
        for _ in 0..count {
            text.push(self.parser.read_text_line()?);
        }
        Ok(TextElement {
            common,
            start_point_index,
            char_height,
            char_ratio,
            char_angle,
            line_separation,
            text_angle,
            alignment: TextAlignment::from_bits_retain(alignment),
            orientation,
            text,
        })
    }

    /// Attribute index list; absent when the element end marker follows
    fn read_attributes(&mut self) -> Result<Option<Vec<i32>>> {
        if self.parser.is_element_end_char() {
            return Ok(None);
        }
        let count = self.parser.read_int_line()?;
        let mut attributes = Vec::with_capacity(count.max(0) as usize);
        for _ in 0..count {
            attributes.push(self.parser.read_int_line()?);
        }
        Ok(Some(attributes))
    }
}
