//! Line-oriented output buffer
//!
//! All GEO output goes through this buffer one logical line at a time; the
//! newline convention is applied once at the end.  Doubles are always
//! rendered with nine fractional digits.

use crate::io::geo::constants;
use crate::types::{Matrix4, Vector3};

const ID_GAP: &str = "          ";

pub(crate) struct LineWriter {
    lines: Vec<String>,
}

impl LineWriter {
    pub fn new() -> Self {
        LineWriter { lines: Vec::new() }
    }

    pub fn write_token_line(&mut self, token: &str, id: Option<&str>) -> &mut Self {
        self.lines.push(match id {
            Some(id) => format!("{token}{ID_GAP}{id}"),
            None => token.to_string(),
        });
        self
    }

    pub fn write_section_line(&mut self, code: &str, id: Option<&str>) -> &mut Self {
        let token = format!("{}{code}", constants::SECTION_TOKEN);
        self.write_token_line(&token, id)
    }

    pub fn write_text_line(&mut self, text: &str) -> &mut Self {
        self.write_token_line(text, None)
    }

    pub fn write_int_line(&mut self, value: i32) -> &mut Self {
        self.lines.push(value.to_string());
        self
    }

    pub fn write_double_line(&mut self, value: f64) -> &mut Self {
        self.lines.push(format!("{value:.9}"));
        self
    }

    pub fn write_int_list_line(&mut self, values: &[i32]) -> &mut Self {
        let line = values
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.lines.push(line);
        self
    }

    pub fn write_double_list_line(&mut self, values: &[f64]) -> &mut Self {
        let line = values
            .iter()
            .map(|v| format!("{v:.9}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.lines.push(line);
        self
    }

    pub fn write_vector_line(&mut self, v: &Vector3) -> &mut Self {
        self.write_double_list_line(&[v.x, v.y, v.z])
    }

    pub fn write_matrix_lines(&mut self, matrix: &Matrix4) -> &mut Self {
        for row in &matrix.rows {
            self.write_double_list_line(row);
        }
        self
    }

    /// Join all lines with `newline`, including a trailing terminator
    pub fn into_string(self, newline: &str) -> String {
        let mut out = self.lines.join(newline);
        out.push_str(newline);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_line_with_id_gap() {
        let mut writer = LineWriter::new();
        writer.write_section_line("3", Some("P1"));
        assert_eq!(writer.into_string("\n"), "#~3          P1\n");
    }

    #[test]
    fn test_double_formatting() {
        let mut writer = LineWriter::new();
        writer.write_double_line(1.5);
        writer.write_double_line(-0.000000001);
        writer.write_vector_line(&Vector3::new(1.0, 2.25, 0.0));
        assert_eq!(
            writer.into_string("\n"),
            "1.500000000\n-0.000000001\n1.000000000 2.250000000 0.000000000\n"
        );
    }

    #[test]
    fn test_crlf_newlines() {
        let mut writer = LineWriter::new();
        writer.write_int_line(1).write_int_line(2);
        assert_eq!(writer.into_string("\r\n"), "1\r\n2\r\n");
    }

    #[test]
    fn test_matrix_lines() {
        let mut writer = LineWriter::new();
        writer.write_matrix_lines(&Matrix4::IDENTITY);
        let out = writer.into_string("\n");
        assert_eq!(out.lines().count(), 4);
        assert!(out.starts_with("1.000000000 0.000000000 0.000000000 0.000000000\n"));
    }
}
