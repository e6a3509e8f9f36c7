//! GEO text cursor and tokenizer
//!
//! A [`Parser`] wraps the whole input buffer plus a position and a 1-based
//! line counter.  The section readers drive it top-down; every consumption
//! past the end of the buffer fails with a [`crate::GeoError::Format`].

use super::constants;
use crate::error::{GeoError, Result};
use crate::types::{Matrix4, Vector3};

/// Raw-text scanning primitives over an in-memory GEO buffer
pub struct Parser {
    chars: Vec<char>,
    index: usize,
    line: usize,
}

impl Parser {
    /// Create a parser over the full document text
    pub fn new(text: &str) -> Self {
        Parser {
            chars: text.chars().collect(),
            index: 0,
            line: 1,
        }
    }

    /// The current character, `None` at end of input
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// The 1-based line number of the current position
    pub fn line(&self) -> usize {
        self.line
    }

    /// Whether the current character starts a section marker
    pub fn is_section_char(&self) -> bool {
        self.current() == Some(constants::SECTION_CHAR)
    }

    /// Whether the current character starts an element end token
    pub fn is_element_end_char(&self) -> bool {
        self.current() == Some(constants::ELEMENT_END_CHAR)
    }

    /// Whether the current character is a line terminator
    pub fn is_at_line_end(&self) -> bool {
        matches!(self.current(), Some('\r') | Some('\n'))
    }

    fn is_whitespace(&self) -> bool {
        self.current().map_or(false, char::is_whitespace)
    }

    /// Fail with a format error at the current line
    pub fn fail<T>(&self, message: impl Into<String>) -> Result<T> {
        Err(GeoError::format(self.line, message))
    }

    /// Fail unless `condition` holds
    pub fn ensure(&self, condition: bool, message: impl Into<String>) -> Result<()> {
        if condition {
            Ok(())
        } else {
            self.fail(message)
        }
    }

    /// Advance one character; crossing a line terminator consumes a `\r\n`
    /// pair as one and bumps the line counter.
    fn advance(&mut self) -> Result<()> {
        if self.is_at_line_end() {
            if self.current() == Some('\r') && self.chars.get(self.index + 1) == Some(&'\n') {
                self.index += 1;
            }
            self.line += 1;
        }
        self.index += 1;
        if self.index >= self.chars.len() {
            return self.fail("unexpected end of input");
        }
        Ok(())
    }

    /// Consume a maximal run of non-whitespace characters; empty when the
    /// current character is whitespace
    pub fn read_token(&mut self) -> Result<String> {
        let start = self.index;
        while !self.is_whitespace() {
            self.advance()?;
        }
        Ok(self.chars[start..self.index].iter().collect())
    }

    /// Consume up to (not including) the next line terminator
    pub fn read_text(&mut self) -> Result<String> {
        let start = self.index;
        while !self.is_at_line_end() {
            self.advance()?;
        }
        Ok(self.chars[start..self.index].iter().collect())
    }

    /// Consume exactly one line terminator; fails quoting the unconsumed
    /// remainder otherwise
    pub fn read_new_line(&mut self) -> Result<()> {
        if self.is_at_line_end() {
            self.advance()
        } else {
            let rest = self.read_text()?;
            self.fail(format!("Expected new line, but found: \"{rest}\""))
        }
    }

    /// Skip horizontal whitespace up to the next line terminator
    pub fn skip_whitespace(&mut self) -> Result<()> {
        while !self.is_at_line_end() && self.is_whitespace() {
            self.advance()?;
        }
        Ok(())
    }

    pub fn read_text_line(&mut self) -> Result<String> {
        let text = self.read_text()?;
        self.read_new_line()?;
        Ok(text)
    }

    pub fn read_int(&mut self) -> Result<i32> {
        let token = self.read_token()?;
        match token.parse::<i32>() {
            Ok(value) => Ok(value),
            Err(_) => self.fail(format!("Expected number, but found \"{token}\"")),
        }
    }

    pub fn read_int_line(&mut self) -> Result<i32> {
        let value = self.read_int()?;
        self.skip_whitespace()?;
        self.read_new_line()?;
        Ok(value)
    }

    pub fn read_double(&mut self) -> Result<f64> {
        let token = self.read_token()?;
        match token.parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => self.fail(format!("Expected number, but found \"{token}\"")),
        }
    }

    pub fn read_double_line(&mut self) -> Result<f64> {
        let value = self.read_double()?;
        self.skip_whitespace()?;
        self.read_new_line()?;
        Ok(value)
    }

    pub fn read_token_line(&mut self) -> Result<String> {
        let token = self.read_token()?;
        self.skip_whitespace()?;
        self.read_new_line()?;
        Ok(token)
    }

    /// Read a token plus an optional trailing identifier token on one line
    pub fn read_token_line_with_optional_id(&mut self) -> Result<(String, Option<String>)> {
        let token = self.read_token()?;
        self.skip_whitespace()?;
        let id = self.read_token()?;
        self.skip_whitespace()?;
        self.read_new_line()?;
        Ok((token, if id.is_empty() { None } else { Some(id) }))
    }

    /// Three whitespace-separated doubles
    pub fn read_vector(&mut self) -> Result<Vector3> {
        let x = self.read_double()?;
        self.skip_whitespace()?;
        let y = self.read_double()?;
        self.skip_whitespace()?;
        let z = self.read_double()?;
        Ok(Vector3::new(x, y, z))
    }

    pub fn read_vector_line(&mut self) -> Result<Vector3> {
        let vector = self.read_vector()?;
        self.skip_whitespace()?;
        self.read_new_line()?;
        Ok(vector)
    }

    /// Four lines of four doubles each, row-major
    pub fn read_matrix_lines(&mut self) -> Result<Matrix4> {
        let mut rows = [[0.0; 4]; 4];
        for row in rows.iter_mut() {
            for value in row.iter_mut() {
                *value = self.read_double()?;
                self.skip_whitespace()?;
            }
            self.read_new_line()?;
        }
        Ok(Matrix4::new(rows))
    }

    /// Read the two-character section marker plus the section code and an
    /// optional trailing identifier
    pub fn read_section_start_line(&mut self) -> Result<(String, Option<String>)> {
        self.skip_expected(constants::SECTION_TOKEN, "section start")?;
        self.read_token_line_with_optional_id()
    }

    /// As [`Self::read_section_start_line`], failing unless the code matches
    pub fn read_expected_section_start_line(&mut self, expected: &str) -> Result<Option<String>> {
        let (code, id) = self.read_section_start_line()?;
        self.ensure(
            code == expected,
            format!("Expected section \"{expected}\", but found \"{code}\""),
        )?;
        Ok(id)
    }

    /// Read a token line that must equal an expected literal
    pub fn read_expected_token_line(&mut self, expected: &str, token_kind: &str) -> Result<()> {
        let actual = self.read_token()?;
        self.ensure(
            actual == expected,
            format!("Expected {token_kind} \"{expected}\", but found \"{actual}\""),
        )?;
        self.read_new_line()
    }

    pub fn read_expected_section_end_line(&mut self, expected: &str) -> Result<()> {
        self.read_expected_token_line(expected, "section end")
    }

    /// Fail unless `actual` is the expected block terminator
    pub fn assert_section_end(&self, expected: &str, actual: &str) -> Result<()> {
        self.ensure(
            actual == expected,
            format!("Expected section end \"{expected}\", but found \"{actual}\""),
        )
    }

    fn skip_expected(&mut self, expected: &str, token_kind: &str) -> Result<()> {
        let start = self.index;
        for c in expected.chars() {
            if self.current() != Some(c) {
                let found: String = self.chars[start..self.index].iter().collect();
                return self.fail(format!(
                    "Expected {token_kind} \"{expected}\", but found \"{found}\""
                ));
            }
            self.advance()?;
        }
        Ok(())
    }
}
