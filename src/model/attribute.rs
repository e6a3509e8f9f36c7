//! Indexed attribute record

/// An element or bending attribute: a numeric index, a type classification
/// and free-text data lines.  Stored in maps keyed by `number`; a later
/// attribute with the same number overwrites an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attribute {
    pub number: i32,
    pub attribute_type: i32,
    pub data: Vec<String>,
}
