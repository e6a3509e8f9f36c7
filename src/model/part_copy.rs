//! Part copy record

use indexmap::IndexMap;

use crate::types::Matrix4;

/// A placed duplicate of a part: a transform plus named attributes
#[derive(Debug, Clone, Default)]
pub struct PartCopy {
    pub id: Option<String>,
    pub info: String,
    pub number: i32,
    pub transformation: Matrix4,
    /// Free-form named attributes, emission order = insertion order
    pub attributes: IndexMap<String, String>,
}
