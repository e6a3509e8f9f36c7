//! File format input and output

pub mod geo;
pub mod svg;
