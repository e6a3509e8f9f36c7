//! Basic value types shared by the model and the readers/writers

pub mod matrix;
pub mod vector;

pub use matrix::Matrix4;
pub use vector::Vector3;
