//! 4x4 transformation matrix

/// Row-major 4x4 transformation matrix, as stored in GEO part and copy blocks.
///
/// GEO uses the row-vector convention: the 2D rotation/scale block lives in
/// rows 0-1, the translation in row 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub rows: [[f64; 4]; 4],
}

impl Matrix4 {
    /// Identity matrix
    pub const IDENTITY: Matrix4 = Matrix4 {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a matrix from row-major values
    pub const fn new(rows: [[f64; 4]; 4]) -> Self {
        Matrix4 { rows }
    }

    /// Whether the 2D projection of this matrix (rotation/scale 2x2 plus
    /// 2D translation) is exactly the identity.
    pub fn is_identity_2d(&self) -> bool {
        let m = &self.rows;
        m[0][0] == 1.0
            && m[1][0] == 0.0
            && m[0][1] == 0.0
            && m[1][1] == 1.0
            && m[3][0] == 0.0
            && m[3][1] == 0.0
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Matrix4::IDENTITY
    }
}
