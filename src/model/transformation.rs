//! Placement matrices stored inside records.

use serde::{Deserialize, Serialize};

use super::Value;
use crate::codec;
use crate::Result;

/// Flag bit: a 3x3 rotation/scale block follows.
pub const HAS_ROTATION: u32 = 0x0000_0001;
/// Flag bit: a translation vector follows.
pub const HAS_TRANSLATION: u32 = 0x0000_0002;

/// Homogeneous 4x4 transformation, row-major.
///
/// ```text
/// u32 flags
/// f64[9]  rotation/scale, row-major    (flags & 0x1)
/// f64[3]  translation x, y, z          (flags & 0x2)
/// ```
/// Parts not present in the stream stay identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    pub flags: u32,
    pub matrix: [[f64; 4]; 4],
}

impl Default for Transformation {
    fn default() -> Self { Self::identity() }
}

impl Transformation {
    pub fn identity() -> Self {
        let mut matrix = [[0.0; 4]; 4];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { flags: 0, matrix }
    }

    pub fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let (flags, mut i) = codec::read_u32(buf, offset)?;
        let mut t = Self::identity();
        t.flags = flags;
        if flags & HAS_ROTATION != 0 {
            let (m, next) = codec::read_f64_array(buf, i, 9)?;
            for (r, row) in m.chunks_exact(3).enumerate() {
                t.matrix[r][..3].copy_from_slice(row);
            }
            i = next;
        }
        if flags & HAS_TRANSLATION != 0 {
            let (v, next) = codec::read_f64_array(buf, i, 3)?;
            for (r, x) in v.into_iter().enumerate() {
                t.matrix[r][3] = x;
            }
            i = next;
        }
        Ok((t, i))
    }

    pub fn translation(&self) -> [f64; 3] {
        [self.matrix[0][3], self.matrix[1][3], self.matrix[2][3]]
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Self::identity().matrix
    }

    /// Transform a point (w = 1).
    pub fn apply(&self, p: [f64; 3]) -> [f64; 3] {
        let m = &self.matrix;
        let mut out = [0.0; 3];
        for (r, o) in out.iter_mut().enumerate() {
            *o = m[r][0] * p[0] + m[r][1] * p[1] + m[r][2] * p[2] + m[r][3];
        }
        out
    }

    /// Flattened row-major form used as the attribute value.
    pub fn to_value(&self) -> Value {
        Value::Array(self.matrix.iter().flatten().map(|&x| Value::F64(x)).collect())
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() != 16 {
            return None;
        }
        let mut t = Self::identity();
        for (k, v) in items.iter().enumerate() {
            t.matrix[k / 4][k % 4] = v.as_float()?;
        }
        Some(t)
    }
}
