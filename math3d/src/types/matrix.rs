use super::{lanes::Lanes, Vector4, EPS};
use crate::format::write_general;
use bytemuck::{Pod, Zeroable};
use colored::Colorize;
use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut, Mul},
};


/// Row-major 4x4 matrix.
///
/// `Matrix4::default()` is the zero matrix, NOT the identity. Use
/// [`Matrix4::identity`] or [`Matrix4::make_identity`] for the identity
/// transform.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    pub rows: [Vector4; 4],
}

/// Row-major product: transposes a copy of `rhs` so its columns become rows,
/// then every output row is a horizontal reduction of four lane-wise
/// products.
impl Mul<Matrix4> for Matrix4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let columns = rhs.transpose().lanes();
        let rows = self.lanes().map(|row| {
            Lanes::sum_transposed([
                row * columns[0],
                row * columns[1],
                row * columns[2],
                row * columns[3],
            ])
        });
        Self::from_lanes(rows)
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        let v = rhs.lanes();
        Vector4::from_lanes(Lanes::sum_transposed(self.lanes().map(|row| row * v)))
    }
}

impl Index<usize> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Matrix4!", index);
        &self.rows[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Matrix4!", index);
        &mut self.rows[index]
    }
}

impl From<[[f32; 4]; 4]> for Matrix4 {
    #[inline]
    fn from(value: [[f32; 4]; 4]) -> Self {
        Self::from_array(&value)
    }
}

impl Display for Matrix4 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (n, row) in self.rows.iter().enumerate() {
            if n > 0 {
                write!(f, "\n        ")?;
            }
            write_general(f, row.as_slice())?;
        }
        write!(f, "]")
    }
}

impl Matrix4 {
    #[inline]
    pub fn new(r0: Vector4, r1: Vector4, r2: Vector4, r3: Vector4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    #[inline]
    pub fn from_rows(rows: [Vector4; 4]) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn from_array(elements: &[[f32; 4]; 4]) -> Self {
        Self {
            rows: elements.map(|[x, y, z, w]| Vector4::new(x, y, z, w)),
        }
    }

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub fn from_elements(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self::new(
            Vector4::new(m00, m01, m02, m03),
            Vector4::new(m10, m11, m12, m13),
            Vector4::new(m20, m21, m22, m23),
            Vector4::new(m30, m31, m32, m33),
        )
    }

    /// Overwrites all 16 elements, row-major.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub fn set(
        &mut self,
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) {
        *self = Self::from_elements(
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        );
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            rows: [Vector4::x(), Vector4::y(), Vector4::z(), Vector4::w()],
        }
    }

    #[inline]
    pub fn make_identity(&mut self) {
        *self = Self::identity();
    }

    #[inline]
    pub fn make_transpose(&mut self) {
        let mut rows = self.lanes();
        Lanes::transpose(&mut rows);
        *self = Self::from_lanes(rows);
    }

    #[inline]
    pub fn transpose(mut self) -> Self {
        self.make_transpose();
        self
    }

    #[inline]
    fn lanes(&self) -> [Lanes; 4] {
        self.rows.map(Vector4::lanes)
    }

    #[inline]
    fn from_lanes(rows: [Lanes; 4]) -> Self {
        Self {
            rows: rows.map(Vector4::from_lanes),
        }
    }

    /// Pointer to the 16 elements, row-major.
    #[inline]
    pub fn ptr(&self) -> *const f32 {
        (self as *const Self).cast()
    }

    #[inline]
    pub fn ptr_mut(&mut self) -> *mut f32 {
        (self as *mut Self).cast()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.rows)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.rows.iter().all(|row| row.is_valid())
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.approx_equal_eps(rhs, EPS)
    }

    #[inline]
    pub fn approx_equal_eps(self, rhs: Self, eps: f32) -> bool {
        self.rows
            .iter()
            .zip(rhs.rows.iter())
            .all(|(a, b)| a.approx_equal_eps(*b, eps))
    }

    pub fn print(&self) {
        println!("{} {}", "mat4::".cyan(), self);
    }
}
