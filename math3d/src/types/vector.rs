use super::{
    lanes::{Lanes, BROADCAST_W, BROADCAST_X, YZX, ZXY},
    EPS,
};
use crate::{
    error::{MathError, MathResult},
    format::write_general,
};
use bytemuck::{Pod, Zeroable};
use colored::Colorize;
use std::{
    fmt::{Display, Formatter},
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

#[cfg(test)]
mod test_vector_3 {
    use super::Vector3;
    use crate::MathError;

    fn samples() -> [Vector3; 5] {
        [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.5, 0.25, 8.0),
            Vector3::new(0.0, -1.0, 0.5),
            Vector3::new(10.0, 3.0, -7.0),
            Vector3::new(0.125, 0.5, -0.75),
        ]
    }

    #[test]
    fn default_is_zero() {
        let v = Vector3::default();
        assert_eq!(v, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(v.length(), 0.0);
    }

    #[test]
    fn add_sub_neg() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -1.0, 4.0);
        assert_eq!(a + b, Vector3::new(1.5, 1.0, 7.0));
        assert_eq!(a - b, Vector3::new(0.5, 3.0, -1.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn scale_in_place() {
        let mut v = Vector3::new(1.0, -2.0, 3.0);
        v.scale(3.0);
        assert_eq!(v, Vector3::new(3.0, -6.0, 9.0));
        v.scale_axes(1.0, 0.5, -1.0);
        assert_eq!(v, Vector3::new(3.0, -3.0, -9.0));
    }

    #[test]
    fn scale_axes_clears_padding() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.scale_axes(2.0, 3.0, 4.0);
        assert_eq!(v, Vector3::new(2.0, 6.0, 12.0));
        assert_eq!(v.as_bytes()[12..16], [0u8; 4]);
    }

    #[test]
    fn dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);
        assert_eq!(Vector3::x().dot(Vector3::y()), 0.0);
    }

    #[test]
    fn dot_commutes() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.dot(b), b.dot(a));
            }
        }
    }

    #[test]
    fn cross() {
        assert_eq!(Vector3::x().cross(Vector3::y()), Vector3::z());
        assert_eq!(Vector3::y().cross(Vector3::x()), -Vector3::z());
        assert_eq!(Vector3::y().cross(Vector3::z()), Vector3::x());
        assert_eq!(Vector3::z().cross(Vector3::x()), Vector3::y());
    }

    #[test]
    fn cross_anticommutes() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.cross(b), -(b.cross(a)));
            }
        }
    }

    #[test]
    fn cross_with_self_is_zero() {
        for a in samples() {
            assert_eq!(a.cross(a), Vector3::default());
        }
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-5);
        assert!(c.dot(b).abs() < 1e-5);
    }

    #[test]
    fn length() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).length_square(), 49.0);
    }

    #[test]
    fn normalize() {
        for a in samples() {
            let n = a.normalize();
            assert!((n.length() - 1.0).abs() < 1e-3);
            assert!(n.cross(a).length() < 1e-3 * a.length());
        }
        let n = Vector3::new(0.0, 0.0, -4.0).normalize();
        assert!(n.approx_equal_eps(-Vector3::z(), 1e-3));
    }

    #[test]
    fn normalize_zero_is_not_finite() {
        assert!(!Vector3::default().normalize().is_valid());
    }

    #[test]
    fn try_normalize() {
        assert_eq!(Vector3::default().try_normalize(), Err(MathError::ZeroLength));
        let n = Vector3::new(0.0, 5.0, 0.0).try_normalize().unwrap();
        assert!(n.approx_equal_eps(Vector3::y(), 1e-3));
    }

    #[test]
    fn try_normalize_rejects_non_finite() {
        assert_eq!(Vector3::new(1e20, 0.0, 0.0).try_normalize(), Err(MathError::NonFinite));
        assert_eq!(Vector3::new(f32::NAN, 0.0, 0.0).try_normalize(), Err(MathError::NonFinite));
        assert_eq!(
            Vector3::new(0.0, f32::INFINITY, 1.0).try_normalize(),
            Err(MathError::NonFinite)
        );
    }

    #[test]
    fn dot_accumulates_x_z_then_y() {
        let a = Vector3::new(1e8, 1.0, -1e8);
        let b = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a.length_square(), 2e16);
    }

    #[test]
    fn padding_lane_garbage_is_ignored() {
        let mut a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        unsafe { *a.ptr_mut().add(3) = f32::NAN };
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(b.dot(a), 32.0);
        assert_eq!(a.length(), 14.0f32.sqrt());
        assert_eq!(a.length_square(), 14.0);
        assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
        assert!(a.normalize().is_valid());
    }

    #[test]
    fn angle_keeps_legacy_formula() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 2.0, 0.0);
        let expected = (a.dot(b) / 2.0).acos() / 2.0;
        assert_eq!(a.angle(b), expected);
        assert!((a.angle(b) - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn angle_between() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 2.0, 0.0);
        assert!((a.angle_between(b) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        let c = Vector3::new(3.0, 3.0, 0.0);
        assert!((a.angle_between(c) - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert!(c.angle_between(c * 2.0) < 1e-3);
    }

    #[test]
    fn index() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!([v[0], v[1], v[2]], [1.0, 2.0, 3.0]);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    #[should_panic]
    fn index_padding_lane() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn layout() {
        assert_eq!(std::mem::size_of::<Vector3>(), 16);
        assert_eq!(std::mem::align_of::<Vector3>(), 16);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(v.ptr() as usize % 16, 0);
        assert_eq!(unsafe { *v.ptr().add(2) }, 3.0);
    }

    #[test]
    fn ptr_mut_writes_through() {
        let mut v = Vector3::default();
        unsafe { *v.ptr_mut().add(1) = 4.0 };
        assert_eq!(v, Vector3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn display() {
        assert_eq!(Vector3::new(1.0, 0.5, -2.0).to_string(), "1 0.5 -2");
        assert_eq!(format!("{:.2}", Vector3::new(1.23456, 0.0, 1e-5)), "1.2 0 1e-05");
    }
}

/// Direction or position without a homogeneous coordinate. Stored as four
/// packed lanes with the last one used as padding, always written as 0 by
/// the constructors and never read by the reductions.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, Default, Zeroable, Pod)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pad: f32,
}

impl PartialEq for Vector3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_lanes(Lanes::zero() - self.lanes())
    }
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_lanes(self.lanes() + rhs.lanes())
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_lanes(self.lanes() - rhs.lanes())
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_lanes(Lanes::splat(rhs) * self.lanes())
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < 3, "Invalid index {} for Vector3!", index);
        &bytemuck::cast_ref::<Self, [f32; 4]>(self)[index]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < 3, "Invalid index {} for Vector3!", index);
        &mut bytemuck::cast_mut::<Self, [f32; 4]>(self)[index]
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(value: Vector4) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write_general(f, self.as_slice())
    }
}

impl Vector3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, pad: 0.0 }
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub(crate) fn lanes(self) -> Lanes {
        unsafe { Lanes::load(self.ptr()) }
    }

    #[inline]
    pub(crate) fn from_lanes(lanes: Lanes) -> Self {
        let mut v = Self::default();
        unsafe { lanes.store(v.ptr_mut()) };
        v
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        (self.lanes() * rhs.lanes()).sum_xzy()
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let (a, b) = (self.lanes(), rhs.lanes());
        Self::from_lanes(
            a.shuffle::<YZX>() * b.shuffle::<ZXY>() - a.shuffle::<ZXY>() * b.shuffle::<YZX>(),
        )
    }

    /// Multiplies every lane by `f`, in place.
    #[inline]
    pub fn scale(&mut self, f: f32) {
        *self = *self * f;
    }

    /// Per-axis scale, in place. The padding lane is multiplied by 0.
    #[inline]
    pub fn scale_axes(&mut self, sx: f32, sy: f32, sz: f32) {
        *self = Self::from_lanes(Lanes::set(sx, sy, sz, 0.0) * self.lanes());
    }

    #[inline]
    pub fn length_square(self) -> f32 {
        let v = self.lanes();
        (v * v).sum_xyz()
    }

    #[inline]
    pub fn length(self) -> f32 {
        let v = self.lanes();
        (v * v).sum_xyz_lane().sqrt().first()
    }

    /// Scales by the approximate reciprocal square root of the squared
    /// length, so the result is unit length to about 1e-3.
    ///
    /// A zero vector yields NaN lanes, use [`Vector3::try_normalize`] when
    /// the input may be degenerate.
    #[inline]
    pub fn normalize(self) -> Self {
        let v = self.lanes();
        let inv_length = (v * v).sum_xyz_lane().rsqrt().shuffle::<BROADCAST_X>();
        Self::from_lanes(v * inv_length)
    }

    /// Reports `NonFinite` when the squared length is NaN or overflows and
    /// `ZeroLength` when it is below `EPS * EPS`.
    #[inline]
    pub fn try_normalize(self) -> MathResult<Self> {
        let length_square = self.length_square();
        if !length_square.is_finite() {
            Err(MathError::NonFinite)
        } else if length_square < EPS * EPS {
            Err(MathError::ZeroLength)
        } else {
            Ok(self.normalize())
        }
    }

    /// `acos(self . rhs / |rhs|) / |rhs|`.
    ///
    /// This is not the angle between the vectors unless `rhs` has unit
    /// length and `self` is normalized; it is kept for compatibility with
    /// existing callers. Prefer [`Vector3::angle_between`].
    #[inline]
    pub fn angle(self, rhs: Self) -> f32 {
        let length = rhs.length();
        (self.dot(rhs) / length).acos() / length
    }

    /// Angle in radians between the two vectors, in `[0, PI]`.
    #[inline]
    pub fn angle_between(self, rhs: Self) -> f32 {
        let cos = self.dot(rhs) / (self.length() * rhs.length());
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Pointer to x, y, z laid out contiguously. The fourth float is padding.
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
        &bytemuck::cast_ref::<Self, [f32; 4]>(self)[..3]
    }

    /// All 16 bytes including the padding lane.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.approx_equal_eps(rhs, EPS)
    }

    #[inline]
    pub fn approx_equal_eps(self, rhs: Self, eps: f32) -> bool {
        (self.x - rhs.x).abs() < eps && (self.y - rhs.y).abs() < eps && (self.z - rhs.z).abs() < eps
    }

    pub fn print(&self) {
        println!("{} : {}", "vec3".cyan(), self);
    }
}


/// Homogeneous point or direction. `*` between two `Vector4` is the lane-wise
/// product, not a dot product.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_lanes(Lanes::zero() - self.lanes())
    }
}

impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_lanes(self.lanes() + rhs.lanes())
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_lanes(self.lanes() - rhs.lanes())
    }
}

impl Mul<Vector4> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        Self::from_lanes(self.lanes() * rhs.lanes())
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_lanes(Lanes::splat(rhs) * self.lanes())
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs * self
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Vector4!", index);
        &bytemuck::cast_ref::<Self, [f32; 4]>(self)[index]
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Vector4!", index);
        &mut bytemuck::cast_mut::<Self, [f32; 4]>(self)[index]
    }
}

impl From<Vector3> for Vector4 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self::vector(value)
    }
}

impl Display for Vector4 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write_general(f, self.as_slice())
    }
}

impl Vector4 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn point(p: Vector3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    #[inline]
    pub fn vector(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub(crate) fn lanes(self) -> Lanes {
        unsafe { Lanes::load(self.ptr()) }
    }

    #[inline]
    pub(crate) fn from_lanes(lanes: Lanes) -> Self {
        let mut v = Self::default();
        unsafe { lanes.store(v.ptr_mut()) };
        v
    }

    /// Divides all four lanes by `w`, in place. A zero weight leaves
    /// infinities or NaNs behind.
    #[inline]
    pub fn dehomogenize(&mut self) {
        let v = self.lanes();
        *self = Self::from_lanes(v / v.shuffle::<BROADCAST_W>());
    }

    #[inline]
    pub fn dehomogenized(mut self) -> Self {
        self.dehomogenize();
        self
    }

    /// Like [`Vector4::dehomogenize`], but leaves `self` untouched and
    /// reports `NonFinite` for non-finite lanes or `ZeroWeight` when
    /// `|w| < EPS`.
    #[inline]
    pub fn try_dehomogenize(&mut self) -> MathResult<()> {
        if !self.is_valid() {
            return Err(MathError::NonFinite);
        }
        if self.w.abs() < EPS {
            return Err(MathError::ZeroWeight);
        }
        self.dehomogenize();
        Ok(())
    }

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
        bytemuck::cast_ref::<Self, [f32; 4]>(self)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.approx_equal_eps(rhs, EPS)
    }

    #[inline]
    pub fn approx_equal_eps(self, rhs: Self, eps: f32) -> bool {
        (self.x - rhs.x).abs() < eps
            && (self.y - rhs.y).abs() < eps
            && (self.z - rhs.z).abs() < eps
            && (self.w - rhs.w).abs() < eps
    }

    pub fn print(&self) {
        println!("{} : {}", "vec4".cyan(), self);
    }
}
