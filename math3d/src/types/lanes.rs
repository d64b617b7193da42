//! 4-wide packed `f32` register shared by the vector and matrix types.
//!
//! On x86_64 the register is an SSE `__m128`. Everywhere else, or with the
//! `scalar` feature enabled, a plain `[f32; 4]` backend with identical lane
//! semantics is used instead.

macro_rules! impl_reductions {
    ($lanes:ty) => {
        impl $lanes {
            /// Lane 0 of the result holds `(l0 + l1) + l2`, lane 3 never
            /// reaches it. The remaining lanes are unspecified.
            #[inline]
            pub(crate) fn sum_xyz_lane(self) -> Self {
                let partial = self + self.shuffle::<{ super::LANE_Y }>();
                partial + self.shuffle::<{ super::LANE_Z }>()
            }

            #[inline]
            pub(crate) fn sum_xyz(self) -> f32 {
                self.sum_xyz_lane().first()
            }

            /// `(l0 + l2) + l1`, the accumulation order of the dot product.
            /// Lane 3 is never read.
            #[inline]
            pub(crate) fn sum_xzy(self) -> f32 {
                let partial = self + self.shuffle::<{ super::LANE_Z }>();
                (partial + self.shuffle::<{ super::LANE_Y }>()).first()
            }

            /// Sum of the four registers after a 4x4 transpose. Lane `n` of the
            /// result is the horizontal sum of `rows[n]`.
            #[inline]
            pub(crate) fn sum_transposed(mut rows: [Self; 4]) -> Self {
                Self::transpose(&mut rows);
                let [r0, r1, r2, r3] = rows;
                r0 + (r1 + (r2 + r3))
            }
        }
    };
}

#[cfg_attr(all(target_arch = "x86_64", not(feature = "scalar")), allow(dead_code))]
mod scalar;
#[cfg(all(target_arch = "x86_64", not(feature = "scalar")))]
mod sse;

#[cfg(any(not(target_arch = "x86_64"), feature = "scalar"))]
pub(crate) use scalar::Lanes;
#[cfg(all(target_arch = "x86_64", not(feature = "scalar")))]
pub(crate) use sse::Lanes;

/// Name of the backend the crate was built with.
#[cfg(any(not(target_arch = "x86_64"), feature = "scalar"))]
pub const BACKEND: &str = "scalar";
#[cfg(all(target_arch = "x86_64", not(feature = "scalar")))]
pub const BACKEND: &str = "sse";

/// Builds a shuffle immediate, same encoding as `_MM_SHUFFLE(d, c, b, a)`:
/// output lane 0 takes source lane `a`, lane 3 takes source lane `d`.
#[inline]
pub(crate) const fn mask(d: i32, c: i32, b: i32, a: i32) -> i32 {
    (d << 6) | (c << 4) | (b << 2) | a
}

/// Lane 1 moved onto lane 0.
pub(crate) const LANE_Y: i32 = mask(3, 3, 3, 1);
/// Lane 2 moved onto lane 0.
pub(crate) const LANE_Z: i32 = mask(3, 3, 3, 2);
pub(crate) const BROADCAST_X: i32 = mask(0, 0, 0, 0);
pub(crate) const BROADCAST_W: i32 = mask(3, 3, 3, 3);
/// (y, z, x, x)
pub(crate) const YZX: i32 = mask(0, 0, 2, 1);
/// (z, x, y, x)
pub(crate) const ZXY: i32 = mask(0, 1, 0, 2);
