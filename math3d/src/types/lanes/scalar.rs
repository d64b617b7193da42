use std::ops::{Add, Div, Mul, Sub};

/// Portable backend, lane for lane the same results as the SSE one except
/// for `rsqrt`, which is exact here.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lanes([f32; 4]);

impl Lanes {
    #[inline]
    fn map2(self, rhs: Self, op: impl Fn(f32, f32) -> f32) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = rhs.0;
        Self([op(a0, b0), op(a1, b1), op(a2, b2), op(a3, b3)])
    }
}

impl Add for Lanes {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.map2(rhs, |a, b| a + b)
    }
}

impl Sub for Lanes {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.map2(rhs, |a, b| a - b)
    }
}

impl Mul for Lanes {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.map2(rhs, |a, b| a * b)
    }
}

impl Div for Lanes {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.map2(rhs, |a, b| a / b)
    }
}

impl Lanes {
    #[inline]
    pub(crate) fn zero() -> Self {
        Self([0.0; 4])
    }

    #[inline]
    pub(crate) fn splat(value: f32) -> Self {
        Self([value; 4])
    }

    #[inline]
    pub(crate) fn set(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// # Safety
    /// `src` must be valid for reading four `f32` and aligned to 16 bytes.
    #[inline]
    pub(crate) unsafe fn load(src: *const f32) -> Self {
        debug_assert!(src as usize % 16 == 0, "Unaligned Lanes load!");
        Self(src.cast::<[f32; 4]>().read())
    }

    /// # Safety
    /// `dst` must be valid for writing four `f32` and aligned to 16 bytes.
    #[inline]
    pub(crate) unsafe fn store(self, dst: *mut f32) {
        debug_assert!(dst as usize % 16 == 0, "Unaligned Lanes store!");
        dst.cast::<[f32; 4]>().write(self.0)
    }

    #[cfg(test)]
    pub(crate) fn to_array(self) -> [f32; 4] {
        self.0
    }

    #[inline]
    pub(crate) fn first(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub(crate) fn shuffle<const MASK: i32>(self) -> Self {
        let lane = |n: i32| self.0[((MASK >> (2 * n)) & 0b11) as usize];
        Self([lane(0), lane(1), lane(2), lane(3)])
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        Self(self.0.map(f32::sqrt))
    }

    #[inline]
    pub(crate) fn rsqrt(self) -> Self {
        Self(self.0.map(|v| v.sqrt().recip()))
    }

    #[inline]
    pub(crate) fn transpose(rows: &mut [Lanes; 4]) {
        for i in 0..4 {
            for j in (i + 1)..4 {
                let upper = rows[i].0[j];
                rows[i].0[j] = rows[j].0[i];
                rows[j].0[i] = upper;
            }
        }
    }
}

impl_reductions!(Lanes);
