use std::arch::x86_64 as arch;
use std::ops::{Add, Div, Mul, Sub};

/// SSE backend, SSE/SSE2 are part of the x86_64 baseline so no runtime
/// feature detection is needed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lanes(arch::__m128);

impl Add for Lanes {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        unsafe { Self(arch::_mm_add_ps(self.0, rhs.0)) }
    }
}

impl Sub for Lanes {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        unsafe { Self(arch::_mm_sub_ps(self.0, rhs.0)) }
    }
}

impl Mul for Lanes {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        unsafe { Self(arch::_mm_mul_ps(self.0, rhs.0)) }
    }
}

impl Div for Lanes {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        unsafe { Self(arch::_mm_div_ps(self.0, rhs.0)) }
    }
}

impl Lanes {
    #[inline]
    pub(crate) fn zero() -> Self {
        unsafe { Self(arch::_mm_setzero_ps()) }
    }

    #[inline]
    pub(crate) fn splat(value: f32) -> Self {
        unsafe { Self(arch::_mm_set1_ps(value)) }
    }

    #[inline]
    pub(crate) fn set(x: f32, y: f32, z: f32, w: f32) -> Self {
        unsafe { Self(arch::_mm_set_ps(w, z, y, x)) }
    }

    /// # Safety
    /// `src` must be valid for reading four `f32` and aligned to 16 bytes.
    #[inline]
    pub(crate) unsafe fn load(src: *const f32) -> Self {
        debug_assert!(src as usize % 16 == 0, "Unaligned Lanes load!");
        Self(arch::_mm_load_ps(src))
    }

    /// # Safety
    /// `dst` must be valid for writing four `f32` and aligned to 16 bytes.
    #[inline]
    pub(crate) unsafe fn store(self, dst: *mut f32) {
        debug_assert!(dst as usize % 16 == 0, "Unaligned Lanes store!");
        arch::_mm_store_ps(dst, self.0)
    }

    #[inline]
    pub(crate) fn first(self) -> f32 {
        unsafe { arch::_mm_cvtss_f32(self.0) }
    }

    #[inline]
    pub(crate) fn shuffle<const MASK: i32>(self) -> Self {
        unsafe { Self(arch::_mm_shuffle_ps::<MASK>(self.0, self.0)) }
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        unsafe { Self(arch::_mm_sqrt_ps(self.0)) }
    }

    /// Approximate reciprocal square root, relative error below 1.5 * 2^-12.
    #[inline]
    pub(crate) fn rsqrt(self) -> Self {
        unsafe { Self(arch::_mm_rsqrt_ps(self.0)) }
    }

    /// In-place 4x4 transpose, the `_MM_TRANSPOSE4_PS` sequence.
    #[inline]
    pub(crate) fn transpose(rows: &mut [Lanes; 4]) {
        unsafe {
            let t0 = arch::_mm_unpacklo_ps(rows[0].0, rows[1].0);
            let t1 = arch::_mm_unpacklo_ps(rows[2].0, rows[3].0);
            let t2 = arch::_mm_unpackhi_ps(rows[0].0, rows[1].0);
            let t3 = arch::_mm_unpackhi_ps(rows[2].0, rows[3].0);
            rows[0].0 = arch::_mm_movelh_ps(t0, t1);
            rows[1].0 = arch::_mm_movehl_ps(t1, t0);
            rows[2].0 = arch::_mm_movelh_ps(t2, t3);
            rows[3].0 = arch::_mm_movehl_ps(t3, t2);
        }
    }
}

impl_reductions!(Lanes);
