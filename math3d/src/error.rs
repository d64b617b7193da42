use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Failure kinds reported by the guarded `try_*` operations. The unguarded
/// counterparts produce IEEE-754 infinities or NaNs instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Squared length below `EPS * EPS`, normalizing would divide by zero.
    ZeroLength,
    /// Homogeneous weight with magnitude below `EPS`.
    ZeroWeight,
    /// NaN or infinite input, or a squared length that overflows `f32`.
    NonFinite,
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MathError::ZeroLength => write!(f, "Cannot normalize a zero length vector"),
            MathError::ZeroWeight => write!(f, "Cannot dehomogenize a vector with zero weight"),
            MathError::NonFinite => write!(f, "Vector has non-finite or overflowing components"),
        }
    }
}

impl Error for MathError {}

pub type MathResult<T> = Result<T, MathError>;
