pub mod error;
pub mod format;
pub mod types;

pub use error::{MathError, MathResult};
pub use types::{Matrix4, Vector3, Vector4, BACKEND, EPS};
