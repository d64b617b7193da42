mod lanes;
mod matrix;
mod vector;

pub use lanes::BACKEND;
pub use matrix::Matrix4;
pub use vector::{Vector3, Vector4};

pub const EPS: f32 = 1e-6;
