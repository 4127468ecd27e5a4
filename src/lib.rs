//! Generic four-component vectors with overflow-safe length and
//! normalization.

#[macro_use]
mod macros;

pub mod num;
pub mod vector;

pub use num::{Float, Scalar};
pub use vector::{
    Vec3, Vec3d, Vec3f, Vec3i, Vec3i64, Vec3s, Vec4, Vec4d, Vec4f, Vec4i, Vec4i64, Vec4s, Vector,
    VectorError,
};
