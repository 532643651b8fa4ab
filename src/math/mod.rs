/// 3D point type. `x`, `y`, `z` hold the volume coordinates `x1`, `x2`, `x3`.
pub type Point3 = nalgebra::Point3<f32>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f32>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f32 = 1e-6;
