pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;

pub use error::{Result, SuperformulaError};
pub use geometry::{Curve2d, PathCommand, PathData, Superformula, SuperformulaParams};
pub use operations::query::Aabb2;
