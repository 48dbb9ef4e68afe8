pub mod curve;
pub mod path;

pub use curve::{Curve2d, CurveDomain, Superformula, SuperformulaParams};
pub use path::{PathCommand, PathData};
