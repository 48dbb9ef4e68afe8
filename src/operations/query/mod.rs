mod arc_length;
mod bounding_box;
mod max_radius;

pub use arc_length::ArcLengthTable;
pub use bounding_box::{Aabb2, BoundingBox};
pub use max_radius::MaxRadius;
