mod data_uri;
mod svg;

pub use data_uri::{to_data_uri, SVG_CONTENT_TYPE};
pub use svg::{render_curve_svg, render_svg};

/// Size of the rendered SVG container.
///
/// The view box itself comes from the curve's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentParams {
    /// Container width in user units.
    pub width: f64,
    /// Container height in user units.
    pub height: f64,
}

impl Default for DocumentParams {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 600.0,
        }
    }
}
