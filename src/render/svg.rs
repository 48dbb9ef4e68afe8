use crate::error::{RenderError, Result};
use crate::geometry::{Curve2d, PathData};
use crate::math::fix;
use crate::operations::query::{Aabb2, BoundingBox};
use crate::operations::{ApproximatePath, SamplingParams};

use super::DocumentParams;

/// Wraps path data in a fixed-size SVG document.
///
/// The view box is `min.x min.y width height` of `bounds`. `attributes` is
/// inserted verbatim into the `<path>` element.
///
/// # Errors
///
/// Returns an error if the document width or height is not a positive
/// finite number.
pub fn render_svg(
    path: &PathData,
    bounds: &Aabb2,
    params: &DocumentParams,
    attributes: Option<&str>,
) -> Result<String> {
    for (name, value) in [("width", params.width), ("height", params.height)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(RenderError::InvalidParameters(format!(
                "document {name} must be positive, got {value}"
            ))
            .into());
        }
    }

    Ok(format!(
        "<svg width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\"\n\
         xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\"\n\
         xmlns:xlink=\"http://www.w3.org/1999/xlink\">\
         <path d=\"{path}\" {}/></svg>",
        params.width,
        params.height,
        fix(bounds.min.x),
        fix(bounds.min.y),
        fix(bounds.width()),
        fix(bounds.height()),
        attributes.unwrap_or_default(),
    ))
}

/// Approximates `curve` and renders it as an SVG document.
///
/// # Errors
///
/// Returns an error if the segment count is zero or the document size is
/// invalid.
pub fn render_curve_svg<C: Curve2d + ?Sized>(
    curve: &C,
    sampling: &SamplingParams,
    params: &DocumentParams,
    attributes: Option<&str>,
) -> Result<String> {
    let path = ApproximatePath::new(sampling.segments).execute(curve)?;
    let bounds = BoundingBox::new(sampling.bounds_samples).execute(curve);
    render_svg(&path, &bounds, params, attributes)
}
