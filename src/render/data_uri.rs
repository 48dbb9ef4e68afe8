use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// MIME type of SVG documents.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Wraps `payload` in a base64 `data:` URI.
///
/// A missing content type yields `data:;base64,...`.
#[must_use]
pub fn to_data_uri(payload: &str, content_type: Option<&str>) -> String {
    format!(
        "data:{};base64,{}",
        content_type.unwrap_or_default(),
        BASE64.encode(payload.as_bytes())
    )
}
