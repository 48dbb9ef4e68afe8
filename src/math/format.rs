/// Formats a number with exactly two fractional digits.
///
/// This is the numeric grammar shared by path data and view boxes:
/// `fix(1.0) == "1.00"`, `fix(-0.375) == "-0.38"`. Values exactly halfway
/// between two hundredths round away from zero, and negative zero prints
/// as `0.00`. NaN and infinities are passed through.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn fix(value: f64) -> String {
    let value = value + 0.0;
    if value.is_finite() {
        let halves = (value * 200.0).round();
        // value * 200 is an odd integer exactly: a tie between hundredths
        if halves % 2.0 != 0.0 && value.mul_add(200.0, -halves) == 0.0 {
            let hundredths = (halves + halves.signum()) / 2.0;
            return format!("{:.2}", hundredths / 100.0);
        }
    }
    format!("{value:.2}")
}
