//! Millimetre to PDF unit conversion and number formatting.

const INCHES_PER_MM: f64 = 0.039370079;
const POINTS_PER_INCH: f64 = 72.0;

/// Converts millimetres to PDF user-space units (1/72 inch).
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * INCHES_PER_MM * POINTS_PER_INCH
}

/// Formats a number for content streams and dictionaries: at most three
/// decimals, no trailing zeros, never exponent notation.
///
/// PDF has no syntax for NaN or infinity; those are written as `0`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        log::warn!(
            "Non-finite number {} cannot be written to a PDF, using 0",
            value
        );
        return "0".to_string();
    }
    let scaled = value * 1000.0;
    let rounded = if scaled.is_finite() {
        scaled.round() / 1000.0
    } else {
        value
    };
    if rounded.fract() == 0.0 && rounded.abs() < i64::MAX as f64 {
        let mut buffer = itoa::Buffer::new();
        // -0.0 prints as 0
        return buffer.format(rounded as i64).to_string();
    }
    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// [`mm_to_pt`] followed by [`format_number`].
pub fn pt(mm: f64) -> String {
    format_number(mm_to_pt(mm))
}
