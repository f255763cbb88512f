//! Default string form of a result
//!
//! Shortest round-trip digits, no trailing `.0`, exponent notation outside
//! `[1e-6, 1e21)` with an explicit exponent sign (`1e+21`, `1e-7`).

const EXPONENT_UPPER: f64 = 1e21;
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a number for the result display
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0 as well
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}
