//! Human-readable rendering of tick and legend values.

use super::superscript::to_superscript;

/// Rounds `x` to the given number of significant digits.
///
/// NaN and infinities pass through unchanged, as does exact zero.
#[must_use]
pub fn round_to_significant(x: f64, digits: u32) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let shift = digits as i32 - magnitude - 1;
    // Powers of ten below one are inexact doubles; dividing by the exact
    // positive power keeps results like 1200.0 free of drift.
    let scale = 10f64.powi(shift.abs());
    if shift >= 0 {
        (x * scale).round() / scale
    } else {
        (x / scale).round() * scale
    }
}

/// Formats a value as mantissa times a power of ten, the exponent snapped
/// down to a multiple of three: `1.2×10³`, `120.43`, `120×10⁻³`.
///
/// An exponent of zero renders the mantissa alone. Non-finite values fall
/// back to their plain `Display` form.
#[must_use]
pub fn format_value(value: f64, digits: u32) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{value}");
    }

    let exponent = value.abs().log10().floor() as i32;
    let exponent3 = exponent.div_euclid(3) * 3;
    let mantissa = if exponent3 >= 0 {
        value / 10f64.powi(exponent3)
    } else {
        value * 10f64.powi(-exponent3)
    };

    let mantissa = round_to_significant(mantissa, digits);
    if exponent3 == 0 {
        format!("{mantissa}")
    } else {
        format!(
            "{mantissa}×10{}",
            to_superscript(&exponent3.to_string())
        )
    }
}
