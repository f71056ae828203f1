pub struct PlotFmt;

impl PlotFmt {
    /// Rounds to 2 decimal places and drops insignificant trailing zeros,
    /// keeping at least one decimal digit: `12.345 -> "12.35"`,
    /// `5.001 -> "5.0"`, `0.10 -> "0.1"`.
    ///
    /// Exact midpoints round away from zero (`0.125 -> "0.13"`); everything
    /// else rounds to the nearest on the exact binary value
    /// (`2.675 -> "2.67"`).
    pub fn round(value: f64) -> String {
        let fixed = if Self::is_midpoint(value) {
            // `value * 100` is exact here, so `round` sees the tie
            format!("{:.2}", (value * 100.0).round() / 100.0)
        } else {
            format!("{:.2}", value)
        };
        // NaN and infinities have no decimal point
        if !fixed.contains('.') {
            return fixed;
        }
        let trimmed = fixed.trim_end_matches('0');
        let rounded = if trimmed.ends_with('.') {
            format!("{}0", trimmed)
        } else {
            trimmed.to_string()
        };
        if rounded == "-0.0" {
            "0.0".to_string()
        } else {
            rounded
        }
    }

    // A value lies exactly halfway between two hundredths iff its fractional
    // part is an odd number of eighths (.125, .375, .625, .875).
    fn is_midpoint(value: f64) -> bool {
        let eighths = value * 8.0;
        eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0
    }

    /// Plot coordinates are printed unrounded.
    pub fn coordinate(value: f64) -> String {
        format!("{}", value)
    }
}
