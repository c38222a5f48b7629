/// Formats `value` like C's `%.<significant>g`.
///
/// Uses fixed notation when the decimal exponent is in `-4..significant`,
/// scientific notation (`1.5e+06`) otherwise, and drops trailing zeros in
/// both. Non-finite values render as `NaN`, `+Inf` and `-Inf`.
pub fn format_g(value: f64, significant: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let significant = significant.max(1);
    // Round first so that e.g. 9.99 at 2 digits picks up the carried exponent.
    let sci = format!("{:.*e}", significant - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= significant as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (significant as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Right-aligns [`format_g`] output in a field of `width` characters.
pub fn format_g_width(value: f64, significant: usize, width: usize) -> String {
    format!("{:>width$}", format_g(value, significant), width = width)
}

/// Formats `value` with a fixed number of decimals, right-aligned to `width`.
///
/// Non-finite values use the same spelling as [`format_g`].
pub fn format_fixed(value: f64, decimals: usize, width: usize) -> String {
    if value.is_finite() {
        format!("{:>width$.decimals$}", value, width = width, decimals = decimals)
    } else {
        format_g_width(value, 1, width)
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
