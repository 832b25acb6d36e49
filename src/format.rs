use snafu::ensure;

use crate::error::{InvalidOptionSnafu, Result};
use crate::options::Options;
use crate::render::{self, FractionDigits};
use crate::units::unit_table;
use crate::value::ByteValue;

/// Convert a byte count to a human-readable string.
///
/// ```
/// use human_bytes::{human_bytes, Options};
///
/// assert_eq!(human_bytes(1337, &Options::default()).unwrap(), "1.34 kB");
/// ```
pub fn human_bytes(value: impl Into<ByteValue>, options: &Options) -> Result<String> {
    let value = value.into();
    value.ensure_finite()?;

    let units = unit_table(options.bits, options.binary);
    let separator = if options.space {
        if options.non_breaking_space { "\u{00A0}" } else { " " }
    } else {
        ""
    };

    // Exact zero with `signed` gets a space where the sign would go, so
    // signed columns stay aligned.
    if options.signed && value.is_zero() {
        let result = format!(" 0{separator}{}", units[0]);
        return apply_fixed_width(result, options.fixed_width);
    }

    let negative = value.is_negative();
    let prefix = if negative {
        "-"
    } else if options.signed {
        "+"
    } else {
        ""
    };
    let magnitude = value.abs();

    let digits = FractionDigits::resolve(
        options.minimum_fraction_digits,
        options.maximum_fraction_digits,
    );

    let result = if magnitude.less_than_one() {
        let number = render::render_value(&magnitude, &options.locale, digits);
        format!("{prefix}{number}{separator}{}", units[0])
    } else {
        let exponent = select_exponent(&magnitude, options.binary, units.len());
        let base: f64 = if options.binary { 1024.0 } else { 1000.0 };
        let mut scaled = magnitude.divide(base.powi(exponent as i32));
        if digits.is_none() {
            let precision = render::integer_digit_count(scaled).max(3);
            scaled = render::to_precision(scaled, precision);
        }
        let number = render::render_number(scaled, &options.locale, digits);
        format!("{prefix}{number}{separator}{}", units[exponent])
    };

    apply_fixed_width(result, options.fixed_width)
}

/// `floor(log_base(magnitude))`, clamped to the unit table. Only called
/// for magnitudes of at least 1, so the floor is never negative.
fn select_exponent(magnitude: &ByteValue, binary: bool, table_len: usize) -> usize {
    let n = if binary {
        magnitude.ln() / 1024f64.ln()
    } else {
        magnitude.log10() / 3.0
    };
    (n.floor() as usize).min(table_len - 1)
}

/// Left-pad with spaces up to `fixed_width`. Never truncates; width 0
/// is a no-op. Validated here, at the final step.
fn apply_fixed_width(result: String, fixed_width: Option<i64>) -> Result<String> {
    let Some(width) = fixed_width else {
        return Ok(result);
    };
    ensure!(width >= 0, InvalidOptionSnafu { width });

    let width = width as usize;
    let length = result.chars().count();
    if width == 0 || length >= width {
        return Ok(result);
    }
    Ok(format!("{}{result}", " ".repeat(width - length)))
}
