//! Number rendering: plain shortest-representation output, and
//! locale-aware output delegated to ICU4X's decimal formatter.

use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale as IcuLocale;
use num_bigint::BigInt;

use crate::options::Locale;
use crate::value::ByteValue;

/// Resolved fraction-digit bounds. `minimum` defaults to 0 and
/// `maximum` to `max(3, minimum)`, capped at 100 either way.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FractionDigits {
    pub(crate) minimum: u32,
    pub(crate) maximum: u32,
}

impl FractionDigits {
    pub(crate) fn resolve(minimum: Option<u32>, maximum: Option<u32>) -> Option<FractionDigits> {
        if minimum.is_none() && maximum.is_none() {
            return None;
        }
        let minimum = minimum.unwrap_or(0).min(100);
        let maximum = maximum.unwrap_or(minimum.max(3)).min(100).max(minimum);
        Some(FractionDigits { minimum, maximum })
    }
}

/// Render a non-negative finite number.
///
/// Without a locale and without fraction-digit bounds the shortest
/// decimal representation is used. Otherwise the number goes through
/// the locale formatter: explicit bounds truncate past the last digit,
/// default bounds (0..=3) round half away from zero. Trailing zeros are
/// trimmed down to the minimum and padded back up to it.
pub(crate) fn render_number(value: f64, locale: &Locale, digits: Option<FractionDigits>) -> String {
    if *locale == Locale::None && digits.is_none() {
        return shortest(value);
    }

    let (minimum, maximum, mode) = match digits {
        Some(d) => (
            d.minimum,
            d.maximum,
            SignedRoundingMode::Unsigned(UnsignedRoundingMode::Trunc),
        ),
        None => (
            0,
            3,
            SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        ),
    };

    let mut dec = decimal_from_f64(value);
    dec.round_with_mode(-(maximum as i16), mode);
    dec.absolute.trim_end();
    if minimum > 0 {
        dec.absolute.pad_end(-(minimum as i16));
    }

    formatter_for(locale).format(&dec).to_string()
}

/// Render a value from the sub-1 branch, where no scaling happened.
/// Big integers (only zero can land here) render as integers and do not
/// take fraction-digit bounds.
pub(crate) fn render_value(
    value: &ByteValue,
    locale: &Locale,
    digits: Option<FractionDigits>,
) -> String {
    match value {
        ByteValue::Float(f) => render_number(*f, locale, digits),
        ByteValue::BigInt(b) => render_integer(b, locale),
    }
}

fn render_integer(value: &BigInt, locale: &Locale) -> String {
    if *locale == Locale::None {
        return value.to_string();
    }
    let dec = Decimal::try_from_str(&value.to_string()).unwrap_or_else(|_| Decimal::from(0));
    formatter_for(locale).format(&dec).to_string()
}

/// Shortest round-trip decimal representation (`1`, `1.34`, `0.4`).
pub(crate) fn shortest(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let mut buffer = ryu_js::Buffer::new();
    buffer.format(value).to_string()
}

/// Round to `precision` significant digits and re-parse. Works on the
/// shortest decimal form with ties away from zero, so an exact `1.125`
/// becomes `1.13`. Scaled magnitudes always have at most `precision`
/// integer digits, so fixed notation suffices.
pub(crate) fn to_precision(value: f64, precision: usize) -> f64 {
    let fraction_digits = precision.saturating_sub(integer_digit_count(value));
    let mut dec = decimal_from_f64(value);
    dec.round_with_mode(
        -(fraction_digits as i16),
        SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
    );
    dec.to_string().parse().unwrap_or(value)
}

pub(crate) fn integer_digit_count(value: f64) -> usize {
    shortest(value.trunc()).len()
}

fn decimal_from_f64(value: f64) -> Decimal {
    match Decimal::try_from_f64(value, FloatPrecision::RoundTrip) {
        Ok(d) => d,
        Err(_) => match Decimal::try_from_str(&format!("{value}")) {
            Ok(d) => d,
            Err(_) => Decimal::from(0),
        },
    }
}

fn formatter_for(locale: &Locale) -> DecimalFormatter {
    let mut options = DecimalFormatterOptions::default();
    options.grouping_strategy = Some(GroupingStrategy::Auto);
    let preferences = match locale {
        Locale::Tags(tags) => match resolve_locale(tags) {
            Some(resolved) => DecimalFormatterPreferences::from(&resolved),
            None => Default::default(),
        },
        _ => Default::default(),
    };
    DecimalFormatter::try_new(preferences, options)
        .unwrap_or_else(|_| DecimalFormatter::try_new(Default::default(), options).unwrap())
}

/// First tag that parses as a valid BCP-47 locale wins; the formatter
/// then falls back toward root for locales without data. When nothing
/// parses, the caller uses the default preferences.
fn resolve_locale(tags: &[String]) -> Option<IcuLocale> {
    tags.iter().find_map(|tag| tag.parse::<IcuLocale>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_drops_trailing_zeros() {
        assert_eq!(shortest(1.0), "1");
        assert_eq!(shortest(1.3), "1.3");
        assert_eq!(shortest(0.4), "0.4");
        assert_eq!(shortest(0.0), "0");
        assert_eq!(shortest(827181.0), "827181");
    }

    #[test]
    fn precision_rounding() {
        assert_eq!(to_precision(1.337, 3), 1.34);
        assert_eq!(to_precision(1.001, 3), 1.0);
        assert_eq!(to_precision(976.5625, 3), 977.0);
        assert_eq!(to_precision(8.881784197001252, 3), 8.88);
        assert_eq!(to_precision(827180.6125630373, 6), 827181.0);
    }

    #[test]
    fn precision_ties_round_away_from_zero() {
        assert_eq!(to_precision(1.125, 3), 1.13);
        assert_eq!(to_precision(512.5, 3), 513.0);
        assert_eq!(to_precision(1.875, 3), 1.88);
    }

    #[test]
    fn integer_digits() {
        assert_eq!(integer_digit_count(1.337), 1);
        assert_eq!(integer_digit_count(10.1), 2);
        assert_eq!(integer_digit_count(827180.61), 6);
    }

    #[test]
    fn plain_rendering() {
        assert_eq!(render_number(1.34, &Locale::None, None), "1.34");
        assert_eq!(render_number(1000000.0, &Locale::None, None), "1000000");
    }

    #[test]
    fn locale_rendering() {
        assert_eq!(render_number(1.34, &Locale::tag("de"), None), "1,34");
        assert_eq!(render_number(1.34, &Locale::tag("en"), None), "1.34");
        assert_eq!(render_number(1000000.0, &Locale::tag("de"), None), "1.000.000");
        assert_eq!(render_number(1000000.0, &Locale::tag("en"), None), "1,000,000");
        assert_eq!(render_number(1000000.0, &Locale::System, None), "1,000,000");
    }

    #[test]
    fn locale_list_takes_first_valid_tag() {
        let locale = Locale::Tags(vec!["xx-unsupported".to_string(), "de".to_string()]);
        assert_eq!(render_number(1.34, &locale, None), "1,34");
    }

    #[test]
    fn unresolvable_tags_fall_back_to_default_formatter() {
        let locale = Locale::Tags(vec!["xx-unsupported".to_string(), "!!!".to_string()]);
        assert_eq!(render_number(1.34, &locale, None), "1.34");
        assert_eq!(render_number(1000000.0, &locale, None), "1,000,000");
    }

    #[test]
    fn explicit_digits_truncate() {
        let digits = FractionDigits::resolve(None, Some(1));
        assert_eq!(render_number(1.911, &Locale::None, digits), "1.9");
        assert_eq!(render_number(59.952784, &Locale::None, digits), "59.9");

        let digits = FractionDigits::resolve(None, Some(2));
        assert_eq!(render_number(18.2783203125, &Locale::None, digits), "18.27");
    }

    #[test]
    fn minimum_digits_pad() {
        let digits = FractionDigits::resolve(Some(3), None);
        assert_eq!(render_number(1.9, &Locale::None, digits), "1.900");

        let digits = FractionDigits::resolve(Some(1), Some(3));
        assert_eq!(render_number(1.0, &Locale::None, digits), "1.0");

        let digits = FractionDigits::resolve(Some(2), Some(3));
        assert_eq!(render_number(32.0, &Locale::None, digits), "32.00");
    }

    #[test]
    fn default_digit_resolution() {
        assert!(FractionDigits::resolve(None, None).is_none());
        let digits = FractionDigits::resolve(Some(5), None).unwrap();
        assert_eq!(digits.minimum, 5);
        assert_eq!(digits.maximum, 5);
        let digits = FractionDigits::resolve(Some(1), None).unwrap();
        assert_eq!(digits.maximum, 3);
    }
}
