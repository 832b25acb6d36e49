/// Formatting options. `Default` supplies the normalized baseline:
/// `space` on, everything else off or unset.
#[derive(Clone, Debug)]
pub struct Options {
    /// Prefix positive numbers with `+`. Exact zero gets a single space
    /// instead, so signed columns stay aligned.
    pub signed: bool,

    /// Format as bits instead of bytes (e.g. for bit rates).
    pub bits: bool,

    /// Use binary (IEC) prefixes with base 1024 instead of SI prefixes
    /// with base 1000. Suits memory amounts, not file sizes.
    pub binary: bool,

    /// Put a separator between the number and the unit.
    pub space: bool,

    /// Make that separator a non-breaking space. Ignored when `space`
    /// is off.
    pub non_breaking_space: bool,

    /// Locale for number rendering. See [`Locale`].
    pub locale: Locale,

    /// Minimum fraction digits to display. When neither bound is set,
    /// the number is rounded to 3 significant digits instead.
    pub minimum_fraction_digits: Option<u32>,

    /// Maximum fraction digits to display, truncating past the last one.
    pub maximum_fraction_digits: Option<u32>,

    /// Left-pad the result with spaces up to this width. Never
    /// truncates; zero is a no-op; negative values are rejected.
    pub fixed_width: Option<i64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            signed: false,
            bits: false,
            binary: false,
            space: true,
            non_breaking_space: false,
            locale: Locale::None,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            fixed_width: None,
        }
    }
}

/// Locale selection for number rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    /// Plain decimal rendering, no locale conventions.
    #[default]
    None,

    /// The platform default locale.
    System,

    /// BCP-47 locale tags; the first supported one wins.
    Tags(Vec<String>),
}

impl Locale {
    pub fn tag(tag: impl Into<String>) -> Self {
        Locale::Tags(vec![tag.into()])
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::tag(tag)
    }
}

impl From<Vec<String>> for Locale {
    fn from(tags: Vec<String>) -> Self {
        Locale::Tags(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert!(options.space);
        assert!(!options.signed);
        assert!(!options.bits);
        assert!(!options.binary);
        assert!(!options.non_breaking_space);
        assert_eq!(options.locale, Locale::None);
        assert_eq!(options.minimum_fraction_digits, None);
        assert_eq!(options.maximum_fraction_digits, None);
        assert_eq!(options.fixed_width, None);
    }

    #[test]
    fn locale_constructors() {
        assert_eq!(Locale::from("de"), Locale::Tags(vec!["de".to_string()]));
        assert_eq!(
            Locale::from(vec!["fr".to_string(), "en".to_string()]),
            Locale::Tags(vec!["fr".to_string(), "en".to_string()])
        );
    }
}
