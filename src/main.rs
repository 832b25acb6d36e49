use clap::Parser;
use num_bigint::BigInt;
use std::process::ExitCode;

use human_bytes::{ByteValue, Locale, Options, human_bytes};

#[derive(Parser)]
#[command(
    name = "human-bytes",
    version,
    about = "Convert a byte count to a human readable string"
)]
struct Cli {
    /// Byte count to format: an integer of any size, or a decimal number
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Format as bits instead of bytes
    #[arg(long)]
    bits: bool,

    /// Use binary (IEC) prefixes with base 1024
    #[arg(long)]
    binary: bool,

    /// Prefix positive numbers with a plus sign
    #[arg(long)]
    signed: bool,

    /// Omit the space between number and unit
    #[arg(long = "no-space")]
    no_space: bool,

    /// Use a non-breaking space between number and unit
    #[arg(long = "non-breaking-space")]
    non_breaking_space: bool,

    /// Locale tag for number formatting; repeat to give fallbacks
    #[arg(short = 'l', long = "locale")]
    locale: Vec<String>,

    /// Use the system default locale for number formatting
    #[arg(long = "system-locale", conflicts_with = "locale")]
    system_locale: bool,

    /// Minimum number of fraction digits to display
    #[arg(long = "min-fraction-digits")]
    minimum_fraction_digits: Option<u32>,

    /// Maximum number of fraction digits to display
    #[arg(long = "max-fraction-digits")]
    maximum_fraction_digits: Option<u32>,

    /// Left-pad the result with spaces to this width
    #[arg(long = "fixed-width", allow_hyphen_values = true)]
    fixed_width: Option<i64>,
}

/// Integer strings of any size become big integers; anything else must
/// parse as a float.
fn parse_value(raw: &str) -> Option<ByteValue> {
    if let Ok(big) = raw.parse::<BigInt>() {
        return Some(ByteValue::BigInt(big));
    }
    raw.parse::<f64>().ok().map(ByteValue::Float)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(value) = parse_value(&cli.value) else {
        eprintln!("Error: not a number: {}", cli.value);
        return ExitCode::from(1);
    };

    let locale = if cli.system_locale {
        Locale::System
    } else if cli.locale.is_empty() {
        Locale::None
    } else {
        Locale::Tags(cli.locale)
    };

    let options = Options {
        signed: cli.signed,
        bits: cli.bits,
        binary: cli.binary,
        space: !cli.no_space,
        non_breaking_space: cli.non_breaking_space,
        locale,
        minimum_fraction_digits: cli.minimum_fraction_digits,
        maximum_fraction_digits: cli.maximum_fraction_digits,
        fixed_width: cli.fixed_width,
    };

    match human_bytes(value, &options) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
