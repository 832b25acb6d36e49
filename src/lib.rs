//! Convert a byte count to a human-readable string: `1337` becomes
//! `1.34 kB`.
//!
//! The core is the single pure function [`human_bytes`]. It accepts a
//! finite `f64` or an arbitrary-precision integer, picks a unit from one
//! of four fixed tables (SI or binary prefixes, bytes or bits), scales
//! the value without losing precision for very large integers, and
//! renders the number either plainly or through the platform's
//! locale-aware decimal formatter.
//!
//! ```
//! use human_bytes::{human_bytes, Locale, Options};
//!
//! let options = Options::default();
//! assert_eq!(human_bytes(1337, &options).unwrap(), "1.34 kB");
//! assert_eq!(human_bytes(42.5, &options).unwrap(), "42.5 B");
//!
//! let binary = Options { binary: true, ..Options::default() };
//! assert_eq!(human_bytes(1025, &binary).unwrap(), "1 KiB");
//!
//! let german = Options { locale: Locale::tag("de"), ..Options::default() };
//! assert_eq!(human_bytes(1337, &german).unwrap(), "1,34 kB");
//! ```

pub mod error;
mod format;
mod options;
mod render;
mod units;
mod value;

pub use error::{Error, Result};
pub use format::human_bytes;
pub use options::{Locale, Options};
pub use units::{BIBIT_UNITS, BIBYTE_UNITS, BIT_UNITS, BYTE_UNITS};
pub use value::ByteValue;
