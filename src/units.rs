//! The four fixed unit tables: SI and binary (IEC 80000-13) prefixes,
//! for bytes and for bits.

pub const BYTE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

pub const BIBYTE_UNITS: [&str; 9] = [
    "B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB",
];

pub const BIT_UNITS: [&str; 9] = [
    "b", "kbit", "Mbit", "Gbit", "Tbit", "Pbit", "Ebit", "Zbit", "Ybit",
];

pub const BIBIT_UNITS: [&str; 9] = [
    "b", "kibit", "Mibit", "Gibit", "Tibit", "Pibit", "Eibit", "Zibit", "Yibit",
];

/// Table choice is a pure function of `(bits, binary)`.
pub(crate) fn unit_table(bits: bool, binary: bool) -> &'static [&'static str; 9] {
    match (bits, binary) {
        (false, false) => &BYTE_UNITS,
        (false, true) => &BIBYTE_UNITS,
        (true, false) => &BIT_UNITS,
        (true, true) => &BIBIT_UNITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_selection() {
        assert_eq!(unit_table(false, false)[1], "kB");
        assert_eq!(unit_table(false, true)[1], "KiB");
        assert_eq!(unit_table(true, false)[1], "kbit");
        assert_eq!(unit_table(true, true)[1], "kibit");
    }

    #[test]
    fn tables_share_base_unit() {
        assert_eq!(BYTE_UNITS[0], "B");
        assert_eq!(BIBYTE_UNITS[0], "B");
        assert_eq!(BIT_UNITS[0], "b");
        assert_eq!(BIBIT_UNITS[0], "b");
    }
}
