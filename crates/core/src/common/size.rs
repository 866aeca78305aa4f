//! Human-readable memory sizes.
//!
//! Sizes follow the simulation framework's memory convention: every prefix is a
//! power of 1024, so `"1024MB"`, `"1GiB"` and `"1G"` all mean 2^30 bytes. The
//! magnitude may carry a fraction (`"1.5GB"`) as long as it lands on a whole
//! number of bytes.

use super::error::SizeError;

/// Recognised unit suffixes and their power of 1024.
const UNITS: &[(&str, u32)] = &[
    ("B", 0),
    ("k", 1),
    ("K", 1),
    ("Ki", 1),
    ("kB", 1),
    ("KB", 1),
    ("KiB", 1),
    ("M", 2),
    ("Mi", 2),
    ("MB", 2),
    ("MiB", 2),
    ("G", 3),
    ("Gi", 3),
    ("GB", 3),
    ("GiB", 3),
    ("T", 4),
    ("Ti", 4),
    ("TB", 4),
    ("TiB", 4),
    ("P", 5),
    ("Pi", 5),
    ("PB", 5),
    ("PiB", 5),
    ("E", 6),
    ("Ei", 6),
    ("EB", 6),
    ("EiB", 6),
];

/// Units used when rendering sizes, largest first.
const DISPLAY_UNITS: &[(&str, u32)] = &[
    ("EiB", 6),
    ("PiB", 5),
    ("TiB", 4),
    ("GiB", 3),
    ("MiB", 2),
    ("KiB", 1),
];

/// Longest fraction (after trailing zeros) whose scaled value still fits `u128`.
const MAX_FRACTION_DIGITS: u32 = 19;

/// Parses a memory size such as `"1024MB"`, `"1.5GB"`, `"4 GiB"`, `"512M"` or
/// `"4096"` into bytes.
///
/// A bare number is a byte count. Whitespace around the string and between the
/// number and the unit is ignored. Units are case-sensitive.
///
/// # Errors
///
/// Returns a [`SizeError`] if the string is empty, does not start with a
/// number, carries an unknown unit, is not a whole number of bytes, or
/// overflows `u64`.
pub fn parse_mem_size(input: &str) -> Result<u64, SizeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SizeError::Empty);
    }

    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return Err(SizeError::MissingNumber(input.to_owned()));
    }

    let unit = unit.trim_start();
    let power = if unit.is_empty() {
        0
    } else {
        UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|&(_, power)| power)
            .ok_or_else(|| SizeError::UnknownUnit {
                input: input.to_owned(),
                unit: unit.to_owned(),
            })?
    };
    let scale = 1u128 << (power * 10);

    // All-digit strings only fail to parse on overflow.
    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| SizeError::Overflow(input.to_owned()))?
    };
    let mut bytes = u128::from(whole) * scale;

    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        let digits = u32::try_from(fraction.len())
            .ok()
            .filter(|&n| n <= MAX_FRACTION_DIGITS)
            .ok_or_else(|| SizeError::FractionalBytes(input.to_owned()))?;
        let numerator: u128 = fraction
            .parse()
            .map_err(|_| SizeError::MissingNumber(input.to_owned()))?;
        let numerator = numerator * scale;
        let denominator = 10u128.pow(digits);
        if numerator % denominator != 0 {
            return Err(SizeError::FractionalBytes(input.to_owned()));
        }
        bytes += numerator / denominator;
    }

    u64::try_from(bytes).map_err(|_| SizeError::Overflow(input.to_owned()))
}

/// Renders a byte count using the largest binary unit that divides it exactly.
pub fn format_mem_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_owned();
    }
    DISPLAY_UNITS
        .iter()
        .find(|&&(_, power)| bytes % (1u64 << (power * 10)) == 0)
        .map_or_else(
            || format!("{bytes}B"),
            |&(name, power)| format!("{}{name}", bytes >> (power * 10)),
        )
}
