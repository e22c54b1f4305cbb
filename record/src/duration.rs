//! Duration strings made of `<number><unit>` pairs, e.g. `3h25m`, `1.5h` or `-45s`.
//!
//! Supported units: `ns`, `us` (also `µs`/`μs`), `ms`, `s`, `m`, `h`.
//! A leading sign is allowed and applies to the whole value. The bare
//! string `0` is zero and needs no unit.

use thiserror::Error;
use time::Duration;

const UNITS: [(&str, u64); 8] = [
    ("ns", 1),
    ("us", 1_000),
    // micro sign
    ("µs", 1_000),
    // greek small letter mu
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Fraction digits beyond this are ignored.
const MAX_FRACTION_DIGITS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("missing number in duration {0:?}")]
    MissingNumber(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

/// Parse a duration string into a signed [`Duration`].
///
/// Negative values are accepted, callers decide what a negative elapsed
/// time means.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    let (negative, mut rest) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }

    if rest.is_empty() {
        return Err(DurationError::MissingNumber(input.to_owned()));
    }

    let overflow = || DurationError::Overflow(input.to_owned());
    // one more nanosecond fits on the negative side
    let limit = i64::MAX as u64 + u64::from(negative);
    let mut total: u64 = 0;

    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after_whole),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::MissingNumber(input.to_owned()));
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, after_unit) = after_number.split_at(unit_len);

        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_owned()));
        }

        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)
            .ok_or_else(|| DurationError::UnknownUnit {
                unit: unit.to_owned(),
                input: input.to_owned(),
            })?;

        let whole = match whole.is_empty() {
            true => 0,
            false => whole.parse::<u64>().map_err(|_| overflow())?,
        };

        let nanos = whole
            .checked_mul(scale)
            .and_then(|nanos| nanos.checked_add(fraction_nanos(fraction, scale)))
            .ok_or_else(overflow)?;

        total = total
            .checked_add(nanos)
            .filter(|total| *total <= limit)
            .ok_or_else(overflow)?;

        rest = after_unit;
    }

    let nanos = match negative {
        true => 0_i64.wrapping_sub_unsigned(total),
        false => i64::try_from(total).map_err(|_| overflow())?,
    };

    Ok(Duration::nanoseconds(nanos))
}

fn split_digits(input: &str) -> (&str, &str) {
    let len = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());

    input.split_at(len)
}

fn fraction_nanos(fraction: &str, scale: u64) -> u64 {
    let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];

    if digits.is_empty() {
        return 0;
    }

    let value = digits.parse::<u64>().unwrap_or_default() as f64;
    let divisor = 10_f64.powi(digits.len() as i32);

    (value * (scale as f64 / divisor)) as u64
}
