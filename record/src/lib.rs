//! # Activity records
//!
//! Parsing of comma separated activity records sent by a step counter.
//!
//! Two record shapes are supported:
//!
//! ```notrust
//! <steps>,<duration>          e.g. 678,0h50m
//! <steps>,<kind>,<duration>   e.g. 3456,Walking,3h00m
//! ```
//!
//! Fields are taken as is: no whitespace trimming, no quoting or escaping.
//! A negative step count is syntactically valid and left for the caller
//! to reject.

mod duration;
mod error;

pub use duration::{DurationError, parse_duration};
pub use error::RecordError;

use std::str::FromStr;
use time::Duration;

pub const FIELD_SEPARATOR: char = ',';

/// Daily package from the step counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPackage {
    pub steps: i64,
    pub elapsed: Duration,
}

/// Single training session.
///
/// `kind` is kept verbatim, it's matched against known activities later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    pub steps: i64,
    pub kind: String,
    pub elapsed: Duration,
}

/// Split `raw` into exactly `N` fields.
pub fn split_fields<const N: usize>(raw: &str) -> Result<[&str; N], RecordError> {
    let fields = raw.split(FIELD_SEPARATOR).collect::<Vec<_>>();
    let found = fields.len();

    <[&str; N]>::try_from(fields).map_err(|_| RecordError::FieldCount { expected: N, found })
}

/// Base 10 step count, sign allowed.
pub fn parse_steps(field: &str) -> Result<i64, RecordError> {
    field
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidSteps(field.to_owned()))
}

pub fn parse_step_package(raw: &str) -> Result<StepPackage, RecordError> {
    let [steps, elapsed] = split_fields::<2>(raw)?;

    Ok(StepPackage {
        steps: parse_steps(steps)?,
        elapsed: parse_duration(elapsed)?,
    })
}

pub fn parse_training_record(raw: &str) -> Result<TrainingRecord, RecordError> {
    let [steps, kind, elapsed] = split_fields::<3>(raw)?;

    Ok(TrainingRecord {
        steps: parse_steps(steps)?,
        kind: kind.to_owned(),
        elapsed: parse_duration(elapsed)?,
    })
}

impl FromStr for StepPackage {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_step_package(s)
    }
}

impl FromStr for TrainingRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_training_record(s)
    }
}
