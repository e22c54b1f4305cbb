use std::fmt::Display;

use record::{RecordError, TrainingRecord};

use crate::{ActivityKind, Distance, UserAttributes, as_hours, mean_speed};

/// Returned instead of a summary when the training kind isn't known.
pub const UNKNOWN_TRAINING_TYPE: &str = "unknown training type";

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingSummary {
    /// Label as it was written in the record
    pub kind: String,
    pub duration_hours: f64,
    pub distance: Distance,
    /// Mean speed in km/h
    pub speed: f64,
    pub calories: f64,
}

impl TrainingSummary {
    pub fn new(record: TrainingRecord, kind: ActivityKind, user: UserAttributes) -> Self {
        let TrainingRecord {
            steps,
            kind: label,
            elapsed,
        } = record;

        Self {
            kind: label,
            duration_hours: as_hours(elapsed),
            distance: Distance::from_steps(steps),
            speed: mean_speed(steps, elapsed),
            calories: kind.spent_calories(steps, user, elapsed),
        }
    }
}

impl Display for TrainingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Training type: {}\nDuration: {:.2} hours.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
            self.kind,
            self.duration_hours,
            self.distance.as_kilometers(),
            self.speed,
            self.calories,
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TrainingOutcome {
    Summary(TrainingSummary),
    /// Record was valid but its kind is neither walking nor running
    UnknownKind(String),
}

impl Display for TrainingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary(summary) => Display::fmt(summary, f),
            Self::UnknownKind(_) => f.write_str(UNKNOWN_TRAINING_TYPE),
        }
    }
}

/// Parse a `<steps>,<kind>,<duration>` record and compute its metrics.
pub fn training_summary(data: &str, user: UserAttributes) -> Result<TrainingOutcome, RecordError> {
    let record = record::parse_training_record(data)?;

    Ok(match ActivityKind::from_label(&record.kind) {
        Some(kind) => TrainingOutcome::Summary(TrainingSummary::new(record, kind, user)),
        None => TrainingOutcome::UnknownKind(record.kind),
    })
}

/// Human readable training summary.
///
/// Parse errors are logged and give an empty string, an unknown kind
/// gives [`UNKNOWN_TRAINING_TYPE`].
pub fn training_info(data: &str, weight: f64, height: f64) -> String {
    match training_summary(data, UserAttributes::new(weight, height)) {
        Ok(outcome) => outcome.to_string(),
        Err(e) => {
            log::warn!("Failed to parse training {data:?}. Reason: {e}");
            String::new()
        }
    }
}
