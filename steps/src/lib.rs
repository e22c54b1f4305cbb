//! Daily step summary.
//!
//! The step counter sends `<steps>,<duration>` packages, e.g. `678,0h50m`.
//! Distance is counted with an average step of
//! [`calorie_burnt::STEP_LENGTH_M`] and calories with the walking formula.

use std::fmt::Display;

use calorie_burnt::{Distance, UserAttributes, walking_spent_calories};
use record::{RecordError, StepPackage};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySummary {
    pub steps: i64,
    pub distance: Distance,
    pub calories: f64,
}

impl Display for DaySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Steps: {}.\nDistance: {:.2} km.\nYou burned {:.2} kcal.\n",
            self.steps,
            self.distance.as_kilometers(),
            self.calories,
        ))
    }
}

/// Parse a daily package and compute its metrics.
///
/// `Ok(None)` when the step count is negative.
pub fn day_summary(data: &str, user: UserAttributes) -> Result<Option<DaySummary>, RecordError> {
    let StepPackage { steps, elapsed } = record::parse_step_package(data)?;

    if steps < 0 {
        return Ok(None);
    }

    Ok(Some(DaySummary {
        steps,
        distance: calorie_burnt::distance(steps),
        calories: walking_spent_calories(steps, user.weight, user.height, elapsed),
    }))
}

/// Human readable daily summary.
///
/// Empty string for an invalid package (the error is logged) or a
/// negative step count (silently).
pub fn day_action_info(data: &str, weight: f64, height: f64) -> String {
    match day_summary(data, UserAttributes::new(weight, height)) {
        Ok(Some(summary)) => summary.to_string(),
        Ok(None) => String::new(),
        Err(e) => {
            log::warn!("Failed to parse package {data:?}. Reason: {e}");
            String::new()
        }
    }
}
