//! # Calorie burnt
//!
//! Distance, mean speed and burnt calories for trainings recorded by a
//! step counter. Distance assumes a fixed step of [`STEP_LENGTH_M`].
//!
//! Running:
//!
//! ```notrust
//! kcal = (18 * speed - 20) * weight
//! ```
//!
//! Walking:
//!
//! ```notrust
//! kcal = (0.035 * weight + (speed^2 / height) * 0.029) * hours * 60
//! ```
//!
//! Where:
//!
//! - speed - mean speed in km/h
//! - weight - weight of person in kilograms
//! - height - height of person
//! - hours - training duration in hours
//!
//! Neither formula is clamped: slow running gives negative calories and
//! a zero height makes walking calories infinite (or NaN without movement).

mod movement;
mod training;

pub use movement::{Distance, Movement};
pub use training::{
    TrainingOutcome, TrainingSummary, UNKNOWN_TRAINING_TYPE, training_info, training_summary,
};

use time::Duration;

/// Average step length in meters
pub const STEP_LENGTH_M: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
/// Average calories burnt by running
const RUNNING_SPEED_SHIFT: f64 = 20.0;

const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Person attributes supplied with every record, never validated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserAttributes {
    /// Weight in kilograms
    pub weight: f64,
    pub height: f64,
}

impl UserAttributes {
    pub const fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    /// Match a record label, English or localized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Walking" | "Ходьба" => Some(Self::Walking),
            "Running" | "Бег" => Some(Self::Running),
            _ => None,
        }
    }

    pub fn spent_calories(self, steps: i64, user: UserAttributes, elapsed: Duration) -> f64 {
        match self {
            Self::Walking => walking_spent_calories(steps, user.weight, user.height, elapsed),
            Self::Running => running_spent_calories(steps, user.weight, elapsed),
        }
    }
}

#[inline]
pub fn as_hours(elapsed: Duration) -> f64 {
    elapsed.as_seconds_f64() / 3600.0
}

#[inline]
pub const fn distance(steps: i64) -> Distance {
    Distance::from_steps(steps)
}

/// Mean speed in km/h. Zero for a zero or negative `elapsed`.
#[inline]
pub fn mean_speed(steps: i64, elapsed: Duration) -> f64 {
    Movement::from_steps(steps, elapsed).speed_kmhr()
}

pub fn running_spent_calories(steps: i64, weight: f64, elapsed: Duration) -> f64 {
    let speed = mean_speed(steps, elapsed);

    (RUNNING_SPEED_MULTIPLIER * speed - RUNNING_SPEED_SHIFT) * weight
}

/// `height` isn't checked, zero gives `inf` or `NaN`.
pub fn walking_spent_calories(steps: i64, weight: f64, height: f64, elapsed: Duration) -> f64 {
    let speed = mean_speed(steps, elapsed);

    (WALKING_WEIGHT_MULTIPLIER * weight + (speed * speed / height) * WALKING_SPEED_HEIGHT_MULTIPLIER)
        * as_hours(elapsed)
        * MIN_IN_H
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round2(value: f64) -> String {
        format!("{value:.2}")
    }

    #[test]
    fn test_from_label() {
        assert_eq!(ActivityKind::from_label("Walking"), Some(ActivityKind::Walking));
        assert_eq!(ActivityKind::from_label("Running"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_label("Ходьба"), Some(ActivityKind::Walking));
        assert_eq!(ActivityKind::from_label("Бег"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_label("running"), None);
        assert_eq!(ActivityKind::from_label(""), None);
    }

    #[test]
    fn test_as_hours() {
        assert_eq!(as_hours(Duration::minutes(30)), 0.5);
        assert_eq!(as_hours(Duration::hours(-2)), -2.0);
        assert_eq!(as_hours(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_mean_speed_guard() {
        assert_eq!(mean_speed(10_000, Duration::ZERO), 0.0);
        assert_eq!(mean_speed(10_000, Duration::seconds(-1)), 0.0);
        assert_eq!(mean_speed(-10_000, Duration::hours(-1)), 0.0);
    }

    #[test]
    fn test_running_calories() {
        // speed 1.3 km/h
        let kcal = running_spent_calories(1000, 70.0, Duration::minutes(30));
        assert!((kcal - 238.0).abs() < 1e-9);
        assert_eq!(round2(kcal), "238.00");
    }

    #[test]
    fn test_running_calories_negative() {
        // speed 0.65 km/h, below the shift
        let kcal = running_spent_calories(500, 70.0, Duration::minutes(30));
        assert!((kcal - -581.0).abs() < 1e-9);

        // no movement at all
        assert_eq!(running_spent_calories(1000, 70.0, Duration::ZERO), -1400.0);
    }

    #[test]
    fn test_walking_calories() {
        let kcal = walking_spent_calories(5000, 70.0, 175.0, Duration::hours(1));
        let expected = (0.035 * 70.0 + (3.25 * 3.25 / 175.0) * 0.029) * 60.0;
        assert!((kcal - expected).abs() < 1e-9);
        assert_eq!(round2(kcal), "147.11");
    }

    #[test]
    fn test_walking_calories_negative_elapsed() {
        // speed is zero, hours stay negative
        let kcal = walking_spent_calories(5000, 70.0, 175.0, Duration::hours(-1));
        assert!((kcal - -147.0).abs() < 1e-9);
    }

    #[test]
    fn test_walking_calories_zero_height() {
        let kcal = walking_spent_calories(5000, 70.0, 0.0, Duration::hours(1));
        assert_eq!(kcal, f64::INFINITY);

        // 0 / 0 without movement
        let kcal = walking_spent_calories(0, 70.0, 0.0, Duration::hours(1));
        assert!(kcal.is_nan());
    }

    #[test]
    fn test_spent_calories_dispatch() {
        let user = UserAttributes::new(70.0, 175.0);
        let elapsed = Duration::minutes(30);

        assert_eq!(
            ActivityKind::Running.spent_calories(1000, user, elapsed),
            running_spent_calories(1000, 70.0, elapsed)
        );
        assert_eq!(
            ActivityKind::Walking.spent_calories(1000, user, elapsed),
            walking_spent_calories(1000, 70.0, 175.0, elapsed)
        );
    }
}
