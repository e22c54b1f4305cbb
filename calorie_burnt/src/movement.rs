use time::Duration;

use crate::{M_IN_KM, STEP_LENGTH_M};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_kilometers(km: f64) -> Self {
        Self(km)
    }

    pub const fn from_meters(m: f64) -> Self {
        Self(m / M_IN_KM)
    }

    /// Distance covered by `steps` of [`STEP_LENGTH_M`].
    ///
    /// Negative counts give a negative distance.
    pub const fn from_steps(steps: i64) -> Self {
        Self::from_meters(steps as f64 * STEP_LENGTH_M)
    }

    pub const fn as_kilometers(self) -> f64 {
        self.0
    }

    pub const fn as_meters(self) -> f64 {
        self.0 * M_IN_KM
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub distance: Distance,
    pub elapsed: Duration,
}

impl Movement {
    pub const fn from_steps(steps: i64, elapsed: Duration) -> Self {
        Self {
            distance: Distance::from_steps(steps),
            elapsed,
        }
    }

    /// Mean speed in km/h, `0.0` when elapsed time isn't positive.
    pub fn speed_kmhr(&self) -> f64 {
        if !self.elapsed.is_positive() {
            return 0.0;
        }

        self.distance.as_kilometers() / crate::as_hours(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_from_steps() {
        assert_eq!(Distance::from_steps(0).as_kilometers(), 0.0);
        assert_eq!(Distance::from_steps(5000).as_kilometers(), 3.25);
        assert_eq!(Distance::from_steps(1000).as_meters(), 650.0);
        assert_eq!(Distance::from_steps(-1000).as_kilometers(), -0.65);
    }

    #[test]
    fn test_speed() {
        let movement = Movement::from_steps(5000, Duration::hours(1));
        assert_eq!(movement.speed_kmhr(), 3.25);

        let movement = Movement::from_steps(1000, Duration::minutes(30));
        assert_eq!(movement.speed_kmhr(), 1.3);
    }

    #[test]
    fn test_speed_non_positive_elapsed() {
        for steps in [-500, 0, 1, 10_000] {
            assert_eq!(Movement::from_steps(steps, Duration::ZERO).speed_kmhr(), 0.0);
            assert_eq!(
                Movement::from_steps(steps, Duration::minutes(-30)).speed_kmhr(),
                0.0
            );
        }
    }
}
