// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use thiserror::Error;

use crate::models::prayer::Prayer;

/// Fatal errors that prevent a `PrayerTimes` calculation from completing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// An input field fell outside its valid range before any solar
    /// computation was attempted.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The hour-angle solver returned a polar (never-reaches-angle)
    /// condition for `prayer` and `high_latitude_rule` was `None`, so no
    /// fallback could be applied.
    #[error("{prayer} could not be resolved at this latitude (polar condition, no fallback rule configured)")]
    PolarUnresolved { prayer: Prayer },
}

/// Non-fatal conditions attached to an otherwise valid `PrayerTimes` result.
/// Warnings never mutate the returned times.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Warning {
    /// A high-latitude or Moonsighting seasonal fallback was applied
    /// because the angle-based solver returned a polar condition.
    #[error("{prayer} was derived via the {rule} fallback instead of its method angle")]
    FallbackApplied { prayer: Prayer, rule: &'static str },

    /// The post-calculation ordering or gap invariants were violated; this
    /// is only ever a warning at high/extreme latitudes.
    #[error("{0}")]
    OrderingWarning(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_the_field() {
        let err = CalculationError::InvalidInput {
            field: "latitude",
            reason: "must be within [-90, 90]".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "invalid input for latitude: must be within [-90, 90]"
        );
    }

    #[test]
    fn polar_unresolved_names_the_prayer() {
        let err = CalculationError::PolarUnresolved { prayer: Prayer::Fajr };

        assert!(err.to_string().contains("Fajr"));
    }
}
