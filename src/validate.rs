// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! # Validator
//!
//! Pure, side-effect-free checks run after a `PrayerTimes` calculation:
//! ordering, gap sanity between prayers, and day-length sanity. None of
//! these ever change the calculated times; they only attach warnings.

use chrono::TimeZone;

use crate::{astronomy::unit::Coordinates, error::Warning, schedule::PrayerTimes};

enum LatitudeBand {
    Moderate,
    High,
    Extreme,
}

fn latitude_band(latitude: f64) -> LatitudeBand {
    let abs_latitude = latitude.abs();

    if abs_latitude >= 60.0 {
        LatitudeBand::Extreme
    } else if abs_latitude >= 48.0 {
        LatitudeBand::High
    } else {
        LatitudeBand::Moderate
    }
}

/// Runs the ordering, gap, and day-length sanity checks against a
/// calculated `PrayerTimes` and returns any warnings. An empty vector means
/// every invariant held.
#[must_use]
pub fn validate<Tz: TimeZone>(times: &PrayerTimes<Tz>, coordinates: &Coordinates) -> Vec<Warning> {
    let mut warnings = Vec::new();

    check_ordering(times, &mut warnings);
    check_gaps(times, coordinates.latitude, &mut warnings);
    check_day_length(times, coordinates.latitude, &mut warnings);

    warnings
}

fn check_ordering<Tz: TimeZone>(times: &PrayerTimes<Tz>, warnings: &mut Vec<Warning>) {
    let instants = [
        ("fajr", times.fajr()),
        ("sunrise", times.sunrise()),
        ("dhuhr", times.dhuhr()),
        ("asr", times.asr()),
        ("maghrib", times.maghrib()),
        ("isha", times.isha()),
    ];

    for window in instants.windows(2) {
        let (earlier_name, earlier) = &window[0];
        let (later_name, later) = &window[1];

        if earlier >= later {
            warnings.push(Warning::OrderingWarning(format!(
                "{earlier_name} is not strictly before {later_name}"
            )));
        }
    }
}

fn check_gaps<Tz: TimeZone>(times: &PrayerTimes<Tz>, latitude: f64, warnings: &mut Vec<Warning>) {
    let fajr_to_sunrise = times
        .sunrise()
        .signed_duration_since(times.fajr())
        .num_minutes();
    let maghrib_to_isha = times
        .isha()
        .signed_duration_since(times.maghrib())
        .num_minutes();

    let (fajr_sunrise_limit, maghrib_isha_limit) = match latitude_band(latitude) {
        LatitudeBand::Moderate => (180, 240),
        LatitudeBand::High => (240, 300),
        LatitudeBand::Extreme => (300, 360),
    };

    if fajr_to_sunrise > fajr_sunrise_limit {
        warnings.push(Warning::OrderingWarning(format!(
            "Fajr to sunrise gap of {fajr_to_sunrise} min exceeds the {fajr_sunrise_limit} min threshold for this latitude"
        )));
    }

    if maghrib_to_isha > maghrib_isha_limit {
        warnings.push(Warning::OrderingWarning(format!(
            "Maghrib to Isha gap of {maghrib_to_isha} min exceeds the {maghrib_isha_limit} min threshold for this latitude"
        )));
    }
}

fn check_day_length<Tz: TimeZone>(times: &PrayerTimes<Tz>, latitude: f64, warnings: &mut Vec<Warning>) {
    // Maghrib coincides with sunset under the default `MaghribRule`; under a
    // fixed interval or angle offset it is a close enough proxy for this
    // sanity check.
    let day_length_hours = times
        .maghrib()
        .signed_duration_since(times.sunrise())
        .num_minutes() as f64
        / 60.0;

    let (min_hours, max_hours) = if latitude.abs() >= 60.0 { (2.0, 22.0) } else { (4.0, 20.0) };

    if day_length_hours < min_hours || day_length_hours > max_hours {
        warnings.push(Warning::OrderingWarning(format!(
            "day length of {day_length_hours:.1}h is outside the sane range [{min_hours}, {max_hours}]h for this latitude"
        )));
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::{method::Method, parameters::Configuration};

    #[test]
    fn moderate_latitude_valid_day_has_no_warnings() {
        let date = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let coordinates = Coordinates::new(21.4225, 39.8262);
        let params = Configuration::with(Method::MuslimWorldLeague, crate::models::asr_school::AsrSchool::Standard);
        let times = crate::schedule::PrayerSchedule::new()
            .with_date(&date)
            .with_coordinates(coordinates)
            .with_parameters(params)
            .calculate()
            .unwrap();

        assert!(validate(&times, &coordinates).is_empty());
    }
}
