// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! # Sunnah Times
//!
//! Night-third and Duha derivations computed from today's `PrayerTimes`
//! plus tomorrow's Fajr.

use chrono::{DateTime, Duration, TimeZone};

use crate::{astronomy::unit::Stride, models::rounding::Rounding, schedule::PrayerTimes};

/// Night-third and Duha (forenoon) times derived from a day's prayer
/// schedule and the following day's Fajr.
#[derive(Clone)]
pub struct SunnahTimes<Tz: TimeZone> {
    pub first_third_of_night: DateTime<Tz>,
    pub middle_of_night: DateTime<Tz>,
    pub last_third_of_night: DateTime<Tz>,
    pub duha_start: DateTime<Tz>,
    pub duha_end: DateTime<Tz>,
    pub night_duration_minutes: i64,
}

impl<Tz: TimeZone> SunnahTimes<Tz> {
    /// Derives tonight's Sunnah times from `today`'s prayer schedule and
    /// `tomorrow`'s Fajr. The night runs from today's Maghrib to tomorrow's
    /// Fajr regardless of `midnight_mode`; Duha is bounded by today's
    /// sunrise and Dhuhr.
    #[must_use]
    pub fn new(today: &PrayerTimes<Tz>, tomorrow: &PrayerTimes<Tz>) -> Self {
        let maghrib = today.maghrib();
        let next_fajr = tomorrow.fajr();
        let night_duration = next_fajr.clone().signed_duration_since(maghrib.clone());
        let night_seconds = night_duration.num_seconds() as f64;

        let first_third_of_night = maghrib
            .clone()
            .checked_add_signed(Duration::try_seconds((night_seconds / 3.0) as i64).unwrap())
            .unwrap()
            .rounded_minute(Rounding::Nearest);
        let middle_of_night = maghrib
            .clone()
            .checked_add_signed(Duration::try_seconds((night_seconds / 2.0) as i64).unwrap())
            .unwrap()
            .rounded_minute(Rounding::Nearest);
        let last_third_of_night = maghrib
            .checked_add_signed(Duration::try_seconds((night_seconds * (2.0 / 3.0)) as i64).unwrap())
            .unwrap()
            .rounded_minute(Rounding::Nearest);

        let duha_start = today
            .sunrise()
            .checked_add_signed(Duration::try_minutes(15).unwrap())
            .unwrap()
            .rounded_minute(Rounding::Nearest);
        let duha_end = today
            .dhuhr()
            .checked_add_signed(Duration::try_minutes(-15).unwrap())
            .unwrap()
            .rounded_minute(Rounding::Nearest);

        Self {
            first_third_of_night,
            middle_of_night,
            last_third_of_night,
            duha_start,
            duha_end,
            night_duration_minutes: night_duration.num_minutes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        astronomy::unit::Coordinates,
        models::{asr_school::AsrSchool, method::Method, parameters::Configuration},
        schedule::PrayerSchedule,
    };

    #[test]
    fn night_thirds_partition_the_night_evenly() {
        let date = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let tomorrow = date.tomorrow();
        let coordinates = Coordinates::new(21.4225, 39.8262);
        let params = Configuration::with(Method::MuslimWorldLeague, AsrSchool::Standard);

        let today_times = PrayerSchedule::new()
            .with_date(&date)
            .with_coordinates(coordinates)
            .with_parameters(params.clone())
            .calculate()
            .unwrap();
        let tomorrow_times = PrayerSchedule::new()
            .with_date(&tomorrow)
            .with_coordinates(coordinates)
            .with_parameters(params)
            .calculate()
            .unwrap();

        let sunnah = SunnahTimes::new(&today_times, &tomorrow_times);

        let first_to_middle = sunnah
            .middle_of_night
            .signed_duration_since(sunnah.first_third_of_night)
            .num_minutes();
        let middle_to_last = sunnah
            .last_third_of_night
            .signed_duration_since(sunnah.middle_of_night)
            .num_minutes();

        assert!((first_to_middle - middle_to_last).abs() <= 1);
    }

    #[test]
    fn duha_window_is_fifteen_minutes_from_sunrise_and_dhuhr() {
        let date = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let tomorrow = date.tomorrow();
        let coordinates = Coordinates::new(21.4225, 39.8262);
        let params = Configuration::with(Method::MuslimWorldLeague, AsrSchool::Standard);

        let today_times = PrayerSchedule::new()
            .with_date(&date)
            .with_coordinates(coordinates)
            .with_parameters(params.clone())
            .calculate()
            .unwrap();
        let tomorrow_times = PrayerSchedule::new()
            .with_date(&tomorrow)
            .with_coordinates(coordinates)
            .with_parameters(params)
            .calculate()
            .unwrap();

        let sunnah = SunnahTimes::new(&today_times, &tomorrow_times);

        let sunrise_to_duha_start = sunnah
            .duha_start
            .signed_duration_since(today_times.sunrise())
            .num_minutes();
        let duha_end_to_dhuhr = today_times
            .dhuhr()
            .signed_duration_since(sunnah.duha_end)
            .num_minutes();

        assert!((sunrise_to_duha_start - 15).abs() <= 1);
        assert!((duha_end_to_dhuhr - 15).abs() <= 1);
    }
}
