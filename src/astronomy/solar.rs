// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use chrono::{DateTime, Datelike, Days, TimeZone, Utc};

use crate::astronomy::{
    ops,
    unit::{Angle, Coordinates, Stride},
};

#[derive(PartialEq, Debug, Copy, Clone)]
pub struct SolarCoordinates {
    // The declination of the sun, the angle between
    // the rays of the Sun and the plane of the Earth's equator.
    declination: Angle,

    // Right ascension of the Sun, the angular distance on the
    // celestial equator from the vernal equinox to the hour circle.
    right_ascension: Angle,

    // Apparent sidereal time, the hour angle of the vernal equinox.
    apparent_sidereal_time: Angle,
}

impl SolarCoordinates {
    fn new(julian_day: f64) -> Self {
        let julian_century = ops::julian_century(julian_day);
        let mean_solar_longitude = ops::mean_solar_longitude(julian_century);
        let mean_lunar_longitude = ops::mean_lunar_longitude(julian_century);
        let ascending_lunar_node = ops::ascending_lunar_node_longitude(julian_century);
        let apparent_solar_longitude = ops::apparent_solar_longitude(julian_century, mean_solar_longitude).radians();

        let mean_sidereal_time = ops::mean_sidereal_time(julian_century);
        let nutation_longitude =
            ops::nutation_in_longitude(mean_solar_longitude, mean_lunar_longitude, ascending_lunar_node);
        let nutation_obliq =
            ops::nutation_in_obliquity(mean_solar_longitude, mean_lunar_longitude, ascending_lunar_node);

        let mean_obliq_ecliptic = ops::mean_obliquity_of_the_ecliptic(julian_century);
        let apparent_obliq_ecliptic =
            ops::apparent_obliquity_of_the_ecliptic(julian_century, mean_obliq_ecliptic).radians();

        // Equation from Astronomical Algorithms page 165
        let declination = Angle::from_radians((apparent_obliq_ecliptic.sin() * apparent_solar_longitude.sin()).asin());

        // Equation from Astronomical Algorithms page 165
        let right_ascension = Angle::from_radians(
            (apparent_obliq_ecliptic.cos() * apparent_solar_longitude.sin()).atan2(apparent_solar_longitude.cos()),
        )
        .unwound();

        // Equation from Astronomical Algorithms page 88
        let apparent_sidereal_time = Angle::new(
            mean_sidereal_time.degrees
                + ((nutation_longitude * 3600.0)
                    * Angle::new(mean_obliq_ecliptic.degrees + nutation_obliq).radians().cos())
                    / 3600.0,
        );

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
        }
    }
}

// Solar Time
#[derive(Debug, Clone)]
pub struct SolarTime<Tz: TimeZone> {
    date: DateTime<Tz>,
    observer: Coordinates,
    solar: SolarCoordinates,
    pub transit: DateTime<Tz>,
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    prev_solar: SolarCoordinates,
    next_solar: SolarCoordinates,
    approx_transit: f64,
}

impl<Tz: TimeZone> SolarTime<Tz> {
    pub fn new(date: &DateTime<Tz>, coordinates: Coordinates) -> Self {
        // All calculation need to occur at 0h0m UTC
        let today = Utc
            .with_ymd_and_hms(date.year(), date.month(), date.day(), 0, 0, 0)
            .unwrap();
        let tomorrow = today.tomorrow();
        let yesterday = today.yesterday();
        let prev_solar = SolarCoordinates::new(yesterday.julian_day());
        let solar = SolarCoordinates::new(today.julian_day());
        let next_solar = SolarCoordinates::new(tomorrow.julian_day());
        let solar_altitude = Angle::new(-50.0 / 60.0);
        let approx_transit = ops::approximate_transit(
            coordinates.longitude_angle(),
            solar.apparent_sidereal_time,
            solar.right_ascension,
        );
        let transit_time = ops::corrected_transit(
            approx_transit,
            coordinates.longitude_angle(),
            solar.apparent_sidereal_time,
            solar.right_ascension,
            prev_solar.right_ascension,
            next_solar.right_ascension,
        );
        let sunrise_time = ops::corrected_hour_angle(
            approx_transit,
            solar_altitude,
            coordinates,
            false,
            solar.apparent_sidereal_time,
            solar.right_ascension,
            prev_solar.right_ascension,
            next_solar.right_ascension,
            solar.declination,
            prev_solar.declination,
            next_solar.declination,
        );
        let sunset_time = ops::corrected_hour_angle(
            approx_transit,
            solar_altitude,
            coordinates,
            true,
            solar.apparent_sidereal_time,
            solar.right_ascension,
            prev_solar.right_ascension,
            next_solar.right_ascension,
            solar.declination,
            prev_solar.declination,
            next_solar.declination,
        );

        // `transit_time` only involves sin/cos/interpolation, never an
        // arccos, so it is never NaN; sunrise/sunset can be NaN during
        // continuous polar day or night. When that happens we fall back to
        // the antipodal point of transit (transit ± 12h) as the nominal
        // horizon crossing, so the rest of the day's calculation (which
        // only needs *a* sunrise/sunset to measure the night against) has
        // something finite to work with instead of panicking.
        let transit = Self::setting_hour(transit_time, date).expect("corrected transit is always finite");
        let sunrise = Self::setting_hour(sunrise_time, date)
            .unwrap_or_else(|| Self::setting_hour(transit_time - 12.0, date).expect("transit ± 12h is finite"));
        let sunset = Self::setting_hour(sunset_time, date)
            .unwrap_or_else(|| Self::setting_hour(transit_time + 12.0, date).expect("transit ± 12h is finite"));

        Self {
            date: date.clone(),
            observer: coordinates,
            solar,
            transit,
            sunrise,
            sunset,
            prev_solar,
            next_solar,
            approx_transit,
        }
    }

    /// Returns the instant the sun crosses `angle` (degrees below the
    /// horizon when negative), before or after transit. Returns `None` when
    /// the sun never reaches that angle on this day (the hour-angle solver's
    /// `arccos` argument falls outside `[-1, 1]`) — the caller is expected
    /// to apply a high-latitude fallback in that case.
    pub fn time_for_solar_angle(&self, angle: Angle, after_transit: bool) -> Option<DateTime<Tz>> {
        let hours = ops::corrected_hour_angle(
            self.approx_transit,
            angle,
            self.observer,
            after_transit,
            self.solar.apparent_sidereal_time,
            self.solar.right_ascension,
            self.prev_solar.right_ascension,
            self.next_solar.right_ascension,
            self.solar.declination,
            self.prev_solar.declination,
            self.next_solar.declination,
        );

        Self::setting_hour(hours, &self.date)
    }

    /// Returns the instant the sun's shadow-length reaches `shadow_length`
    /// times the object's own length after transit (the Asr geometry).
    pub fn afternoon(&self, shadow_length: f64) -> Option<DateTime<Tz>> {
        let absolute_degrees = (self.observer.latitude - self.solar.declination.degrees).abs();
        let tangent = Angle::new(absolute_degrees);
        let inverse = shadow_length + tangent.radians().tan();
        let angle = Angle::from_radians((1.0 / inverse).atan());

        self.time_for_solar_angle(angle, true)
    }

    fn setting_hour(hours: f64, date: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        if !hours.is_nan() {
            let rounded_hours = hours.floor();
            let rounded_minutes = ((hours - rounded_hours) * 60.0).floor();
            let rounded_seconds = ((hours - (rounded_hours + rounded_minutes / 60.0)) * 3600.0).floor();

            let (mut adjusted_hour, mut adjusted_date) = Self::hour_adjustment(rounded_hours, date);

            // Round to the nearest minute
            let mut adjusted_mins = (rounded_minutes + rounded_seconds / 60.0).round() as u32;
            let mut adjusted_secs: u32 = 0;

            // Correct adjustments if overflowing units
            // TODO: Determine if above calculations can be modified to ensure
            // units do not overflow
            if adjusted_secs >= 60 {
                adjusted_mins += adjusted_secs / 60;
                adjusted_secs %= 60;
            }

            if adjusted_mins >= 60 {
                adjusted_hour += adjusted_mins / 60;
                adjusted_mins %= 60;
            }

            if adjusted_hour >= 24 {
                adjusted_date = adjusted_date
                    .checked_add_days(Days::new(u64::from(adjusted_hour) / 24))
                    .unwrap();
                adjusted_hour %= 24;
            }

            let adjusted = Utc
                .with_ymd_and_hms(
                    adjusted_date.year(),
                    adjusted_date.month(),
                    adjusted_date.day(),
                    adjusted_hour,
                    adjusted_mins,
                    adjusted_secs,
                )
                .unwrap();

            Some(adjusted.with_timezone(&date.timezone()))
        } else {
            // Nothing to do.
            None
        }
    }

    fn hour_adjustment(calculated_hours: f64, date: &DateTime<Tz>) -> (u32, DateTime<Tz>) {
        // Adjust the hour to be within 0..=23,
        // wrapping around as needed; otherwise
        // chrono method will panic.
        if calculated_hours < 0.0 {
            ((calculated_hours + 24.0) as u32, date.yesterday())
        } else if calculated_hours >= 24.0 {
            ((calculated_hours - 24.0) as u32, date.tomorrow())
        } else {
            (calculated_hours as u32, date.clone())
        }
    }
}
