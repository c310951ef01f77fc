// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! # Prayer Schedule
//!
//! This module provides the main objects that are used for calculating
//! the prayer times.

use chrono::{DateTime, Datelike, Duration, TimeZone};

use crate::{
    astronomy::{
        ops,
        solar::SolarTime,
        unit::{Angle, Coordinates, Stride},
    },
    error::{CalculationError, Warning},
    models::{
        high_altitude_rule::HighLatitudeRule, isha_rule::IshaRule, maghrib_rule::MaghribRule, method::Method,
        parameters::Parameters, prayer::Prayer,
    },
    validate,
};

/// Name of the fallback rule substituted in for the raw angle-based
/// result, used in `Warning::FallbackApplied`.
const fn high_latitude_rule_name(rule: HighLatitudeRule) -> &'static str {
    match rule {
        HighLatitudeRule::None => "none",
        HighLatitudeRule::NightMiddle => "night-middle",
        HighLatitudeRule::OneSeventh => "night-one-seventh",
        HighLatitudeRule::AngleBased => "angle-based-night-portion",
    }
}

/// The six UTC instants for a single day's prayers, at whole-minute
/// precision.
#[derive(Clone)]
pub struct PrayerTimes<Tz: TimeZone> {
    fajr: DateTime<Tz>,
    sunrise: DateTime<Tz>,
    dhuhr: DateTime<Tz>,
    asr: DateTime<Tz>,
    maghrib: DateTime<Tz>,
    isha: DateTime<Tz>,
}

impl<Tz: TimeZone> PrayerTimes<Tz> {
    fn new(
        date: &DateTime<Tz>,
        coordinates: Coordinates,
        parameters: &Parameters,
    ) -> Result<(Self, Vec<Warning>), CalculationError> {
        let tomorrow = date.tomorrow();
        let solar_time = SolarTime::new(date, coordinates);
        let solar_time_tomorrow = SolarTime::new(&tomorrow, coordinates);
        let night = solar_time_tomorrow.sunrise.signed_duration_since(&solar_time.sunset);
        let mut warnings = Vec::new();

        let sunrise = solar_time
            .sunrise
            .adjust_time(parameters.time_adjustments(Prayer::Sunrise))
            .rounded_minute(parameters.rounding);
        let dhuhr = solar_time
            .transit
            .adjust_time(parameters.time_adjustments(Prayer::Dhuhr))
            .rounded_minute(parameters.rounding);
        let fajr = Self::calculate_fajr(parameters, &solar_time, night, coordinates, date, &mut warnings)?
            .rounded_minute(parameters.rounding);
        let asr = Self::calculate_asr(parameters, &solar_time)?.rounded_minute(parameters.rounding);
        let maghrib = Self::calculate_maghrib(parameters, &solar_time)?.rounded_minute(parameters.rounding);
        let isha = Self::calculate_isha(parameters, &solar_time, night, coordinates, date, &mut warnings)?
            .rounded_minute(parameters.rounding);

        Ok((
            Self {
                fajr,
                sunrise,
                dhuhr,
                asr,
                maghrib,
                isha,
            },
            warnings,
        ))
    }

    #[must_use]
    pub fn fajr(&self) -> DateTime<Tz> {
        self.fajr.clone()
    }

    #[must_use]
    pub fn sunrise(&self) -> DateTime<Tz> {
        self.sunrise.clone()
    }

    #[must_use]
    pub fn dhuhr(&self) -> DateTime<Tz> {
        self.dhuhr.clone()
    }

    #[must_use]
    pub fn asr(&self) -> DateTime<Tz> {
        self.asr.clone()
    }

    #[must_use]
    pub fn maghrib(&self) -> DateTime<Tz> {
        self.maghrib.clone()
    }

    #[must_use]
    pub fn isha(&self) -> DateTime<Tz> {
        self.isha.clone()
    }

    #[must_use]
    pub fn time(&self, prayer: Prayer) -> DateTime<Tz> {
        match prayer {
            Prayer::Fajr => self.fajr.clone(),
            Prayer::Sunrise => self.sunrise.clone(),
            Prayer::Dhuhr => self.dhuhr.clone(),
            Prayer::Asr => self.asr.clone(),
            Prayer::Maghrib => self.maghrib.clone(),
            Prayer::Isha => self.isha.clone(),
        }
    }

    /// Fajr is the sun crossing `-fajr_angle` before transit, clamped so it
    /// is never earlier than the high-latitude-rule's safe boundary. Under
    /// Moonsighting Committee at `|latitude| >= 55`, the angle is bypassed
    /// entirely in favor of the night/7 rule; at any latitude it is bounded
    /// by the season-adjusted morning twilight formula.
    fn calculate_fajr(
        parameters: &Parameters,
        solar_time: &SolarTime<Tz>,
        night: Duration,
        coordinates: Coordinates,
        prayer_date: &DateTime<Tz>,
        warnings: &mut Vec<Warning>,
    ) -> Result<DateTime<Tz>, CalculationError> {
        let moonsighting = parameters.method == Method::MoonsightingCommittee;
        let moonsighting_high_latitude = moonsighting && coordinates.latitude.abs() >= 55.0;

        let candidate = if moonsighting_high_latitude {
            let night_fraction = night.num_seconds() / 7;
            Some(
                solar_time
                    .sunrise
                    .clone()
                    .checked_add_signed(Duration::try_seconds(-night_fraction).unwrap())
                    .unwrap(),
            )
        } else {
            solar_time.time_for_solar_angle(Angle::new(-parameters.fajr_angle), false)
        };

        let fallback_rule = if moonsighting {
            "moonsighting-seasonal-twilight"
        } else {
            high_latitude_rule_name(parameters.high_latitude_rule)
        };

        let safe_fajr = if moonsighting {
            let day_of_year = prayer_date.ordinal();

            Some(ops::season_adjusted_morning_twilight(
                coordinates.latitude,
                day_of_year,
                prayer_date.year() as u32,
                &solar_time.sunrise,
            ))
        } else {
            parameters.night_portions().map(|(fajr_portion, _)| {
                let night_fraction = fajr_portion * (night.num_seconds() as f64);

                solar_time
                    .sunrise
                    .clone()
                    .checked_add_signed(Duration::try_seconds(-night_fraction as i64).unwrap())
                    .unwrap()
            })
        };

        if moonsighting_high_latitude {
            warnings.push(Warning::FallbackApplied {
                prayer: Prayer::Fajr,
                rule: "moonsighting-night-seventh",
            });
        }

        let resolved = match (candidate, safe_fajr) {
            (Some(candidate), Some(safe)) if candidate < safe => {
                if !moonsighting_high_latitude {
                    warnings.push(Warning::FallbackApplied {
                        prayer: Prayer::Fajr,
                        rule: fallback_rule,
                    });
                }
                safe
            }
            (Some(candidate), _) => candidate,
            (None, Some(safe)) => {
                warnings.push(Warning::FallbackApplied {
                    prayer: Prayer::Fajr,
                    rule: fallback_rule,
                });
                safe
            }
            (None, None) => return Err(CalculationError::PolarUnresolved { prayer: Prayer::Fajr }),
        };

        Ok(resolved.adjust_time(parameters.time_adjustments(Prayer::Fajr)))
    }

    /// Isha under `IshaRule::Interval` is a fixed offset from sunset (not
    /// Maghrib, matching the Umm al-Qura/Qatar 90-minute convention).
    /// Under `IshaRule::Angle` the same Moonsighting/high-latitude
    /// machinery as Fajr applies, mirrored around sunset.
    fn calculate_isha(
        parameters: &Parameters,
        solar_time: &SolarTime<Tz>,
        night: Duration,
        coordinates: Coordinates,
        prayer_date: &DateTime<Tz>,
        warnings: &mut Vec<Warning>,
    ) -> Result<DateTime<Tz>, CalculationError> {
        let isha = match parameters.isha {
            IshaRule::Interval(minutes) => solar_time
                .sunset
                .clone()
                .checked_add_signed(Duration::try_seconds(i64::from(minutes) * 60).unwrap())
                .unwrap(),

            IshaRule::Angle(angle) => {
                let moonsighting = parameters.method == Method::MoonsightingCommittee;
                let moonsighting_high_latitude = moonsighting && coordinates.latitude.abs() >= 55.0;
                let fallback_rule = if moonsighting {
                    "moonsighting-seasonal-twilight"
                } else {
                    high_latitude_rule_name(parameters.high_latitude_rule)
                };

                let candidate = if moonsighting_high_latitude {
                    let night_fraction = night.num_seconds() / 7;
                    Some(
                        solar_time
                            .sunset
                            .clone()
                            .checked_add_signed(Duration::try_seconds(night_fraction).unwrap())
                            .unwrap(),
                    )
                } else {
                    solar_time.time_for_solar_angle(Angle::new(-angle), true)
                };

                let safe_isha = if moonsighting {
                    let day_of_year = prayer_date.ordinal();

                    Some(ops::season_adjusted_evening_twilight(
                        coordinates.latitude,
                        day_of_year,
                        prayer_date.year() as u32,
                        &solar_time.sunset,
                        parameters.shafaq,
                    ))
                } else {
                    parameters.night_portions().map(|(_, isha_portion)| {
                        let night_fraction = isha_portion * (night.num_seconds() as f64);

                        solar_time
                            .sunset
                            .clone()
                            .checked_add_signed(Duration::try_seconds(night_fraction as i64).unwrap())
                            .unwrap()
                    })
                };

                if moonsighting_high_latitude {
                    warnings.push(Warning::FallbackApplied {
                        prayer: Prayer::Isha,
                        rule: "moonsighting-night-seventh",
                    });
                }

                match (candidate, safe_isha) {
                    (Some(candidate), Some(safe)) if candidate > safe => {
                        if !moonsighting_high_latitude {
                            warnings.push(Warning::FallbackApplied {
                                prayer: Prayer::Isha,
                                rule: fallback_rule,
                            });
                        }
                        safe
                    }
                    (Some(candidate), _) => candidate,
                    (None, Some(safe)) => {
                        warnings.push(Warning::FallbackApplied {
                            prayer: Prayer::Isha,
                            rule: fallback_rule,
                        });
                        safe
                    }
                    (None, None) => return Err(CalculationError::PolarUnresolved { prayer: Prayer::Isha }),
                }
            }
        };

        Ok(isha.adjust_time(parameters.time_adjustments(Prayer::Isha)))
    }

    fn calculate_asr(parameters: &Parameters, solar_time: &SolarTime<Tz>) -> Result<DateTime<Tz>, CalculationError> {
        let shadow_length = f64::from(parameters.asr_school.shadow());
        let asr = solar_time
            .afternoon(shadow_length)
            .ok_or(CalculationError::PolarUnresolved { prayer: Prayer::Asr })?;

        Ok(asr.adjust_time(parameters.time_adjustments(Prayer::Asr)))
    }

    fn calculate_maghrib(
        parameters: &Parameters,
        solar_time: &SolarTime<Tz>,
    ) -> Result<DateTime<Tz>, CalculationError> {
        let maghrib = match parameters.maghrib {
            None => solar_time.sunset.clone(),
            Some(MaghribRule::Interval(minutes)) => solar_time
                .sunset
                .clone()
                .checked_add_signed(Duration::try_seconds(i64::from(minutes) * 60).unwrap())
                .unwrap(),
            Some(MaghribRule::Angle(angle)) => solar_time
                .time_for_solar_angle(Angle::new(-angle), true)
                .ok_or(CalculationError::PolarUnresolved { prayer: Prayer::Maghrib })?,
        };

        Ok(maghrib.adjust_time(parameters.time_adjustments(Prayer::Maghrib)))
    }
}

fn validate_coordinates(coordinates: Coordinates) -> Result<(), CalculationError> {
    if !(-90.0..=90.0).contains(&coordinates.latitude) {
        return Err(CalculationError::InvalidInput {
            field: "latitude",
            reason: "must be within [-90, 90]".to_string(),
        });
    }

    if !(-180.0..=180.0).contains(&coordinates.longitude) {
        return Err(CalculationError::InvalidInput {
            field: "longitude",
            reason: "must be within [-180, 180]".to_string(),
        });
    }

    if !(-500.0..=10_000.0).contains(&coordinates.elevation) {
        return Err(CalculationError::InvalidInput {
            field: "elevation",
            reason: "must be within [-500, 10000] meters".to_string(),
        });
    }

    Ok(())
}

/// A builder for the [`PrayerTimes`](struct.PrayerTimes.html) struct.
pub struct PrayerSchedule<Tz: TimeZone> {
    date: Option<DateTime<Tz>>,
    coordinates: Option<Coordinates>,
    params: Option<Parameters>,
}

impl<Tz: TimeZone> Default for PrayerSchedule<Tz> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> PrayerSchedule<Tz> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            date: None,
            coordinates: None,
            params: None,
        }
    }

    pub fn with_date(&mut self, date: &DateTime<Tz>) -> &mut Self {
        self.date = Some(date.clone());
        self
    }

    pub fn with_coordinates(&mut self, location: Coordinates) -> &mut Self {
        self.coordinates = Some(location);
        self
    }

    pub fn with_parameters(&mut self, params: Parameters) -> &mut Self {
        self.params = Some(params);
        self
    }

    fn build(&self) -> Result<(PrayerTimes<Tz>, Vec<Warning>), CalculationError> {
        let (date, coordinates, params) = match (&self.date, self.coordinates, &self.params) {
            (Some(date), Some(coordinates), Some(params)) => (date, coordinates, params),
            (date, coordinates, params) => {
                return Err(CalculationError::InvalidInput {
                    field: "schedule",
                    reason: format!(
                        "date, coordinates, and parameters are all required (missing: {})",
                        [
                            (date.is_none(), "date"),
                            (coordinates.is_none(), "coordinates"),
                            (params.is_none(), "parameters"),
                        ]
                        .into_iter()
                        .filter_map(|(missing, name)| missing.then_some(name))
                        .collect::<Vec<_>>()
                        .join(", ")
                    ),
                })
            }
        };

        validate_coordinates(coordinates)?;
        PrayerTimes::new(date, coordinates, params)
    }

    /// Calculates the day's prayer times, or a [`CalculationError`] if a
    /// required field is missing, an input is out of range, or a polar
    /// condition could not be resolved.
    pub fn calculate(&self) -> Result<PrayerTimes<Tz>, CalculationError> {
        self.build().map(|(times, _)| times)
    }

    /// Like [`calculate`](Self::calculate), but also runs the post-calculation
    /// validator and returns any warnings alongside the result, merged with
    /// the fallback warnings raised while deriving Fajr/Isha.
    pub fn calculate_with_warnings(&self) -> Result<(PrayerTimes<Tz>, Vec<Warning>), CalculationError> {
        let (times, mut warnings) = self.build()?;
        let coordinates = self.coordinates.expect("build() already validated coordinates");
        warnings.extend(validate::validate(&times, &coordinates));

        Ok((times, warnings))
    }
}
