// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use std::ops::{Add, Div, Mul, Sub};

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{astronomy::ops, models::rounding::Rounding};

pub trait Normalize {
    fn normalized_to_scale(&self, max: f64) -> f64;
}

impl Normalize for f64 {
    fn normalized_to_scale(&self, max: f64) -> f64 {
        max.mul_add(-(self / max).floor(), *self)
    }
}

/// Convenience methods for the `DateTime` type.
pub trait Stride {
    #[must_use]
    fn tomorrow(&self) -> Self;
    #[must_use]
    fn yesterday(&self) -> Self;
    #[must_use]
    fn julian_day(&self) -> f64;
    #[must_use]
    fn adjust_time(&self, minutes: i64) -> Self;
    #[must_use]
    fn rounded_minute(&self, rounding: Rounding) -> Self;
}

impl<Tz: TimeZone> Stride for DateTime<Tz> {
    /// Returns the date/time for tomorrow.
    fn tomorrow(&self) -> Self {
        let ordinal = self.ordinal() + 1;

        self.with_ordinal(ordinal)
            .or_else(|| self.with_year(self.year() + 1).and_then(|x| x.with_ordinal(1)))
            .unwrap()
    }

    /// Returns the date/time for yesterday.
    fn yesterday(&self) -> Self {
        let ordinal = self.ordinal() - 1;

        self.with_ordinal(ordinal)
            .or_else(|| {
                self.with_year(self.year() - 1)
                    .and_then(|x| x.with_month(12))
                    .and_then(|x| x.with_day(31))
            })
            .unwrap()
    }

    /// Returns the Julian day.
    fn julian_day(&self) -> f64 {
        ops::julian_day(self.year(), self.month() as i32, self.day() as i32, 0.0)
    }

    fn rounded_minute(&self, rounding: Rounding) -> Self {
        let adjusted = self.clone();
        let seconds = adjusted.second();

        match rounding {
            Rounding::Nearest => {
                let rounded = (f64::from(seconds) / 60.0).round() as i64;
                let adjusted_seconds = i64::from(seconds);

                if rounded == 1 {
                    adjusted + Duration::try_seconds(60 - adjusted_seconds).unwrap()
                } else {
                    adjusted + Duration::try_seconds(-adjusted_seconds).unwrap()
                }
            }
            Rounding::Up => {
                let adjusted_seconds = i64::from(seconds);

                adjusted + Duration::try_seconds(60 - adjusted_seconds).unwrap()
            }
            Rounding::None => adjusted,
        }
    }

    fn adjust_time(&self, minutes: i64) -> Self {
        let some_date = self.clone();
        some_date
            .checked_add_signed(Duration::try_seconds(minutes * 60).unwrap())
            .unwrap()
    }
}

#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Angle {
    pub degrees: f64,
}

impl Angle {
    pub const fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    pub fn radians(self) -> f64 {
        self.degrees.to_radians()
    }

    pub fn unwound(self) -> Self {
        Self {
            degrees: self.degrees.normalized_to_scale(360.0),
        }
    }

    pub fn quadrant_shifted(self) -> Self {
        if self.degrees >= -180.0 && self.degrees <= 180.0 {
            // Nothing to do. Already initialized
            // to the default value.
            self
        } else {
            let value = 360.0f64.mul_add(-(self.degrees / 360.0).round(), self.degrees);
            Self { degrees: value }
        }
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            degrees: self.degrees + rhs.degrees,
        }
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            degrees: self.degrees - rhs.degrees,
        }
    }
}

impl Mul for Angle {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            degrees: self.degrees * rhs.degrees,
        }
    }
}

impl Div for Angle {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        assert!(rhs.degrees != 0.0, "Cannot divide by zero.");

        Self {
            degrees: self.degrees / rhs.degrees,
        }
    }
}

/// The latitude, longitude, and elevation associated with a location.
/// Latitude and longitude are specified in degrees; elevation in meters
/// above sea level.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: 0.0,
        }
    }

    #[must_use]
    pub const fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<(f64, f64, f64)> for Coordinates {
    fn from((latitude, longitude, elevation): (f64, f64, f64)) -> Self {
        Self::with_elevation(latitude, longitude, elevation)
    }
}

impl Coordinates {
    #[must_use]
    pub const fn latitude_angle(&self) -> Angle {
        Angle::new(self.latitude)
    }

    #[must_use]
    pub const fn longitude_angle(&self) -> Angle {
        Angle::new(self.longitude)
    }
}
