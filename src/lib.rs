// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

//! An astronomical prayer-time calculation core, implementing the Jean
//! Meeus solar-position formulas used by Islamic calculation authorities
//! around the world.
//!
//! ##### Example
//!
//! ```
//! use waqt::prelude::*;
//!
//! let new_york_city = Coordinates::new(40.7128, -74.0059);
//! let date          = Utc.with_ymd_and_hms(2019, 1, 25, 0, 0, 0).unwrap();
//! let params        = Configuration::with(Method::NorthAmerica, AsrSchool::Hanafi);
//! let prayers       = PrayerSchedule::new()
//!                       .with_date(&date)
//!                       .with_coordinates(new_york_city)
//!                       .with_parameters(params)
//!                       .calculate();
//! ```

#![warn(clippy::pedantic, clippy::nursery)]

mod astronomy;
mod error;
mod models;
mod schedule;
mod sunnah;
mod validate;

pub use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Timelike, Utc};

pub use crate::{
    astronomy::unit::{Angle, Coordinates, Stride},
    error::{CalculationError, Warning},
    models::{
        adjustments::{Adjustment, TimeAdjustment},
        asr_school::AsrSchool,
        high_altitude_rule::HighLatitudeRule,
        isha_rule::IshaRule,
        maghrib_rule::MaghribRule,
        method::Method,
        midnight_mode::MidnightMode,
        parameters::{Configuration, Parameters},
        prayer::Prayer,
        rounding::Rounding,
        shafaq::Shafaq,
    },
    schedule::{PrayerSchedule, PrayerTimes},
    sunnah::SunnahTimes,
    validate::validate,
};

/// A convenience module appropriate for glob imports (`use waqt::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Timelike, Utc};

    #[doc(no_inline)]
    pub use crate::astronomy::unit::{Angle, Coordinates, Stride};
    #[doc(no_inline)]
    pub use crate::error::{CalculationError, Warning};
    #[doc(no_inline)]
    pub use crate::models::adjustments::{Adjustment, TimeAdjustment};
    #[doc(no_inline)]
    pub use crate::models::asr_school::AsrSchool;
    #[doc(no_inline)]
    pub use crate::models::high_altitude_rule::HighLatitudeRule;
    #[doc(no_inline)]
    pub use crate::models::isha_rule::IshaRule;
    #[doc(no_inline)]
    pub use crate::models::maghrib_rule::MaghribRule;
    #[doc(no_inline)]
    pub use crate::models::method::Method;
    #[doc(no_inline)]
    pub use crate::models::midnight_mode::MidnightMode;
    #[doc(no_inline)]
    pub use crate::models::parameters::{Configuration, Parameters};
    #[doc(no_inline)]
    pub use crate::models::prayer::Prayer;
    #[doc(no_inline)]
    pub use crate::models::rounding::Rounding;
    #[doc(no_inline)]
    pub use crate::models::shafaq::Shafaq;
    #[doc(no_inline)]
    pub use crate::schedule::{PrayerSchedule, PrayerTimes};
    #[doc(no_inline)]
    pub use crate::sunnah::SunnahTimes;
    #[doc(no_inline)]
    pub use crate::validate::validate;
}
