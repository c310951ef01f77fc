// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use crate::Prayer;

use super::{
    adjustments::TimeAdjustment, asr_school::AsrSchool, high_altitude_rule::HighLatitudeRule, isha_rule::IshaRule,
    maghrib_rule::MaghribRule, method::Method, midnight_mode::MidnightMode, rounding::Rounding, shafaq::Shafaq,
};

/// Settings that are used for determining the
/// the correct prayer time.
///
/// It is recommended to use [Configuration](struct.Configuration.html) to build
/// the parameters that are needed.
#[derive(Clone, derive_builder::Builder)]
#[builder(name = "Configuration")]
pub struct Parameters {
    pub method: Method,
    pub fajr_angle: f64,
    #[builder(setter(custom))]
    pub isha: IshaRule,
    #[builder(setter(custom))]
    pub maghrib: Option<MaghribRule>,
    pub midnight_mode: MidnightMode,
    pub asr_school: AsrSchool,
    pub high_latitude_rule: HighLatitudeRule,
    pub adjustments: TimeAdjustment,
    pub method_adjustments: TimeAdjustment,
    pub rounding: Rounding,
    pub shafaq: Shafaq,
}

impl Parameters {
    #[must_use]
    pub fn new(fajr_angle: f64, isha_angle: f64) -> Self {
        Self {
            fajr_angle,
            isha: IshaRule::Angle(isha_angle),
            maghrib: None,
            method: Method::Custom,
            midnight_mode: MidnightMode::Standard,
            asr_school: AsrSchool::Standard,
            high_latitude_rule: HighLatitudeRule::NightMiddle,
            adjustments: TimeAdjustment::default(),
            method_adjustments: TimeAdjustment::default(),
            rounding: Rounding::Nearest,
            shafaq: Shafaq::General,
        }
    }

    #[must_use]
    pub fn isha_angle(&self) -> f64 {
        match self.isha {
            IshaRule::Angle(angle) => angle,
            IshaRule::Interval(_) => 0.0,
        }
    }

    /// Portions of the night consumed by the Fajr/Isha high-latitude
    /// fallback, or `None` when `high_latitude_rule` is `HighLatitudeRule::None`
    /// and a polar condition must surface as an unresolved error instead.
    #[must_use]
    pub fn night_portions(&self) -> Option<(f64, f64)> {
        match self.high_latitude_rule {
            HighLatitudeRule::None => Option::None,
            HighLatitudeRule::NightMiddle => Some((1.0 / 2.0, 1.0 / 2.0)),
            HighLatitudeRule::OneSeventh => Some((1.0 / 7.0, 1.0 / 7.0)),
            HighLatitudeRule::AngleBased => Some((self.fajr_angle / 60.0, self.isha_angle() / 60.0)),
        }
    }

    #[must_use]
    pub const fn time_adjustments(&self, prayer: Prayer) -> i64 {
        match prayer {
            Prayer::Fajr => self.adjustments.fajr + self.method_adjustments.fajr,
            Prayer::Sunrise => self.adjustments.sunrise + self.method_adjustments.sunrise,
            Prayer::Dhuhr => self.adjustments.dhuhr + self.method_adjustments.dhuhr,
            Prayer::Asr => self.adjustments.asr + self.method_adjustments.asr,
            Prayer::Maghrib => self.adjustments.maghrib + self.method_adjustments.maghrib,
            Prayer::Isha => self.adjustments.isha + self.method_adjustments.isha,
        }
    }
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fajr_angle: Some(0.0),
            isha: Some(IshaRule::Angle(0.0)),
            maghrib: Some(None),
            method: Some(Method::Custom),
            midnight_mode: Some(MidnightMode::Standard),
            asr_school: Some(AsrSchool::Standard),
            high_latitude_rule: Some(HighLatitudeRule::NightMiddle),
            adjustments: Some(TimeAdjustment::default()),
            method_adjustments: Some(TimeAdjustment::default()),
            rounding: Some(Rounding::Nearest),
            shafaq: Some(Shafaq::General),
        }
    }

    /// Convenience constructor: a method's default parameters, with the
    /// Asr school overridden.
    #[must_use]
    pub fn with(method: Method, asr_school: AsrSchool) -> Parameters {
        let mut parameters = method.parameters();
        parameters.asr_school = asr_school;

        parameters
    }

    pub fn isha_angle(&mut self, angle: f64) -> &mut Self {
        self.isha = Some(IshaRule::Angle(angle));
        self
    }

    pub fn isha_interval(&mut self, minutes: i32) -> &mut Self {
        self.isha = Some(IshaRule::Interval(minutes));
        self
    }

    pub fn maghrib_angle(&mut self, angle: f64) -> &mut Self {
        self.maghrib = Some(Some(MaghribRule::Angle(angle)));
        self
    }

    pub fn maghrib_interval(&mut self, minutes: i32) -> &mut Self {
        self.maghrib = Some(Some(MaghribRule::Interval(minutes)));
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn calculate_parameters_with_fajr_and_isha_angles() {
        let params = Configuration::new().fajr_angle(18.0).isha_angle(18.0).build().unwrap();

        assert_approx_eq!(f64, params.fajr_angle, 18.0, epsilon = 0.000_000_1);
        assert_approx_eq!(f64, params.isha_angle(), 18.0, epsilon = 0.000_000_1);
        assert_eq!(params.isha, IshaRule::Angle(18.0));
    }

    #[test]
    fn calculated_night_portions_middle_of_the_night() {
        let params = Configuration::new().fajr_angle(18.0).isha_angle(18.0).build().unwrap();

        let (fajr_portion, isha_portion) = params.night_portions().unwrap();
        assert_approx_eq!(f64, fajr_portion, 1.0 / 2.0, epsilon = 0.000_000_1);
        assert_approx_eq!(f64, isha_portion, 1.0 / 2.0, epsilon = 0.000_000_1);
    }

    #[test]
    fn calculated_night_portions_seventh_of_the_night() {
        let params = Configuration::new()
            .fajr_angle(18.0)
            .isha_angle(18.0)
            .high_latitude_rule(HighLatitudeRule::OneSeventh)
            .build()
            .unwrap();

        let (fajr_portion, isha_portion) = params.night_portions().unwrap();
        assert_approx_eq!(f64, fajr_portion, 1.0 / 7.0, epsilon = 0.000_000_1);
        assert_approx_eq!(f64, isha_portion, 1.0 / 7.0, epsilon = 0.000_000_1);
    }

    #[test]
    fn calculated_night_portions_twilight_angle() {
        let params = Configuration::new()
            .fajr_angle(10.0)
            .isha_angle(15.0)
            .high_latitude_rule(HighLatitudeRule::AngleBased)
            .build()
            .unwrap();

        let (fajr_portion, isha_portion) = params.night_portions().unwrap();
        assert_approx_eq!(f64, fajr_portion, 10.0 / 60.0, epsilon = 0.000_000_1);
        assert_approx_eq!(f64, isha_portion, 15.0 / 60.0, epsilon = 0.000_000_1);
    }

    #[test]
    fn night_portions_none_rule_yields_no_fallback() {
        let params = Configuration::new()
            .fajr_angle(18.0)
            .isha_angle(18.0)
            .high_latitude_rule(HighLatitudeRule::None)
            .build()
            .unwrap();

        assert!(params.night_portions().is_none());
    }

    #[test]
    fn parameters_using_method_and_asr_school() {
        let params = Configuration::new()
            .method(Method::NorthAmerica)
            .asr_school(AsrSchool::Hanafi)
            .build()
            .unwrap();

        assert_eq!(params.method, Method::NorthAmerica);
        assert_eq!(params.asr_school, AsrSchool::Hanafi);
    }

    #[test]
    fn configuration_with_convenience_constructor() {
        let params = Configuration::with(Method::UmmAlQura, AsrSchool::Hanafi);

        assert_eq!(params.method, Method::UmmAlQura);
        assert_eq!(params.isha, IshaRule::Interval(90));
        assert_eq!(params.asr_school, AsrSchool::Hanafi);
    }
}
