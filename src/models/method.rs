// Salah
//
// See README.md and LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

use super::{
    adjustments::Adjustment,
    midnight_mode::MidnightMode,
    parameters::{Configuration, Parameters},
    rounding::Rounding,
};

/// Closed enumeration of the calculation conventions used by Islamic
/// authorities and organizations around the world. Each variant maps to a
/// fixed parameter tuple via [`Method::parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Muslim World League. Standard Fajr time with an angle of 18°.
    /// Earlier Isha time with an angle of 17°.
    MuslimWorldLeague,

    /// Also known as the ISNA method. Can be used for North America,
    /// but the Moonsighting Committee method is preferable. Gives later
    /// Fajr times and earlier Isha times with angles of 15°.
    NorthAmerica,

    /// Egyptian General Authority of Survey. Early Fajr time using an angle
    /// of 19.5° and a slightly earlier Isha time using an angle of 17.5°.
    Egyptian,

    /// Umm al-Qura University, Makkah. Uses a fixed interval of 90 minutes
    /// from Maghrib to calculate Isha. And a slightly earlier Fajr time with
    /// an angle of 18.5°. Note: add a +30 minute custom adjustment for Isha
    /// during Ramadan.
    UmmAlQura,

    /// Same Isha interval as `UmmAlQura` but with the standard Fajr time
    /// using an angle of 18°.
    Qatar,

    /// Used in the UAE. Slightly earlier Fajr time and slightly later Isha
    /// time with angles of 18.2° for Fajr and Isha in addition to minute
    /// offsets for sunrise, Dhuhr, Asr, and Maghrib.
    Dubai,

    /// Jabatan Kemajuan Islam Malaysia.
    Jakim,

    /// Kementerian Agama Republik Indonesia.
    Kemenag,

    /// Used in Singapore. Early Fajr time with an angle of 20° and standard
    /// Isha time with an angle of 18°.
    Singapore,

    /// Union des Organisations Islamiques de France, 12° variant.
    France12,

    /// Union des Organisations Islamiques de France, 15° variant.
    France15,

    /// Union des Organisations Islamiques de France, 18° variant.
    France18,

    /// An approximation of the Diyanet method used in Turkey. This
    /// approximation is less accurate outside the region of Turkey.
    Turkey,

    /// An approximation of the method used by the Spiritual Administration
    /// of Muslims of Russia.
    Russia,

    /// Method developed by Khalid Shaukat, founder of Moonsighting
    /// Committee Worldwide. Uses standard 18° angles for Fajr and Isha in
    /// addition to seasonal adjustment values. This method automatically
    /// applies the 1/7 rule for locations at or above 55° latitude.
    /// Recommended for North America and the UK.
    MoonsightingCommittee,

    /// Institute of Geophysics, University of Tehran. Early Isha time with
    /// an angle of 14°. Slightly later Fajr time with an angle of 17.7°.
    /// Calculates Maghrib based on the sun reaching an angle of 4.5° below
    /// the horizon, and uses the Jafari midnight convention.
    Tehran,

    /// The Shia Ithna Ashari (Jafari) convention. Calculates Maghrib based
    /// on the sun reaching an angle of 4° below the horizon, and uses the
    /// Jafari midnight convention.
    Jafari,

    /// University of Islamic Sciences, Karachi. A generally applicable
    /// method that uses standard Fajr and Isha angles of 18°.
    Karachi,

    /// Defaults to the Muslim World League's parameters. Intended to be
    /// used as a starting point for a fully custom configuration.
    Custom,
}

impl Method {
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        match self {
            Self::MuslimWorldLeague | Self::Custom => Configuration::new()
                .fajr_angle(18.0)
                .isha_angle(17.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(Adjustment::default().dhuhr(1).build().unwrap())
                .build()
                .unwrap(),

            Self::NorthAmerica => Configuration::new()
                .fajr_angle(15.0)
                .isha_angle(15.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(
                    Adjustment::default()
                        .fajr(-12)
                        .dhuhr(5)
                        .asr(-1)
                        .maghrib(2)
                        .isha(-1)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),

            Self::Egyptian => Configuration::new()
                .fajr_angle(19.5)
                .isha_angle(17.5)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(Adjustment::default().sunrise(0).asr(1).maghrib(-1).build().unwrap())
                .build()
                .unwrap(),

            Self::UmmAlQura => Configuration::new()
                .fajr_angle(18.5)
                .isha_interval(90)
                .maghrib_interval(1)
                .method(*self)
                .build()
                .unwrap(),

            Self::Qatar => Configuration::new()
                .fajr_angle(18.0)
                .isha_interval(90)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(Adjustment::default().fajr(0).maghrib(2).isha(3).build().unwrap())
                .build()
                .unwrap(),

            Self::Dubai => Configuration::new()
                .fajr_angle(18.2)
                .isha_angle(18.2)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(
                    Adjustment::default()
                        .sunrise(-3)
                        .dhuhr(3)
                        .asr(2)
                        .maghrib(3)
                        .isha(1)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),

            Self::Jakim => Configuration::new()
                .fajr_angle(18.0)
                .isha_angle(18.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(Adjustment::default().fajr(1).dhuhr(2).asr(1).isha(1).build().unwrap())
                .build()
                .unwrap(),

            Self::Kemenag => Configuration::new()
                .fajr_angle(20.0)
                .isha_angle(18.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(
                    Adjustment::default()
                        .fajr(2)
                        .sunrise(-4)
                        .dhuhr(3)
                        .asr(2)
                        .maghrib(2)
                        .isha(2)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),

            Self::Singapore => Configuration::new()
                .fajr_angle(20.0)
                .isha_angle(18.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(
                    Adjustment::default()
                        .fajr(1)
                        .sunrise(1)
                        .dhuhr(1)
                        .asr(1)
                        .isha(1)
                        .build()
                        .unwrap(),
                )
                .rounding(Rounding::Up)
                .build()
                .unwrap(),

            Self::France12 => Configuration::new()
                .fajr_angle(12.0)
                .isha_angle(12.0)
                .maghrib_interval(1)
                .method(*self)
                .build()
                .unwrap(),

            Self::France15 => Configuration::new()
                .fajr_angle(15.0)
                .isha_angle(15.0)
                .maghrib_interval(1)
                .method(*self)
                .build()
                .unwrap(),

            Self::France18 => Configuration::new()
                .fajr_angle(18.0)
                .isha_angle(18.0)
                .maghrib_interval(1)
                .method(*self)
                .build()
                .unwrap(),

            Self::Turkey => Configuration::new()
                .fajr_angle(18.0)
                .isha_angle(17.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(
                    Adjustment::default()
                        .sunrise(-7)
                        .dhuhr(5)
                        .asr(6)
                        .maghrib(7)
                        .isha(2)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),

            Self::Russia => Configuration::new()
                .fajr_angle(16.0)
                .isha_angle(15.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(
                    Adjustment::default()
                        .fajr(0)
                        .sunrise(0)
                        .dhuhr(0)
                        .asr(1)
                        .maghrib(-1)
                        .isha(0)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),

            Self::MoonsightingCommittee => Configuration::new()
                .fajr_angle(18.0)
                .isha_angle(18.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(Adjustment::default().dhuhr(5).maghrib(3).build().unwrap())
                .build()
                .unwrap(),

            Self::Tehran => Configuration::new()
                .fajr_angle(17.7)
                .isha_angle(14.0)
                .maghrib_angle(4.5)
                .midnight_mode(MidnightMode::Jafari)
                .method(*self)
                .build()
                .unwrap(),

            Self::Jafari => Configuration::new()
                .fajr_angle(16.0)
                .isha_angle(14.0)
                .maghrib_angle(4.0)
                .midnight_mode(MidnightMode::Jafari)
                .method(*self)
                .build()
                .unwrap(),

            Self::Karachi => Configuration::new()
                .fajr_angle(18.0)
                .isha_angle(18.0)
                .maghrib_interval(1)
                .method(*self)
                .method_adjustments(Adjustment::default().dhuhr(1).build().unwrap())
                .build()
                .unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{isha_rule::IshaRule, maghrib_rule::MaghribRule};

    #[test]
    fn parameters_for_muslim_world_league() {
        let params = Method::MuslimWorldLeague.parameters();

        assert_eq!(params.method, Method::MuslimWorldLeague);
        assert_eq!(params.fajr_angle, 18.0);
        assert_eq!(params.isha, IshaRule::Angle(17.0));
    }

    #[test]
    fn parameters_for_custom_default_to_muslim_world_league() {
        let params = Method::Custom.parameters();

        assert_eq!(params.fajr_angle, 18.0);
        assert_eq!(params.isha, IshaRule::Angle(17.0));
    }

    #[test]
    fn parameters_for_north_america() {
        let params = Method::NorthAmerica.parameters();

        assert_eq!(params.method, Method::NorthAmerica);
        assert_eq!(params.fajr_angle, 15.0);
        assert_eq!(params.isha, IshaRule::Angle(15.0));
        assert_eq!(params.method_adjustments.fajr, -12);
        assert_eq!(params.method_adjustments.isha, -1);
    }

    #[test]
    fn parameters_for_umm_al_qura() {
        let params = Method::UmmAlQura.parameters();

        assert_eq!(params.method, Method::UmmAlQura);
        assert_eq!(params.fajr_angle, 18.5);
        assert_eq!(params.isha, IshaRule::Interval(90));
    }

    #[test]
    fn parameters_for_qatar() {
        let params = Method::Qatar.parameters();

        assert_eq!(params.method, Method::Qatar);
        assert_eq!(params.isha, IshaRule::Interval(90));
        assert_eq!(params.method_adjustments.isha, 3);
    }

    #[test]
    fn parameters_for_dubai() {
        let params = Method::Dubai.parameters();

        assert_eq!(params.method, Method::Dubai);
        assert_eq!(params.fajr_angle, 18.2);
        assert_eq!(params.isha, IshaRule::Angle(18.2));
        assert_eq!(params.method_adjustments.sunrise, -3);
    }

    #[test]
    fn parameters_for_singapore_rounds_up() {
        let params = Method::Singapore.parameters();

        assert_eq!(params.method, Method::Singapore);
        assert_eq!(params.rounding, Rounding::Up);
        assert_eq!(params.method_adjustments.fajr, 1);
    }

    #[test]
    fn parameters_for_tehran_use_jafari_midnight_and_maghrib_angle() {
        let params = Method::Tehran.parameters();

        assert_eq!(params.method, Method::Tehran);
        assert_eq!(params.maghrib, Some(MaghribRule::Angle(4.5)));
        assert_eq!(params.midnight_mode, MidnightMode::Jafari);
    }

    #[test]
    fn parameters_for_jafari_use_jafari_midnight_and_maghrib_angle() {
        let params = Method::Jafari.parameters();

        assert_eq!(params.method, Method::Jafari);
        assert_eq!(params.maghrib, Some(MaghribRule::Angle(4.0)));
        assert_eq!(params.midnight_mode, MidnightMode::Jafari);
    }

    #[test]
    fn parameters_for_karachi() {
        let params = Method::Karachi.parameters();

        assert_eq!(params.method, Method::Karachi);
        assert_eq!(params.fajr_angle, 18.0);
        assert_eq!(params.isha, IshaRule::Angle(18.0));
        assert_eq!(params.method_adjustments.dhuhr, 1);
    }
}
