// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::astronomy::unit::Coordinates;

/// Rule for approximating Fajr and Isha at high latitudes, where the sun
/// never reaches the method's angle below the horizon.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum HighLatitudeRule {
    /// No fallback: a polar condition surfaces as an unresolved error
    /// instead of being approximated.
    None,

    /// Fajr won't be earlier than the midpoint of the night and Isha
    /// won't be later than the midpoint of the night. This is the default
    /// value to prevent Fajr and Isha crossing boundaries.
    #[default]
    NightMiddle,

    /// The night is divided into portions of roughly 1/3. The exact value is
    /// derived by dividing the Fajr/Isha angles by 60.
    ///
    /// This can be used to prevent difficult Fajr and Isha times at certain
    /// locations.
    AngleBased,

    /// Fajr will never be earlier than the beginning of the last seventh of
    /// the night and Isha will never be later than the end of the first
    /// seventh of the night.
    ///
    /// This is recommended for locations above 48° latitude to prevent
    /// prayer times that would be difficult to perform.
    OneSeventh,
}

impl HighLatitudeRule {
    #[must_use]
    pub fn recommended(coordinates: &Coordinates) -> Self {
        if coordinates.latitude > 48.0 {
            Self::OneSeventh
        } else {
            Self::NightMiddle
        }
    }
}
