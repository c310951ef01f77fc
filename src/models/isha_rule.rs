// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How Isha is reckoned: either a twilight angle below the horizon, or a
/// fixed interval of minutes after sunset (the Umm al-Qura convention).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum IshaRule {
    Angle(f64),
    Interval(i32),
}

impl Default for IshaRule {
    fn default() -> Self {
        Self::Angle(0.0)
    }
}
