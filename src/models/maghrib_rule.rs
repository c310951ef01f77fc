// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How Maghrib is reckoned when it differs from plain sunset: either a
/// twilight angle below the horizon (the Shia convention), or a fixed
/// interval of minutes after sunset. `None` in `Parameters::maghrib` means
/// Maghrib equals sunset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum MaghribRule {
    Angle(f64),
    Interval(i32),
}
