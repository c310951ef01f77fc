// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the night is bounded for Sunnah-time derivations: from sunset to
/// sunrise (`Standard`), or from Maghrib to Fajr (`Jafari`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum MidnightMode {
    #[default]
    Standard,
    Jafari,
}
