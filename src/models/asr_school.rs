// Salah
//
// See LICENSE for more details.
// Copyright (c) 2019-2022 Farhan Ahmed. All rights reserved.
//

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Setting for the Asr prayer time. For the Hanafi school, Asr is
/// reckoned later than the Standard school.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum AsrSchool {
    #[default]
    Standard = 1,
    Hanafi = 2,
}

impl AsrSchool {
    #[must_use]
    pub const fn shadow(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_shadow() {
        assert_eq!(AsrSchool::Standard.shadow(), 1);
    }

    #[test]
    fn hanafi_shadow() {
        assert_eq!(AsrSchool::Hanafi.shadow(), 2);
    }
}
