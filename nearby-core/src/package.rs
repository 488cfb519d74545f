//! Smart package tiers.
//!
//! Each tier maps a day-trip length to a round-trip distance budget. Planners
//! only see the budget in kilometres; the tier naming lives here.
//!
//! # Examples
//! ```
//! use nearby_core::PackageTier;
//!
//! let tier: PackageTier = "8hr".parse().unwrap();
//! assert_eq!(tier.max_km(), 80.0);
//! assert_eq!(tier.label(), "8 Hr / 80 Kms");
//! assert_eq!(PackageTier::default(), PackageTier::FourHours);
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fixed day-trip budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PackageTier {
    /// Four hours, 40 km.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "4hr"))]
    FourHours,
    /// Eight hours, 80 km.
    #[cfg_attr(feature = "serde", serde(rename = "8hr"))]
    EightHours,
    /// Twelve hours, 120 km.
    #[cfg_attr(feature = "serde", serde(rename = "12hr"))]
    TwelveHours,
}

impl PackageTier {
    /// All tiers in display order.
    pub const ALL: [Self; 3] = [Self::FourHours, Self::EightHours, Self::TwelveHours];

    /// Short key used in configuration and URLs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FourHours => "4hr",
            Self::EightHours => "8hr",
            Self::TwelveHours => "12hr",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FourHours => "4 Hr / 40 Kms",
            Self::EightHours => "8 Hr / 80 Kms",
            Self::TwelveHours => "12 Hr / 120 Kms",
        }
    }

    /// Round-trip distance budget in kilometres.
    #[must_use]
    pub const fn max_km(self) -> f64 {
        match self {
            Self::FourHours => 40.0,
            Self::EightHours => 80.0,
            Self::TwelveHours => 120.0,
        }
    }

    /// Trip length in hours.
    #[must_use]
    pub const fn max_hours(self) -> u8 {
        match self {
            Self::FourHours => 4,
            Self::EightHours => 8,
            Self::TwelveHours => 12,
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown package key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown package '{0}'; expected one of 4hr, 8hr, 12hr")]
pub struct PackageTierParseError(pub String);

impl FromStr for PackageTier {
    type Err = PackageTierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PackageTierParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PackageTier::FourHours, 40.0, 4)]
    #[case(PackageTier::EightHours, 80.0, 8)]
    #[case(PackageTier::TwelveHours, 120.0, 12)]
    fn tiers_map_to_budgets(#[case] tier: PackageTier, #[case] km: f64, #[case] hours: u8) {
        assert_eq!(tier.max_km(), km);
        assert_eq!(tier.max_hours(), hours);
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        for tier in PackageTier::ALL {
            assert_eq!(tier.to_string().parse::<PackageTier>(), Ok(tier));
        }
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = "6hr".parse::<PackageTier>().expect_err("6hr is not a tier");
        assert!(err.to_string().contains("unknown package '6hr'"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_key() {
        let json = serde_json::to_string(&PackageTier::TwelveHours).expect("serialise tier");
        assert_eq!(json, "\"12hr\"");
    }
}
