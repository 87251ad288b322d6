// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Sentinel selecting every top-level branch.
pub const VIEW_ALL: &str = "all";

/// Chooses which part of the hierarchy is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ViewSelector {
    #[default]
    All,
    /// A single top-level branch, matched by exact name (first match wins).
    Branch(String),
}

impl ViewSelector {
    pub fn branch(name: impl Into<String>) -> Self {
        Self::Branch(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for ViewSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(VIEW_ALL),
            Self::Branch(name) => f.write_str(name),
        }
    }
}

impl FromStr for ViewSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for ViewSelector {
    fn from(value: &str) -> Self {
        if value == VIEW_ALL {
            Self::All
        } else {
            Self::Branch(value.to_owned())
        }
    }
}

/// Presentation zoom factor.
///
/// Stored in integer tenths so that stepping by `0.2` is exact and clamping is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zoom {
    tenths: u8,
}

impl Zoom {
    pub const MIN: Self = Self { tenths: 5 };
    pub const MAX: Self = Self { tenths: 20 };
    pub const DEFAULT: Self = Self { tenths: 10 };
    /// One zoom-in/zoom-out step, in tenths.
    pub const STEP_TENTHS: i32 = 2;

    /// Nearest representable zoom for `factor`, clamped into `[0.5, 2.0]`.
    pub fn from_factor(factor: f64) -> Self {
        if !factor.is_finite() {
            return Self::DEFAULT;
        }
        let tenths =
            (factor * 10.0).round().clamp(Self::MIN.tenths.into(), Self::MAX.tenths.into());
        Self { tenths: tenths as u8 }
    }

    pub fn factor(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Offset by `delta_tenths`, clamped into `[0.5, 2.0]`.
    pub fn offset(self, delta_tenths: i32) -> Self {
        let tenths = i32::from(self.tenths)
            .saturating_add(delta_tenths)
            .clamp(Self::MIN.tenths.into(), Self::MAX.tenths.into());
        Self { tenths: tenths as u8 }
    }

    pub fn zoomed_in(self) -> Self {
        self.offset(Self::STEP_TENTHS)
    }

    pub fn zoomed_out(self) -> Self {
        self.offset(-Self::STEP_TENTHS)
    }

    pub fn percent(self) -> u32 {
        u32::from(self.tenths) * 10
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ViewSelector, Zoom};

    #[test]
    fn selector_parses_all_sentinel() {
        assert_eq!(ViewSelector::from("all"), ViewSelector::All);
        assert_eq!(ViewSelector::from("All"), ViewSelector::branch("All"));
        assert_eq!(ViewSelector::branch("Skills").to_string(), "Skills");
    }

    #[test]
    fn zoom_in_six_times_clamps_at_max() {
        let mut zoom = Zoom::default();
        for _ in 0..6 {
            zoom = zoom.zoomed_in();
        }
        assert_eq!(zoom, Zoom::MAX);
        assert_eq!(zoom.factor(), 2.0);
    }

    #[test]
    fn zoom_out_from_min_stays_at_min() {
        assert_eq!(Zoom::MIN.zoomed_out(), Zoom::MIN);
        assert_eq!(Zoom::MIN.factor(), 0.5);
    }

    #[rstest]
    #[case(1.0, 10)]
    #[case(1.2, 12)]
    #[case(0.1, 5)]
    #[case(9.0, 20)]
    #[case(f64::NAN, 10)]
    fn from_factor_rounds_and_clamps(#[case] factor: f64, #[case] tenths: u32) {
        assert_eq!(Zoom::from_factor(factor).percent(), tenths * 10);
    }

    #[rstest]
    #[case(Zoom::MIN, i32::MAX, Zoom::MAX)]
    #[case(Zoom::MAX, i32::MIN, Zoom::MIN)]
    #[case(Zoom::DEFAULT, i32::MIN, Zoom::MIN)]
    fn offset_saturates_at_extreme_deltas(
        #[case] start: Zoom,
        #[case] delta: i32,
        #[case] expected: Zoom,
    ) {
        assert_eq!(start.offset(delta), expected);
    }
}
