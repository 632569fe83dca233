//! Risk tier classification.
//!
//! A pure threshold map from the numeric score to one of three ordinal
//! tiers. The enum derives `Ord` with `Low < Moderate < High`, which is what
//! makes the monotonicity property testable at the type level.

use crate::engine::thresholds::{HIGH_TIER_CUTOFF, MODERATE_TIER_CUTOFF};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Engagement risk tier derived from the numeric score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Classify a score, thresholds inclusive on the lower bound of each tier.
    pub fn from_score(score: i64) -> Self {
        if score >= HIGH_TIER_CUTOFF {
            RiskTier::High
        } else if score >= MODERATE_TIER_CUTOFF {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    /// Whether records in this tier belong in the practice report's alert feed.
    pub fn is_alertable(&self) -> bool {
        matches!(self, RiskTier::Moderate | RiskTier::High)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoffs_are_inclusive_on_the_lower_bound() {
        assert_eq!(RiskTier::from_score(100), RiskTier::High);
        assert_eq!(RiskTier::from_score(70), RiskTier::High);
        assert_eq!(RiskTier::from_score(69), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(40), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(39), RiskTier::Low);
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
    }

    #[test]
    fn tiers_order_low_to_high() {
        assert!(RiskTier::Low < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::High);
    }

    #[test]
    fn only_moderate_and_high_are_alertable() {
        assert!(!RiskTier::Low.is_alertable());
        assert!(RiskTier::Moderate.is_alertable());
        assert!(RiskTier::High.is_alertable());
    }
}
