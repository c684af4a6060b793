//! Radiation level and feature unlocks
//!
//! Radiation falls from 100 to 0 as the membership grows. Each feature has a
//! gate; it is unlocked once radiation is at or below that gate.

use referral_bounty::tiers::{resolve_tier, ThresholdDirection};
use serde::Serialize;

pub const MAX_RADIATION: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Economic,
    Social,
    Governance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureUnlock {
    pub radiation_level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub category: FeatureCategory,
    pub unlocked: bool,
}

struct FeatureGate {
    radiation_level: u8,
    name: &'static str,
    description: &'static str,
    category: FeatureCategory,
}

// Ascending by radiation_level
const FEATURE_GATES: [FeatureGate; 9] = [
    FeatureGate {
        radiation_level: 0,
        name: "Full Decentralization",
        description: "Treasury control passes entirely to token holders",
        category: FeatureCategory::Governance,
    },
    FeatureGate {
        radiation_level: 10,
        name: "Revenue Distributions",
        description: "Profits from acquired businesses flow back to members",
        category: FeatureCategory::Economic,
    },
    FeatureGate {
        radiation_level: 25,
        name: "Acquisition Crowdfunds",
        description: "Pool funds to acquire businesses together",
        category: FeatureCategory::Economic,
    },
    FeatureGate {
        radiation_level: 40,
        name: "Treasury Voting",
        description: "Vote on how the DAO treasury is spent",
        category: FeatureCategory::Governance,
    },
    FeatureGate {
        radiation_level: 50,
        name: "Resistance Network",
        description: "Member directory and direct messaging",
        category: FeatureCategory::Social,
    },
    FeatureGate {
        radiation_level: 60,
        name: "Bounty Hunter Tiers",
        description: "Performance tiers with boosted referral rewards",
        category: FeatureCategory::Economic,
    },
    FeatureGate {
        radiation_level: 75,
        name: "Proposal Creation",
        description: "Members can submit governance proposals",
        category: FeatureCategory::Governance,
    },
    FeatureGate {
        radiation_level: 90,
        name: "Referral Bounties",
        description: "Earn rewards for bringing in new members",
        category: FeatureCategory::Economic,
    },
    FeatureGate {
        radiation_level: 100,
        name: "Membership NFTs",
        description: "Mint a membership NFT to join the resistance",
        category: FeatureCategory::Social,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockState {
    /// Every feature, ascending by radiation_level
    pub features: Vec<FeatureUnlock>,
    /// The feature that unlocks next as radiation falls
    pub next_locked: Option<FeatureUnlock>,
}

impl UnlockState {
    pub fn unlocked(&self) -> impl Iterator<Item = &FeatureUnlock> {
        self.features.iter().filter(|feature| feature.unlocked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked().count()
    }
}

/// Unlock state for `current_radiation`. Values above 100 clamp to 100.
pub fn derive_unlocks(current_radiation: u8) -> UnlockState {
    let current = current_radiation.min(MAX_RADIATION) as u64;

    let gates: Vec<(u64, Option<usize>)> = FEATURE_GATES
        .iter()
        .enumerate()
        .map(|(index, gate)| (gate.radiation_level as u64, Some(index)))
        .collect();
    // Tightest gate still at or above the current level; every gate from there up is open
    let first_unlocked = resolve_tier(current, &gates, ThresholdDirection::AtMost, None)
        .unwrap_or(FEATURE_GATES.len());

    let features: Vec<FeatureUnlock> = FEATURE_GATES
        .iter()
        .enumerate()
        .map(|(index, gate)| FeatureUnlock {
            radiation_level: gate.radiation_level,
            name: gate.name,
            description: gate.description,
            category: gate.category,
            unlocked: index >= first_unlocked,
        })
        .collect();

    let next_locked = first_unlocked
        .checked_sub(1)
        .and_then(|index| features.get(index).copied());

    UnlockState { features, next_locked }
}

/// Radiation for `holder_count` NFT holders: 100 with no holders, 0 once
/// `holders_for_zero` is reached.
pub fn radiation_from_holders(holder_count: u64, holders_for_zero: u64) -> u8 {
    if holders_for_zero == 0 {
        return 0;
    }
    let cleared = (holder_count as u128 * MAX_RADIATION as u128 / holders_for_zero as u128)
        .min(MAX_RADIATION as u128) as u8;
    MAX_RADIATION - cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(state: &UnlockState, level: u8) -> FeatureUnlock {
        *state
            .features
            .iter()
            .find(|f| f.radiation_level == level)
            .unwrap()
    }

    #[test]
    fn full_radiation_only_unlocks_level_100() {
        let state = derive_unlocks(100);
        for f in &state.features {
            assert_eq!(f.unlocked, f.radiation_level == 100, "{}", f.name);
        }
        assert_eq!(state.next_locked.map(|f| f.radiation_level), Some(90));
    }

    #[test]
    fn zero_radiation_unlocks_everything() {
        let state = derive_unlocks(0);
        assert!(state.features.iter().all(|f| f.unlocked));
        assert_eq!(state.next_locked, None);
    }

    #[test]
    fn radiation_76_locks_75_and_unlocks_90() {
        let state = derive_unlocks(76);
        assert!(!feature(&state, 75).unlocked);
        assert!(feature(&state, 90).unlocked);
        assert_eq!(state.next_locked.map(|f| f.radiation_level), Some(75));
    }

    #[test]
    fn gate_is_inclusive() {
        assert!(feature(&derive_unlocks(75), 75).unlocked);
    }

    #[test]
    fn above_100_clamps() {
        assert_eq!(derive_unlocks(250), derive_unlocks(100));
    }

    #[test]
    fn unlocks_grow_as_radiation_falls() {
        let mut previous = 0;
        for level in (0..=100u8).rev() {
            let state = derive_unlocks(level);
            assert!(state.unlocked_count() >= previous);
            assert_eq!(derive_unlocks(level), state);
            previous = state.unlocked_count();
        }
    }

    #[test]
    fn next_locked_is_highest_locked_gate() {
        for level in 0..=100u8 {
            let state = derive_unlocks(level);
            let expected = state
                .features
                .iter()
                .filter(|f| !f.unlocked)
                .max_by_key(|f| f.radiation_level)
                .copied();
            assert_eq!(state.next_locked, expected);
        }
    }

    #[test]
    fn holders_drive_radiation_down() {
        assert_eq!(radiation_from_holders(0, 1_000), 100);
        assert_eq!(radiation_from_holders(240, 1_000), 76);
        assert_eq!(radiation_from_holders(1_000, 1_000), 0);
        assert_eq!(radiation_from_holders(5_000, 1_000), 0);
        assert_eq!(radiation_from_holders(7, 0), 0);
    }
}
