// Threshold tables and tier resolution
//
// Shared by the hunter tier table, the performance multiplier mappings and
// (client side) the radiation feature gates. Every table is stored ascending
// by threshold. Metrics are never rejected: values below the first threshold
// resolve to the default, values above the last clamp to the top entry.

use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::BountyError,
    state::{PerformanceMultipliers, ThresholdEntry, Tier, TierLevel},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdDirection {
    // metric >= threshold counts as met, highest met threshold wins
    AtLeast,
    // metric <= threshold counts as met, tightest (smallest) met bound wins
    AtMost,
}

// Anything that maps a numeric threshold to a value
pub trait Threshold {
    type Value: Copy;

    fn threshold(&self) -> u64;
    fn value(&self) -> Self::Value;
}

impl Threshold for ThresholdEntry {
    type Value = u16;

    fn threshold(&self) -> u64 {
        self.threshold
    }

    fn value(&self) -> u16 {
        self.multiplier_bps
    }
}

impl<V: Copy> Threshold for (u64, V) {
    type Value = V;

    fn threshold(&self) -> u64 {
        self.0
    }

    fn value(&self) -> V {
        self.1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextTier {
    pub next_threshold: u64,
    pub gap: u64,
}

/// Resolve the value a metric earns in an ascending threshold table.
///
/// Equality counts as met. When no threshold is met `default` is returned.
pub fn resolve_tier<T: Threshold>(
    metric: u64,
    thresholds: &[T],
    direction: ThresholdDirection,
    default: T::Value,
) -> T::Value {
    let hit = match direction {
        ThresholdDirection::AtLeast => thresholds.iter().rev().find(|t| metric >= t.threshold()),
        ThresholdDirection::AtMost => thresholds.iter().find(|t| metric <= t.threshold()),
    };
    hit.map(|t| t.value()).unwrap_or(default)
}

/// Smallest threshold strictly above `metric`, with the distance to it.
///
/// `None` exactly when the metric already satisfies the maximum threshold.
pub fn next_tier<T: Threshold>(metric: u64, thresholds: &[T]) -> Option<NextTier> {
    thresholds
        .iter()
        .map(|t| t.threshold())
        .find(|threshold| *threshold > metric)
        .map(|next_threshold| NextTier {
            next_threshold,
            gap: next_threshold - metric,
        })
}

pub fn resolve_multiplier(metric: u64, entries: &[ThresholdEntry], direction: ThresholdDirection) -> u16 {
    resolve_tier(metric, entries, direction, BPS_DENOMINATOR as u16)
}

// HUNTER TIERS

// All requirements of a tier must hold at the same time
pub fn tier_applies(tier: &Tier, completed_referrals: u64, success_rate_bps: u16) -> bool {
    completed_referrals >= tier.required_referrals as u64
        && success_rate_bps >= tier.required_success_rate_bps
}

/// Highest tier whose requirements are all met, if any.
pub fn resolve_hunter_tier(tiers: &[Tier], completed_referrals: u64, success_rate_bps: u16) -> Option<&Tier> {
    tiers
        .iter()
        .rev()
        .find(|tier| tier_applies(tier, completed_referrals, success_rate_bps))
}

// Falls back to the lowest configured level when nothing applies
pub fn hunter_tier_level(tiers: &[Tier], completed_referrals: u64, success_rate_bps: u16) -> TierLevel {
    resolve_hunter_tier(tiers, completed_referrals, success_rate_bps)
        .or_else(|| tiers.first())
        .map(|tier| tier.level)
        .unwrap_or_default()
}

pub fn hunter_tier_multiplier(tiers: &[Tier], completed_referrals: u64, success_rate_bps: u16) -> u16 {
    resolve_hunter_tier(tiers, completed_referrals, success_rate_bps)
        .map(|tier| tier.reward_multiplier_bps)
        .unwrap_or(BPS_DENOMINATOR as u16)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierGap {
    pub level: TierLevel,
    pub referrals_needed: u64,
    pub success_rate_needed_bps: u16,
}

/// The tier right above the current one and what is still missing to reach it.
pub fn next_hunter_tier(tiers: &[Tier], completed_referrals: u64, success_rate_bps: u16) -> Option<TierGap> {
    let next_index = tiers
        .iter()
        .rposition(|tier| tier_applies(tier, completed_referrals, success_rate_bps))
        .map(|index| index + 1)
        .unwrap_or(0);

    tiers.get(next_index).map(|tier| TierGap {
        level: tier.level,
        referrals_needed: (tier.required_referrals as u64).saturating_sub(completed_referrals),
        success_rate_needed_bps: tier.required_success_rate_bps.saturating_sub(success_rate_bps),
    })
}

// VALIDATION

pub fn validate_tiers(tiers: &[Tier]) -> Result<()> {
    require!(
        !tiers.is_empty() && tiers.len() <= MAX_TIERS,
        BountyError::InvalidTierCount
    );

    for tier in tiers {
        require!(
            tier.required_success_rate_bps as u64 <= BPS_DENOMINATOR,
            BountyError::InvalidSuccessRate
        );
        require!(
            tier.reward_multiplier_bps as u64 >= BPS_DENOMINATOR,
            BountyError::InvalidMultiplier
        );
        require!(
            tier.benefits.len() <= MAX_BENEFITS
                && tier.benefits.iter().all(|b| b.len() <= MAX_BENEFIT_LEN)
                && tier.description.len() <= MAX_TIER_DESCRIPTION_LEN,
            BountyError::TierTextTooLong
        );
    }

    // Ordered requirements keep resolution monotonic
    for pair in tiers.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        require!(
            lower.level < upper.level
                && lower.required_referrals <= upper.required_referrals
                && lower.required_success_rate_bps <= upper.required_success_rate_bps
                && lower.reward_multiplier_bps <= upper.reward_multiplier_bps,
            BountyError::TiersNotOrdered
        );
    }

    Ok(())
}

// An empty mapping is allowed and always resolves to 1.00x.
// Multipliers must never drop as the metric improves: non-decreasing along an
// AtLeast table, non-increasing along an AtMost table.
pub fn validate_thresholds(entries: &[ThresholdEntry], direction: ThresholdDirection) -> Result<()> {
    require!(entries.len() <= MAX_THRESHOLDS, BountyError::InvalidThresholdTable);
    require!(
        entries.iter().all(|e| e.multiplier_bps as u64 >= BPS_DENOMINATOR),
        BountyError::InvalidMultiplier
    );
    require!(
        entries.windows(2).all(|pair| {
            let (lower, upper) = (&pair[0], &pair[1]);
            let monotonic = match direction {
                ThresholdDirection::AtLeast => lower.multiplier_bps <= upper.multiplier_bps,
                ThresholdDirection::AtMost => lower.multiplier_bps >= upper.multiplier_bps,
            };
            lower.threshold < upper.threshold && monotonic
        }),
        BountyError::InvalidThresholdTable
    );
    Ok(())
}

pub fn validate_multipliers(multipliers: &PerformanceMultipliers) -> Result<()> {
    validate_thresholds(&multipliers.success_rate, ThresholdDirection::AtLeast)?;
    validate_thresholds(&multipliers.total_completed, ThresholdDirection::AtLeast)?;
    validate_thresholds(&multipliers.time_to_complete, ThresholdDirection::AtMost)?;
    require!(
        multipliers
            .success_rate
            .iter()
            .all(|e| e.threshold <= BPS_DENOMINATOR),
        BountyError::InvalidSuccessRate
    );
    Ok(())
}
