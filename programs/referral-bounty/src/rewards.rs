// Reward calculation
//
// Monetary amounts are token base units (u64) and multipliers are basis
// points, so payouts are exact integers no matter how many referrals a bounty
// pays. The product is taken in u128 and divided once at the end.

use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::BountyError,
    state::{PerformanceMultipliers, Tier},
    tiers::{hunter_tier_multiplier, resolve_multiplier, ThresholdDirection},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    // Amount committed against the bounty budget
    pub amount: u64,
    // The multiplied reward did not fit in the remaining budget
    pub truncated: bool,
    // Nothing is left after this payout
    pub exhausted: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HunterMetrics {
    pub completed_referrals: u64,
    pub success_rate_bps: u16,
    pub seconds_to_complete: u64,
}

/// `base_amount * product(multipliers) / 10_000^n`, rounded toward zero and
/// clamped to `remaining_budget`.
pub fn calculate_reward(base_amount: u64, multipliers_bps: &[u16], remaining_budget: u64) -> Result<Payout> {
    require!(
        multipliers_bps.len() <= MAX_MULTIPLIERS,
        BountyError::TooManyMultipliers
    );

    let mut numerator = base_amount as u128;
    let mut denominator: u128 = 1;
    for multiplier in multipliers_bps {
        numerator = numerator
            .checked_mul(*multiplier as u128)
            .ok_or(BountyError::MathOverflow)?;
        denominator = denominator
            .checked_mul(BPS_DENOMINATOR as u128)
            .ok_or(BountyError::MathOverflow)?;
    }

    // Anything above u64 is above every budget anyway
    let reward = u64::try_from(numerator / denominator).unwrap_or(u64::MAX);

    let amount = reward.min(remaining_budget);
    Ok(Payout {
        amount,
        truncated: reward > remaining_budget,
        exhausted: remaining_budget - amount == 0,
    })
}

// tier x success rate x volume x time-to-complete
pub fn collect_multipliers(
    tiers: &[Tier],
    table: &PerformanceMultipliers,
    metrics: &HunterMetrics,
) -> [u16; MAX_MULTIPLIERS] {
    [
        hunter_tier_multiplier(tiers, metrics.completed_referrals, metrics.success_rate_bps),
        resolve_multiplier(
            metrics.success_rate_bps as u64,
            &table.success_rate,
            ThresholdDirection::AtLeast,
        ),
        resolve_multiplier(
            metrics.completed_referrals,
            &table.total_completed,
            ThresholdDirection::AtLeast,
        ),
        resolve_multiplier(
            metrics.seconds_to_complete,
            &table.time_to_complete,
            ThresholdDirection::AtMost,
        ),
    ]
}
