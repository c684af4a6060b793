use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOMINATOR, errors::BountyError, state::TierLevel};

// Cross-bounty performance record of a referrer
#[account]
#[derive(InitSpace)]
pub struct HunterProfile {
    pub hunter: Pubkey,
    pub config: Pubkey,
    pub total_referrals: u64,
    pub successful_referrals: u64,
    pub total_earned: u64,
    pub tier_level: TierLevel,
    pub last_referral_at: i64,
    pub bump: u8,
}

impl HunterProfile {
    pub fn success_rate_bps(&self) -> u16 {
        success_rate_bps(self.successful_referrals, self.total_referrals)
    }

    pub fn add_referral(&mut self, now: i64) -> Result<()> {
        self.total_referrals = self
            .total_referrals
            .checked_add(1)
            .ok_or(BountyError::MathOverflow)?;
        self.last_referral_at = now;
        Ok(())
    }

    pub fn add_success(&mut self) -> Result<()> {
        self.successful_referrals = self
            .successful_referrals
            .checked_add(1)
            .ok_or(BountyError::MathOverflow)?;
        Ok(())
    }

    pub fn add_earnings(&mut self, amount: u64) -> Result<()> {
        self.total_earned = self
            .total_earned
            .checked_add(amount)
            .ok_or(BountyError::MathOverflow)?;
        Ok(())
    }
}

// Participation of a hunter in a single bounty, used for hunter_count
#[account]
#[derive(InitSpace)]
pub struct BountyHunter {
    pub bounty: Pubkey,
    pub hunter: Pubkey,
    pub referrals: u64,
    pub bump: u8,
}

// successful / total in basis points, 0 when nothing was referred yet
pub fn success_rate_bps(successful: u64, total: u64) -> u16 {
    if total == 0 {
        return 0;
    }
    let rate = (successful.min(total) as u128) * (BPS_DENOMINATOR as u128) / (total as u128);
    rate as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_is_zero_without_referrals() {
        assert_eq!(success_rate_bps(0, 0), 0);
    }

    #[test]
    fn success_rate_rounds_down() {
        assert_eq!(success_rate_bps(2, 3), 6_666);
        assert_eq!(success_rate_bps(3, 5), 6_000);
        assert_eq!(success_rate_bps(5, 5), 10_000);
    }

    #[test]
    fn success_rate_never_exceeds_full() {
        assert_eq!(success_rate_bps(9, 4), 10_000);
    }
}
