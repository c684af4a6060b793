use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, rewards::*, state::*, tiers::*};

// Record Purchase Instruction
//
// The referral-recording service confirms that the referred wallet bought an
// eligible NFT. The hunter's stats and tier are updated first, then the
// reward is computed from the base amount and the four multipliers and
// committed against the bounty budget. The payout is clamped to what is left;
// the bounty completes when its budget reaches zero.

#[derive(Accounts)]
pub struct RecordPurchase<'info> {
    pub recorder: Signer<'info>,

    #[account(
        seeds = [TIER_CONFIG, tier_config.admin.as_ref()],
        bump = tier_config.bump,
        has_one = recorder @ BountyError::UnauthorizedRecorder
    )]
    pub tier_config: Account<'info, TierConfig>,

    #[account(
        mut,
        seeds = [BOUNTY, bounty.creator.as_ref(), &bounty.bounty_id.to_le_bytes()],
        bump = bounty.bump,
        constraint = bounty.config == tier_config.key() @ BountyError::ConfigMismatch
    )]
    pub bounty: Account<'info, Bounty>,

    #[account(
        mut,
        seeds = [REFERRAL, bounty.key().as_ref(), referral.referred.as_ref()],
        bump = referral.bump,
        constraint = referral.bounty == bounty.key() @ BountyError::ReferralMismatch
    )]
    pub referral: Account<'info, ReferralInfo>,

    #[account(
        mut,
        seeds = [HUNTER, tier_config.key().as_ref(), referral.referrer.as_ref()],
        bump = hunter_profile.bump,
    )]
    pub hunter_profile: Account<'info, HunterProfile>,
}

impl<'info> RecordPurchase<'info> {
    pub fn record_purchase(&mut self, nft_collection: Pubkey) -> Result<()> {
        require!(!self.tier_config.is_paused, BountyError::SystemPaused);
        require!(
            self.referral.status == ReferralStatus::Pending,
            BountyError::ReferralNotPending
        );
        require!(
            self.bounty.is_eligible(&nft_collection),
            BountyError::IneligibleNft
        );

        let now = Clock::get()?.unix_timestamp;
        self.bounty.ensure_accepting(now)?;

        // Stats include the purchase being recorded
        let profile = &mut self.hunter_profile;
        profile.add_success()?;
        let metrics = HunterMetrics {
            completed_referrals: profile.successful_referrals,
            success_rate_bps: profile.success_rate_bps(),
            seconds_to_complete: now.saturating_sub(self.referral.referral_date).max(0) as u64,
        };
        profile.tier_level = hunter_tier_level(
            &self.tier_config.tiers,
            metrics.completed_referrals,
            metrics.success_rate_bps,
        );

        let multipliers = collect_multipliers(
            &self.tier_config.tiers,
            &self.tier_config.multipliers,
            &metrics,
        );
        let payout = calculate_reward(
            self.bounty.reward_amount,
            &multipliers,
            self.bounty.remaining_budget(),
        )?;

        self.bounty.commit_payout(payout.amount)?;

        let referral = &mut self.referral;
        referral.nft_purchased = true;
        referral.purchase_date = Some(now);
        referral.payment_amount = Some(payout.amount);
        referral.status = ReferralStatus::Purchased;

        if payout.truncated {
            msg!(
                "Payout for {} truncated to remaining budget {}",
                referral.referrer,
                payout.amount
            );
        }
        if payout.exhausted {
            msg!("Bounty {} budget exhausted", self.bounty.bounty_id);
        }

        Ok(())
    }
}
