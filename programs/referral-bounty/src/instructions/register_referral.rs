use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

// Register Referral Instruction
//
// A hunter registers that they referred `referred` to a bounty. The referral
// PDA is keyed by (bounty, referred), so a wallet can be referred only once
// per bounty no matter how many hunters try.

#[derive(Accounts)]
pub struct RegisterReferral<'info> {
    #[account(mut)]
    pub referrer: Signer<'info>,

    /// CHECK: Only its key is recorded
    pub referred: UncheckedAccount<'info>,

    #[account(
        seeds = [TIER_CONFIG, tier_config.admin.as_ref()],
        bump = tier_config.bump,
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
        init,
        payer = referrer,
        space = ANCHOR_DISCRIMINATOR + ReferralInfo::INIT_SPACE,
        seeds = [REFERRAL, bounty.key().as_ref(), referred.key().as_ref()],
        bump,
    )]
    pub referral: Account<'info, ReferralInfo>,

    #[account(
        init_if_needed,
        payer = referrer,
        space = ANCHOR_DISCRIMINATOR + HunterProfile::INIT_SPACE,
        seeds = [HUNTER, tier_config.key().as_ref(), referrer.key().as_ref()],
        bump,
    )]
    pub hunter_profile: Account<'info, HunterProfile>,

    #[account(
        init_if_needed,
        payer = referrer,
        space = ANCHOR_DISCRIMINATOR + BountyHunter::INIT_SPACE,
        seeds = [BOUNTY_HUNTER, bounty.key().as_ref(), referrer.key().as_ref()],
        bump,
    )]
    pub bounty_hunter: Account<'info, BountyHunter>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterReferral<'info> {
    pub fn register_referral(&mut self, bumps: &RegisterReferralBumps) -> Result<()> {
        require!(!self.tier_config.is_paused, BountyError::SystemPaused);
        require!(
            self.referrer.key() != self.referred.key(),
            BountyError::SelfReferral
        );

        let now = Clock::get()?.unix_timestamp;
        self.bounty.ensure_accepting(now)?;

        self.referral.set_inner(ReferralInfo {
            bounty: self.bounty.key(),
            referrer: self.referrer.key(),
            referred: self.referred.key(),
            referral_date: now,
            nft_purchased: false,
            purchase_date: None,
            payment_processed: false,
            payment_amount: None,
            status: ReferralStatus::Pending,
            bump: bumps.referral,
        });

        // First referral of this hunter anywhere under the config
        let profile = &mut self.hunter_profile;
        if profile.hunter == Pubkey::default() {
            profile.hunter = self.referrer.key();
            profile.config = self.tier_config.key();
            profile.tier_level = self
                .tier_config
                .tiers
                .first()
                .map(|tier| tier.level)
                .unwrap_or_default();
            profile.bump = bumps.hunter_profile;
        }
        profile.add_referral(now)?;

        // First referral of this hunter in this bounty
        let entry = &mut self.bounty_hunter;
        if entry.hunter == Pubkey::default() {
            entry.bounty = self.bounty.key();
            entry.hunter = self.referrer.key();
            entry.bump = bumps.bounty_hunter;
            self.bounty.hunter_count = self
                .bounty
                .hunter_count
                .checked_add(1)
                .ok_or(BountyError::MathOverflow)?;
        }
        entry.referrals = entry
            .referrals
            .checked_add(1)
            .ok_or(BountyError::MathOverflow)?;

        self.bounty.referral_count = self
            .bounty
            .referral_count
            .checked_add(1)
            .ok_or(BountyError::MathOverflow)?;

        Ok(())
    }
}
