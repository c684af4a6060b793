use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*, tiers::*};

#[derive(Accounts)]
pub struct UpdateHunterTiers<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [TIER_CONFIG, admin.key().as_ref()],
        bump = tier_config.bump,
        has_one = admin @ BountyError::UnauthorizedAdmin
    )]
    pub tier_config: Account<'info, TierConfig>,
}

impl<'info> UpdateHunterTiers<'info> {
    // Stored hunter levels are refreshed on their next purchase or via refresh_hunter_tier
    pub fn update_hunter_tiers(
        &mut self,
        tiers: Vec<Tier>,
        multipliers: PerformanceMultipliers,
    ) -> Result<()> {
        validate_tiers(&tiers)?;
        validate_multipliers(&multipliers)?;

        let tier_config = &mut self.tier_config;
        tier_config.tiers = tiers;
        tier_config.multipliers = multipliers;

        msg!("Hunter tiers updated: {} tiers", tier_config.tiers.len());
        Ok(())
    }
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [TIER_CONFIG, admin.key().as_ref()],
        bump = tier_config.bump,
        has_one = admin @ BountyError::UnauthorizedAdmin
    )]
    pub tier_config: Account<'info, TierConfig>,
}

impl<'info> SetPaused<'info> {
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.tier_config.is_paused = paused;
        msg!("Referral program paused: {}", paused);
        Ok(())
    }
}

// Permissionless: recompute a hunter's stored level against the current table
#[derive(Accounts)]
pub struct RefreshHunterTier<'info> {
    #[account(
        seeds = [TIER_CONFIG, tier_config.admin.as_ref()],
        bump = tier_config.bump,
    )]
    pub tier_config: Account<'info, TierConfig>,

    #[account(
        mut,
        seeds = [HUNTER, tier_config.key().as_ref(), hunter_profile.hunter.as_ref()],
        bump = hunter_profile.bump,
    )]
    pub hunter_profile: Account<'info, HunterProfile>,
}

impl<'info> RefreshHunterTier<'info> {
    pub fn refresh_hunter_tier(&mut self) -> Result<()> {
        let profile = &mut self.hunter_profile;
        profile.tier_level = hunter_tier_level(
            &self.tier_config.tiers,
            profile.successful_referrals,
            profile.success_rate_bps(),
        );
        msg!("Hunter {} is now {}", profile.hunter, profile.tier_level.name());
        Ok(())
    }
}
