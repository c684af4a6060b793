use anchor_lang::prelude::*;

use crate::{constants::*, state::*, tiers::*};

// context for creating the tier config that bounties point at
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + TierConfig::INIT_SPACE,
        seeds = [TIER_CONFIG, admin.key().as_ref()],
        bump,
    )]
    pub tier_config: Account<'info, TierConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeConfig<'info> {
    pub fn initialize_config(
        &mut self,
        recorder: Pubkey,
        tiers: Vec<Tier>,
        multipliers: PerformanceMultipliers,
        bumps: &InitializeConfigBumps,
    ) -> Result<()> {
        validate_tiers(&tiers)?;
        validate_multipliers(&multipliers)?;

        self.tier_config.set_inner(TierConfig {
            admin: self.admin.key(),
            recorder,
            tiers,
            multipliers,
            is_paused: false,
            bump: bumps.tier_config,
        });

        msg!("Tier config created with recorder {}", recorder);
        Ok(())
    }
}
