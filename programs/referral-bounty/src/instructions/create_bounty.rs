use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, state::*};

// Create Bounty Instruction
//
// Creates the bounty account and its vault (an ATA owned by the bounty PDA),
// then moves the whole budget from the creator into the vault so every
// committed payout is backed by tokens.

#[derive(Accounts)]
#[instruction(bounty_id: u64)]
pub struct CreateBounty<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [TIER_CONFIG, tier_config.admin.as_ref()],
        bump = tier_config.bump,
    )]
    pub tier_config: Account<'info, TierConfig>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Bounty::INIT_SPACE,
        seeds = [BOUNTY, creator.key().as_ref(), &bounty_id.to_le_bytes()],
        bump,
    )]
    pub bounty: Account<'info, Bounty>,

    pub token_mint: Account<'info, Mint>,

    // Creator token account (source of the budget)
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    // Vault holding the budget, signed for by the bounty PDA
    #[account(
        init,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = bounty,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateBounty<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn create_bounty(
        &mut self,
        bounty_id: u64,
        name: String,
        description: String,
        reward_amount: u64,
        total_budget: u64,
        duration_seconds: i64,
        eligible_nfts: Vec<Pubkey>,
        bumps: &CreateBountyBumps,
    ) -> Result<()> {
        require!(!self.tier_config.is_paused, BountyError::SystemPaused);

        require!(
            !name.is_empty() && name.len() <= MAX_BOUNTY_NAME_LEN,
            BountyError::InvalidBountyName
        );
        require!(
            description.len() <= MAX_BOUNTY_DESCRIPTION_LEN,
            BountyError::InvalidBountyDescription
        );
        require!(reward_amount > 0, BountyError::InvalidRewardAmount);
        require!(total_budget >= reward_amount, BountyError::InvalidBudget);
        require!(
            duration_seconds > 0 && duration_seconds <= MAX_BOUNTY_DURATION,
            BountyError::InvalidDuration
        );
        require!(
            !eligible_nfts.is_empty() && eligible_nfts.len() <= MAX_ELIGIBLE_NFTS,
            BountyError::InvalidEligibleNfts
        );
        for (index, nft) in eligible_nfts.iter().enumerate() {
            require!(
                *nft != Pubkey::default() && !eligible_nfts[..index].contains(nft),
                BountyError::InvalidEligibleNfts
            );
        }
        require!(
            self.creator_token_account.amount >= total_budget,
            BountyError::InvalidBudget
        );

        let created_at = Clock::get()?.unix_timestamp;
        let expires_at = created_at
            .checked_add(duration_seconds)
            .ok_or(BountyError::MathOverflow)?;

        // Fund the vault
        let transfer_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.creator_token_account.to_account_info(),
                to: self.vault.to_account_info(),
                authority: self.creator.to_account_info(),
            },
        );
        token::transfer(transfer_ctx, total_budget)?;

        self.bounty.set_inner(Bounty {
            bounty_id,
            creator: self.creator.key(),
            config: self.tier_config.key(),
            name,
            description,
            reward_amount,
            total_budget,
            used_budget: 0,
            paid_budget: 0,
            success_count: 0,
            hunter_count: 0,
            referral_count: 0,
            status: BountyStatus::Active,
            created_at,
            expires_at,
            eligible_nfts,
            token_mint: self.token_mint.key(),
            vault: self.vault.key(),
            party_address: None,
            crowdfund_address: None,
            bump: bumps.bounty,
        });

        msg!(
            "Bounty {} created by {} with budget {}",
            bounty_id,
            self.creator.key(),
            total_budget
        );
        Ok(())
    }
}
