use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, state::*};

// Return the uncommitted budget of an expired bounty to its creator.
// Committed but unpaid payouts stay in the vault.
#[derive(Accounts)]
pub struct ReclaimBudget<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [BOUNTY, creator.key().as_ref(), &bounty.bounty_id.to_le_bytes()],
        bump = bounty.bump,
        has_one = creator @ BountyError::UnauthorizedCreator
    )]
    pub bounty: Account<'info, Bounty>,

    #[account(
        address = bounty.token_mint @ BountyError::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        address = bounty.vault @ BountyError::InvalidVault
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ReclaimBudget<'info> {
    pub fn reclaim_budget(&mut self) -> Result<()> {
        require!(
            self.bounty.status == BountyStatus::Expired,
            BountyError::BountyNotExpired
        );

        let amount = self.bounty.remaining_budget();
        require!(amount > 0, BountyError::NothingToReclaim);
        require!(
            self.vault.amount >= amount,
            BountyError::InsufficientVaultBalance
        );

        let creator = self.creator.key();
        let bounty_id = self.bounty.bounty_id.to_le_bytes();
        let bounty_seeds = &[
            BOUNTY,
            creator.as_ref(),
            bounty_id.as_ref(),
            &[self.bounty.bump],
        ];
        let signer_seeds = &[&bounty_seeds[..]];

        let transfer_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from: self.vault.to_account_info(),
                to: self.creator_token_account.to_account_info(),
                authority: self.bounty.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, amount)?;

        // Shrink the budget to what was committed
        self.bounty.total_budget = self.bounty.used_budget;

        msg!("Reclaimed {} from bounty {}", amount, self.bounty.bounty_id);
        Ok(())
    }
}
