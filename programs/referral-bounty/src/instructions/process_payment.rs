use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, state::*};

// Process Payment Instruction
//
// Pays a purchased referral out of the bounty vault. The amount was fixed
// when the purchase was recorded, so paying is safe to retry on its own:
// a referral that is already paid is rejected instead of paid twice.

#[derive(Accounts)]
pub struct ProcessPayment<'info> {
    #[account(mut)]
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

    #[account(
        address = bounty.token_mint @ BountyError::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        address = bounty.vault @ BountyError::InvalidVault
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: Must be the referrer recorded on the referral
    #[account(address = referral.referrer @ BountyError::ReferralMismatch)]
    pub referrer: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = recorder,
        associated_token::mint = token_mint,
        associated_token::authority = referrer,
    )]
    pub referrer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> ProcessPayment<'info> {
    pub fn process_payment(&mut self) -> Result<()> {
        require!(!self.tier_config.is_paused, BountyError::SystemPaused);
        require!(
            self.referral.status == ReferralStatus::Purchased,
            BountyError::ReferralNotPurchased
        );

        let amount = self.referral.payment_amount.unwrap_or(0);
        require!(
            self.vault.amount >= amount,
            BountyError::InsufficientVaultBalance
        );

        if amount > 0 {
            let creator = self.bounty.creator;
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
                    to: self.referrer_token_account.to_account_info(),
                    authority: self.bounty.to_account_info(),
                },
                signer_seeds,
            );
            token::transfer(transfer_ctx, amount)?;
        }

        self.bounty.record_paid(amount)?;
        self.hunter_profile.add_earnings(amount)?;

        let referral = &mut self.referral;
        referral.payment_processed = true;
        referral.status = ReferralStatus::Paid;

        msg!("Paid {} to {}", amount, referral.referrer);
        Ok(())
    }
}
