use anchor_lang::prelude::*;

use crate::errors::BountyError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum BountyStatus {
    // Accepting referrals and paying rewards
    Active,
    // Temporarily halted by the creator
    Paused,
    // Past expires_at, remaining budget can be reclaimed
    Expired,
    // Budget exhausted
    Completed,
}

impl Default for BountyStatus {
    fn default() -> Self {
        BountyStatus::Active
    }
}

impl BountyStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BountyStatus::Expired | BountyStatus::Completed)
    }
}

// Budget pool paying a reward per successful referral.
// Budget tokens live in `vault`, an ATA owned by this PDA.
#[account]
#[derive(InitSpace)]
pub struct Bounty {
    pub bounty_id: u64,
    pub creator: Pubkey,

    // Tier config holding the tier table and recorder authority
    pub config: Pubkey,

    #[max_len(32)]
    pub name: String,

    #[max_len(128)]
    pub description: String,

    // Base reward per successful referral, in token base units
    pub reward_amount: u64,

    pub total_budget: u64,

    // Sum of payouts committed by recorded purchases
    pub used_budget: u64,

    // Sum of payouts actually transferred out of the vault
    pub paid_budget: u64,

    pub success_count: u64,
    pub hunter_count: u64,
    pub referral_count: u64,

    pub status: BountyStatus,

    pub created_at: i64,
    pub expires_at: i64,

    #[max_len(5)]
    pub eligible_nfts: Vec<Pubkey>,

    pub token_mint: Pubkey,
    pub vault: Pubkey,

    // Populated once the bounty is deployed to a Party/Crowdfund
    pub party_address: Option<Pubkey>,
    pub crowdfund_address: Option<Pubkey>,

    pub bump: u8,
}

impl Bounty {
    pub fn remaining_budget(&self) -> u64 {
        self.total_budget.saturating_sub(self.used_budget)
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    pub fn is_deployed(&self) -> bool {
        self.party_address.is_some() || self.crowdfund_address.is_some()
    }

    pub fn is_eligible(&self, collection: &Pubkey) -> bool {
        self.eligible_nfts.iter().any(|nft| nft == collection)
    }

    // Active, unexpired and with budget left
    pub fn ensure_accepting(&self, now: i64) -> Result<()> {
        require!(self.status == BountyStatus::Active, BountyError::BountyNotActive);
        require!(!self.is_expired(now), BountyError::BountyExpired);
        require!(self.remaining_budget() > 0, BountyError::BudgetExhausted);
        Ok(())
    }

    // Commit a payout against the budget, completing the bounty once nothing is left
    pub fn commit_payout(&mut self, amount: u64) -> Result<()> {
        let used = self
            .used_budget
            .checked_add(amount)
            .ok_or(BountyError::MathOverflow)?;
        require!(used <= self.total_budget, BountyError::BudgetExhausted);
        self.used_budget = used;

        self.success_count = self
            .success_count
            .checked_add(1)
            .ok_or(BountyError::MathOverflow)?;

        if self.remaining_budget() == 0 {
            self.status = BountyStatus::Completed;
        }
        Ok(())
    }

    pub fn record_paid(&mut self, amount: u64) -> Result<()> {
        let paid = self
            .paid_budget
            .checked_add(amount)
            .ok_or(BountyError::MathOverflow)?;
        require!(paid <= self.used_budget, BountyError::PaidExceedsCommitted);
        self.paid_budget = paid;
        Ok(())
    }
}
