use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ReferralStatus {
    Pending,
    Purchased,
    Paid,
}

impl Default for ReferralStatus {
    fn default() -> Self {
        ReferralStatus::Pending
    }
}

// One referral of `referred` by `referrer` inside a bounty.
// Moves pending -> purchased -> paid and never back.
#[account]
#[derive(InitSpace)]
pub struct ReferralInfo {
    pub bounty: Pubkey,
    pub referrer: Pubkey,
    pub referred: Pubkey,
    pub referral_date: i64,
    pub nft_purchased: bool,
    pub purchase_date: Option<i64>,
    pub payment_processed: bool,
    pub payment_amount: Option<u64>,
    pub status: ReferralStatus,
    pub bump: u8,
}
