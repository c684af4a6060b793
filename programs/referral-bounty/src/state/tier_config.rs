use anchor_lang::prelude::*;

// Performance bracket of a bounty hunter
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, InitSpace)]
pub enum TierLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Default for TierLevel {
    fn default() -> Self {
        TierLevel::Bronze
    }
}

impl TierLevel {
    pub fn name(&self) -> &'static str {
        match self {
            TierLevel::Bronze => "bronze",
            TierLevel::Silver => "silver",
            TierLevel::Gold => "gold",
            TierLevel::Platinum => "platinum",
            TierLevel::Diamond => "diamond",
        }
    }
}

// One row of the hunter tier table.
// A tier applies only when every requirement holds at the same time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Tier {
    pub level: TierLevel,

    // Minimum completed referrals
    pub required_referrals: u32,

    // Minimum success rate in basis points (0..=10_000)
    pub required_success_rate_bps: u16,

    // Reward multiplier in basis points (10_000 = 1.00x)
    pub reward_multiplier_bps: u16,

    #[max_len(4, 48)]
    pub benefits: Vec<String>,

    #[max_len(96)]
    pub description: String,
}

// threshold -> multiplier row of a performance mapping
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ThresholdEntry {
    pub threshold: u64,
    pub multiplier_bps: u16,
}

// Three independent threshold tables feeding the reward calculator.
// All are stored ascending by threshold.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PerformanceMultipliers {
    // success rate (bps) -> multiplier, at-least semantics
    #[max_len(6)]
    pub success_rate: Vec<ThresholdEntry>,

    // completed referrals -> multiplier, at-least semantics
    #[max_len(6)]
    pub total_completed: Vec<ThresholdEntry>,

    // seconds from referral to purchase -> multiplier, at-most semantics
    #[max_len(6)]
    pub time_to_complete: Vec<ThresholdEntry>,
}

// Program configuration, one per admin
#[account]
#[derive(InitSpace)]
pub struct TierConfig {
    pub admin: Pubkey,

    // Referral-recording service authority.
    // The only signer allowed to move bounty budgets.
    pub recorder: Pubkey,

    #[max_len(5)]
    pub tiers: Vec<Tier>,

    pub multipliers: PerformanceMultipliers,

    pub is_paused: bool,

    pub bump: u8,
}
