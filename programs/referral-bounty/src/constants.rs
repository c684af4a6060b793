// Seeds for PDA derivation: ["tier_config", admin]
pub const TIER_CONFIG: &[u8] = b"tier_config";

// Seeds for PDA derivation: ["bounty", creator, bounty_id]
pub const BOUNTY: &[u8] = b"bounty";

// Seeds for PDA derivation: ["referral", bounty, referred]
pub const REFERRAL: &[u8] = b"referral";

// Seeds for PDA derivation: ["hunter", tier_config, hunter]
pub const HUNTER: &[u8] = b"hunter";

// Seeds for PDA derivation: ["bounty_hunter", bounty, hunter]
pub const BOUNTY_HUNTER: &[u8] = b"bounty_hunter";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// 10_000 bps = 1.00x multiplier or 100% success rate
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MAX_TIERS: usize = 5;
pub const MAX_BENEFITS: usize = 4;
pub const MAX_BENEFIT_LEN: usize = 48;
pub const MAX_TIER_DESCRIPTION_LEN: usize = 96;
pub const MAX_THRESHOLDS: usize = 6;

// tier x success rate x volume x time-to-complete
pub const MAX_MULTIPLIERS: usize = 4;

pub const MAX_BOUNTY_NAME_LEN: usize = 32;
pub const MAX_BOUNTY_DESCRIPTION_LEN: usize = 128;
pub const MAX_ELIGIBLE_NFTS: usize = 5;

// One year
pub const MAX_BOUNTY_DURATION: i64 = 31_536_000;
