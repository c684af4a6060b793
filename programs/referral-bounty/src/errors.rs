use anchor_lang::prelude::*;

#[error_code]
pub enum BountyError {
    // Tier table errors
    #[msg("Tier table must contain between 1 and 5 tiers")]
    InvalidTierCount,

    #[msg("Tiers must be ordered by ascending level and requirements")]
    TiersNotOrdered,

    #[msg("Success rate must not exceed 10000 basis points")]
    InvalidSuccessRate,

    #[msg("Reward multiplier must be at least 1x (10000 basis points)")]
    InvalidMultiplier,

    #[msg("Tier benefits or description too long")]
    TierTextTooLong,

    #[msg("Threshold table must be sorted, unique and monotonic in its multipliers")]
    InvalidThresholdTable,

    #[msg("Too many reward multipliers")]
    TooManyMultipliers,

    // Bounty validation errors
    #[msg("Bounty name must be between 1 and 32 characters")]
    InvalidBountyName,

    #[msg("Bounty description must be at most 128 characters")]
    InvalidBountyDescription,

    #[msg("Reward amount must be greater than zero")]
    InvalidRewardAmount,

    #[msg("Total budget must cover at least one reward")]
    InvalidBudget,

    #[msg("Bounty duration must be positive and at most one year")]
    InvalidDuration,

    #[msg("Between 1 and 5 unique eligible NFT collections are required")]
    InvalidEligibleNfts,

    // Bounty lifecycle errors
    #[msg("Bounty is not active")]
    BountyNotActive,

    #[msg("Bounty has expired")]
    BountyExpired,

    #[msg("Bounty has not expired yet")]
    BountyNotExpired,

    #[msg("Bounty budget is exhausted")]
    BudgetExhausted,

    #[msg("Payouts would exceed the committed budget")]
    PaidExceedsCommitted,

    #[msg("Invalid bounty status transition")]
    InvalidStatusTransition,

    #[msg("Bounty has already been deployed")]
    AlreadyDeployed,

    #[msg("Nothing left to reclaim")]
    NothingToReclaim,

    #[msg("Bounty belongs to a different tier config")]
    ConfigMismatch,

    // Referral errors
    #[msg("Cannot refer yourself")]
    SelfReferral,

    #[msg("Referral is not pending")]
    ReferralNotPending,

    #[msg("Referral purchase has not been recorded")]
    ReferralNotPurchased,

    #[msg("NFT collection is not eligible for this bounty")]
    IneligibleNft,

    #[msg("Referral does not belong to this bounty")]
    ReferralMismatch,

    // Authorization errors
    #[msg("Only the admin can perform this action")]
    UnauthorizedAdmin,

    #[msg("Only the referral recorder can perform this action")]
    UnauthorizedRecorder,

    #[msg("Only the bounty creator can perform this action")]
    UnauthorizedCreator,

    // Account validation errors
    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid bounty vault")]
    InvalidVault,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    // System errors
    #[msg("System is currently paused")]
    SystemPaused,

    #[msg("Math overflow occurred")]
    MathOverflow,
}
