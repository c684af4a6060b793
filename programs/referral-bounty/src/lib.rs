use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod rewards;
pub mod state;
pub mod tiers;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("63bsgPfChp2gDv3ewesrUeSd8kRqLujGKfcSLkBUZb5n");

#[program]
pub mod referral_bounty {
    use super::*;

    // Create the tier config: hunter tier table, performance multipliers
    // and the recorder authority allowed to move bounty budgets
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        recorder: Pubkey,
        tiers: Vec<Tier>,
        multipliers: PerformanceMultipliers,
    ) -> Result<()> {
        ctx.accounts.initialize_config(recorder, tiers, multipliers, &ctx.bumps)
    }

    // Replace the tier table and multipliers (admin only)
    pub fn update_hunter_tiers(
        ctx: Context<UpdateHunterTiers>,
        tiers: Vec<Tier>,
        multipliers: PerformanceMultipliers,
    ) -> Result<()> {
        ctx.accounts.update_hunter_tiers(tiers, multipliers)
    }

    // Emergency brake for every budget-moving instruction (admin only)
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        ctx.accounts.set_paused(paused)
    }

    // Recompute a hunter's stored tier against the current table
    pub fn refresh_hunter_tier(ctx: Context<RefreshHunterTier>) -> Result<()> {
        ctx.accounts.refresh_hunter_tier()
    }

    // Create a bounty and move its whole budget into the vault
    #[allow(clippy::too_many_arguments)]
    pub fn create_bounty(
        ctx: Context<CreateBounty>,
        bounty_id: u64,
        name: String,
        description: String,
        reward_amount: u64,
        total_budget: u64,
        duration_seconds: i64,
        eligible_nfts: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.create_bounty(
            bounty_id,
            name,
            description,
            reward_amount,
            total_budget,
            duration_seconds,
            eligible_nfts,
            &ctx.bumps,
        )
    }

    // Record the Party / Crowdfund addresses once deployed (creator only)
    pub fn deploy_bounty(
        ctx: Context<DeployBounty>,
        party_address: Pubkey,
        crowdfund_address: Pubkey,
    ) -> Result<()> {
        ctx.accounts.deploy_bounty(party_address, crowdfund_address)
    }

    // Pause or resume a bounty (creator only)
    pub fn set_bounty_status(ctx: Context<SetBountyStatus>, status: BountyStatus) -> Result<()> {
        ctx.accounts.set_bounty_status(status)
    }

    // Mark a bounty expired once past its deadline (anyone)
    pub fn expire_bounty(ctx: Context<ExpireBounty>) -> Result<()> {
        ctx.accounts.expire_bounty()
    }

    // Hunter registers a pending referral
    pub fn register_referral(ctx: Context<RegisterReferral>) -> Result<()> {
        ctx.accounts.register_referral(&ctx.bumps)
    }

    // Recorder confirms the NFT purchase and commits the reward
    pub fn record_purchase(ctx: Context<RecordPurchase>, nft_collection: Pubkey) -> Result<()> {
        ctx.accounts.record_purchase(nft_collection)
    }

    // Recorder pays a purchased referral out of the vault
    pub fn process_payment(ctx: Context<ProcessPayment>) -> Result<()> {
        ctx.accounts.process_payment()
    }

    // Creator takes back the uncommitted budget of an expired bounty
    pub fn reclaim_budget(ctx: Context<ReclaimBudget>) -> Result<()> {
        ctx.accounts.reclaim_budget()
    }
}
