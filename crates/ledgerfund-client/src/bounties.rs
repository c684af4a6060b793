//! Client-side views of bounty program accounts

use crate::error::{ClientError, ClientResult};
use anchor_lang::prelude::Pubkey;
use anchor_lang::AccountDeserialize;
use referral_bounty::tiers::{hunter_tier_level, hunter_tier_multiplier, next_hunter_tier, TierGap};
use referral_bounty::{
    Bounty, BountyStatus, HunterProfile, ReferralInfo, ReferralStatus, Tier, TierLevel, BOUNTY,
    MAX_BOUNTY_DESCRIPTION_LEN, MAX_BOUNTY_DURATION, MAX_BOUNTY_NAME_LEN, MAX_ELIGIBLE_NFTS,
};

pub fn bounty_address(creator: &Pubkey, bounty_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[BOUNTY, creator.as_ref(), &bounty_id.to_le_bytes()],
        &referral_bounty::ID,
    )
    .0
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BountyView {
    pub bounty_id: u64,
    pub creator: Pubkey,
    pub name: String,
    pub description: String,
    pub reward_amount: u64,
    pub total_budget: u64,
    pub used_budget: u64,
    pub paid_budget: u64,
    pub success_count: u64,
    pub hunter_count: u64,
    pub referral_count: u64,
    pub status: BountyStatus,
    pub created_at: i64,
    pub expires_at: i64,
    pub eligible_nfts: Vec<Pubkey>,
    pub token_mint: Pubkey,
    pub party_address: Option<Pubkey>,
    pub crowdfund_address: Option<Pubkey>,
}

impl From<Bounty> for BountyView {
    fn from(bounty: Bounty) -> Self {
        Self {
            bounty_id: bounty.bounty_id,
            creator: bounty.creator,
            name: bounty.name,
            description: bounty.description,
            reward_amount: bounty.reward_amount,
            total_budget: bounty.total_budget,
            used_budget: bounty.used_budget,
            paid_budget: bounty.paid_budget,
            success_count: bounty.success_count,
            hunter_count: bounty.hunter_count,
            referral_count: bounty.referral_count,
            status: bounty.status,
            created_at: bounty.created_at,
            expires_at: bounty.expires_at,
            eligible_nfts: bounty.eligible_nfts,
            token_mint: bounty.token_mint,
            party_address: bounty.party_address,
            crowdfund_address: bounty.crowdfund_address,
        }
    }
}

impl BountyView {
    /// Decode raw account data, discriminator included.
    pub fn from_account_data(data: &[u8]) -> ClientResult<Self> {
        let mut slice = data;
        Bounty::try_deserialize(&mut slice)
            .map(Self::from)
            .map_err(|e| ClientError::decode("bounty account", e))
    }

    pub fn address(&self) -> Pubkey {
        bounty_address(&self.creator, self.bounty_id)
    }

    pub fn remaining_budget(&self) -> u64 {
        self.total_budget.saturating_sub(self.used_budget)
    }

    /// Committed but not yet transferred
    pub fn unpaid_budget(&self) -> u64 {
        self.used_budget.saturating_sub(self.paid_budget)
    }

    /// Share of the budget already committed, in basis points
    pub fn progress_bps(&self) -> u16 {
        if self.total_budget == 0 {
            return 10_000;
        }
        (self.used_budget.min(self.total_budget) as u128 * 10_000 / self.total_budget as u128) as u16
    }

    pub fn is_accepting(&self, now: i64) -> bool {
        self.status == BountyStatus::Active && now <= self.expires_at && self.remaining_budget() > 0
    }

    pub fn time_remaining(&self, now: i64) -> u64 {
        self.expires_at.saturating_sub(now).max(0) as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferralView {
    pub bounty: Pubkey,
    pub referrer: Pubkey,
    pub referred: Pubkey,
    pub referral_date: i64,
    pub purchase_date: Option<i64>,
    pub payment_amount: Option<u64>,
    pub status: ReferralStatus,
}

impl From<ReferralInfo> for ReferralView {
    fn from(referral: ReferralInfo) -> Self {
        Self {
            bounty: referral.bounty,
            referrer: referral.referrer,
            referred: referral.referred,
            referral_date: referral.referral_date,
            purchase_date: referral.purchase_date,
            payment_amount: referral.payment_amount,
            status: referral.status,
        }
    }
}

impl ReferralView {
    pub fn from_account_data(data: &[u8]) -> ClientResult<Self> {
        let mut slice = data;
        ReferralInfo::try_deserialize(&mut slice)
            .map(Self::from)
            .map_err(|e| ClientError::decode("referral account", e))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BountyFilter {
    pub status: Option<BountyStatus>,
    pub creator: Option<Pubkey>,
    pub min_remaining: Option<u64>,
}

impl BountyFilter {
    pub fn active() -> Self {
        Self {
            status: Some(BountyStatus::Active),
            ..Self::default()
        }
    }

    pub fn matches(&self, bounty: &BountyView) -> bool {
        self.status.map_or(true, |status| bounty.status == status)
            && self.creator.map_or(true, |creator| bounty.creator == creator)
            && self
                .min_remaining
                .map_or(true, |min| bounty.remaining_budget() >= min)
    }
}

pub fn filter_bounties<'a>(bounties: &'a [BountyView], filter: &BountyFilter) -> Vec<&'a BountyView> {
    bounties.iter().filter(|bounty| filter.matches(bounty)).collect()
}

/// Bounty creation input, checked against the program's limits before sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBountyParams {
    pub bounty_id: u64,
    pub name: String,
    pub description: String,
    pub reward_amount: u64,
    pub total_budget: u64,
    pub duration_seconds: i64,
    pub eligible_nfts: Vec<Pubkey>,
    pub token_mint: Pubkey,
}

impl CreateBountyParams {
    /// `balance` is the creator's token balance in base units.
    pub fn validate(&self, balance: u64) -> ClientResult<()> {
        let invalid = |reason: &str| Err(ClientError::Validation(reason.to_string()));

        if self.name.trim().is_empty() || self.name.len() > MAX_BOUNTY_NAME_LEN {
            return invalid("Bounty name must be 1-32 characters");
        }
        if self.description.len() > MAX_BOUNTY_DESCRIPTION_LEN {
            return invalid("Bounty description is too long");
        }
        if self.reward_amount == 0 {
            return invalid("Reward amount must be greater than zero");
        }
        if self.total_budget < self.reward_amount {
            return invalid("Budget must cover at least one reward");
        }
        if self.duration_seconds <= 0 || self.duration_seconds > MAX_BOUNTY_DURATION {
            return invalid("Duration must be between one second and one year");
        }
        if self.eligible_nfts.is_empty() || self.eligible_nfts.len() > MAX_ELIGIBLE_NFTS {
            return invalid("Select between one and five eligible NFT collections");
        }
        let mut seen = self.eligible_nfts.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != self.eligible_nfts.len() || seen.contains(&Pubkey::default()) {
            return invalid("Eligible NFT collections must be distinct");
        }
        if self.total_budget > balance {
            return Err(ClientError::InsufficientBalance {
                required: self.total_budget,
                available: balance,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunterProgress {
    pub level: TierLevel,
    pub multiplier_bps: u16,
    pub success_rate_bps: u16,
    pub next: Option<TierGap>,
}

/// Current tier and what is missing for the next one, from the live table.
pub fn hunter_progress(profile: &HunterProfile, tiers: &[Tier]) -> HunterProgress {
    let completed = profile.successful_referrals;
    let rate = profile.success_rate_bps();
    HunterProgress {
        level: hunter_tier_level(tiers, completed, rate),
        multiplier_bps: hunter_tier_multiplier(tiers, completed, rate),
        success_rate_bps: rate,
        next: next_hunter_tier(tiers, completed, rate),
    }
}
