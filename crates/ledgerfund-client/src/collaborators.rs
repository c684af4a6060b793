//! External collaborators the client talks to
//!
//! Wallet, contracts, IPFS, the bounty service and the governance contract are
//! passed in explicitly as trait objects.

use crate::bounties::{BountyFilter, BountyView, CreateBountyParams, ReferralView};
use crate::error::{ClientError, ClientResult};
use crate::governance::GovernanceProposal;
use anchor_lang::prelude::Pubkey;
use async_trait::async_trait;
use referral_bounty::Tier;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn connect(&self) -> ClientResult<Pubkey>;
    async fn disconnect(&self) -> ClientResult<()>;
    fn address(&self) -> Option<Pubkey>;

    fn is_connected(&self) -> bool {
        self.address().is_some()
    }
}

#[async_trait]
pub trait ContractClient: Send + Sync {
    /// Read-only call
    async fn call(&self, target: &Pubkey, method: &str, args: Vec<u8>) -> ClientResult<Vec<u8>>;

    /// State-changing call, returns the transaction signature
    async fn send_transaction(
        &self,
        target: &Pubkey,
        method: &str,
        args: Vec<u8>,
        value: u64,
    ) -> ClientResult<String>;
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store bytes, returns the content hash
    async fn upload(&self, bytes: Vec<u8>) -> ClientResult<String>;
    async fn fetch(&self, hash: &str) -> ClientResult<Vec<u8>>;
}

pub async fn upload_json<T: Serialize + Sync>(store: &dyn ContentStore, value: &T) -> ClientResult<String> {
    let bytes = serde_json::to_vec(value).map_err(|e| ClientError::Validation(e.to_string()))?;
    let hash = store.upload(bytes).await?;
    debug!(%hash, "Uploaded JSON document");
    Ok(hash)
}

/// Fetch a JSON document and decode it into `T`, rejecting documents that do
/// not match its shape.
pub async fn fetch_json<T: DeserializeOwned>(store: &dyn ContentStore, hash: &str) -> ClientResult<T> {
    let bytes = store.fetch(hash).await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::decode(format!("document {}", hash), e))
}

#[async_trait]
pub trait BountyLedger: Send + Sync {
    async fn get_bounties(&self, filter: &BountyFilter) -> ClientResult<Vec<BountyView>>;
    async fn get_bounty(&self, bounty_id: u64) -> ClientResult<Option<BountyView>>;
    async fn create_bounty(&self, params: CreateBountyParams, wallet: &dyn WalletProvider) -> ClientResult<u64>;
    async fn referrals_by_referrer(&self, referrer: &Pubkey) -> ClientResult<Vec<ReferralView>>;
    async fn record_successful_referral(
        &self,
        bounty: &Pubkey,
        referrer: &Pubkey,
        referred: &Pubkey,
    ) -> ClientResult<()>;
    async fn update_bounty_hunter_tiers(&self, tiers: Vec<Tier>) -> ClientResult<()>;
}

#[async_trait]
pub trait ProposalSource: Send + Sync {
    async fn fetch_proposals(&self) -> ClientResult<Vec<GovernanceProposal>>;
    async fn fetch_proposal(&self, id: u64) -> ClientResult<Option<GovernanceProposal>>;
}
