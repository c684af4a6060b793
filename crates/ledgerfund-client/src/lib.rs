//! LedgerFund DAO client core
//!
//! Off-chain half of the referral bounty system: reflects governance
//! proposals, derives radiation feature unlocks, decodes bounty accounts and
//! guards contract-mutating actions. Library code only logs through `tracing`;
//! installing a subscriber is left to the application.

pub mod bounties;
pub mod cache;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod governance;
pub mod guard;
pub mod poller;
pub mod radiation;
pub mod session;
pub mod units;

pub use bounties::{filter_bounties, hunter_progress, BountyFilter, BountyView, CreateBountyParams, HunterProgress, ReferralView};
pub use cache::LocalCache;
pub use collaborators::{fetch_json, upload_json, BountyLedger, ContentStore, ContractClient, ProposalSource, WalletProvider};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use governance::{GovernanceProposal, ProposalReflector, ProposalStatus};
pub use guard::{ActionKind, InFlightGuard, InFlightTicket};
pub use poller::{with_timeout, Poller};
pub use radiation::{derive_unlocks, radiation_from_holders, FeatureUnlock, UnlockState};
pub use session::ActionSession;
pub use units::{format_units, parse_units, usd_to_token};

pub use referral_bounty::{BountyStatus, ReferralStatus, Tier, TierLevel};
