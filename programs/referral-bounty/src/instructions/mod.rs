pub mod initialize_config;
pub mod update_hunter_tiers;
pub mod create_bounty;
pub mod manage_bounty;
pub mod register_referral;
pub mod record_purchase;
pub mod process_payment;
pub mod reclaim_budget;

pub use initialize_config::*;
pub use update_hunter_tiers::*;
pub use create_bounty::*;
pub use manage_bounty::*;
pub use register_referral::*;
pub use record_purchase::*;
pub use process_payment::*;
pub use reclaim_budget::*;
