pub mod tier_config;
pub mod bounty;
pub mod referral;
pub mod hunter;

pub use tier_config::*;
pub use bounty::*;
pub use referral::*;
pub use hunter::*;
