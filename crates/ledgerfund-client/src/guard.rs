//! At most one in-flight contract mutation per (wallet, action kind).

use crate::error::{ClientError, ClientResult};
use anchor_lang::prelude::Pubkey;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Vote,
    Pledge,
    ApproveToken,
    ClaimReferral,
    CreateBounty,
    CreateProposal,
    ExecuteProposal,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vote => "vote",
            Self::Pledge => "pledge",
            Self::ApproveToken => "token approval",
            Self::ClaimReferral => "referral claim",
            Self::CreateBounty => "bounty creation",
            Self::CreateProposal => "proposal creation",
            Self::ExecuteProposal => "proposal execution",
        }
    }
}

type InFlightSet = Arc<Mutex<HashSet<(Pubkey, ActionKind)>>>;

#[derive(Debug, Clone, Default)]
pub struct InFlightGuard {
    in_flight: InFlightSet,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the (wallet, action) slot. Fails with `ActionInFlight` while
    /// another ticket for the same slot is alive.
    pub fn begin(&self, wallet: Pubkey, action: ActionKind) -> ClientResult<InFlightTicket> {
        let key = (wallet, action);
        if !self.in_flight.lock().insert(key) {
            return Err(ClientError::ActionInFlight {
                wallet: wallet.to_string(),
                action: action.name().to_string(),
            });
        }
        Ok(InFlightTicket {
            in_flight: self.in_flight.clone(),
            key,
        })
    }

    pub fn is_in_flight(&self, wallet: &Pubkey, action: ActionKind) -> bool {
        self.in_flight.lock().contains(&(*wallet, action))
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.lock().len()
    }
}

/// Releases its slot when dropped, whether the action succeeded, failed or
/// was cancelled.
#[derive(Debug)]
pub struct InFlightTicket {
    in_flight: InFlightSet,
    key: (Pubkey, ActionKind),
}

impl InFlightTicket {
    pub fn action(&self) -> ActionKind {
        self.key.1
    }
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.in_flight.lock().remove(&self.key);
    }
}
