//! Governance proposal reflection
//!
//! The governance contract owns proposal state. The reflector is a read-through
//! copy of it plus an optimistic "vote submitted" flag per proposal, which is
//! dropped whenever the proposal is refetched.

use crate::collaborators::ProposalSource;
use crate::error::ClientResult;
use crate::poller::with_timeout;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Active,
    Passed,
    Ready,
    Executed,
    Defeated,
    Cancelled,
    Expired,
}

impl ProposalStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Executed | Self::Defeated | Self::Cancelled | Self::Expired
        )
    }

    /// Transitions the governance contract is expected to make.
    pub fn can_transition_to(&self, next: ProposalStatus) -> bool {
        use ProposalStatus::*;
        matches!(
            (self, next),
            (Active, Passed | Defeated | Expired | Cancelled) | (Passed, Ready) | (Ready, Executed)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Passed => "passed",
            Self::Ready => "ready",
            Self::Executed => "executed",
            Self::Defeated => "defeated",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalTransaction {
    pub target: String,
    pub value: u64,
    pub calldata: String,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceProposal {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub transactions: Vec<ProposalTransaction>,
    pub votes_for: u64,
    pub votes_against: u64,
    pub status: ProposalStatus,
    pub proposer: String,
    pub created_at: i64,
    pub voting_ends_at: i64,
}

impl GovernanceProposal {
    pub fn time_remaining(&self, now: i64) -> u64 {
        self.voting_ends_at.saturating_sub(now).max(0) as u64
    }

    pub fn total_votes(&self) -> u64 {
        self.votes_for.saturating_add(self.votes_against)
    }
}

/// What a snapshot did to the cached copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Inserted,
    Unchanged,
    Updated,
    Transitioned { from: ProposalStatus, to: ProposalStatus },
    /// Accepted anyway, the contract is authoritative
    Unexpected { from: ProposalStatus, to: ProposalStatus },
}

#[derive(Debug)]
pub struct ProposalReflector {
    proposals: BTreeMap<u64, GovernanceProposal>,
    voted_locally: HashSet<u64>,
    timeout: Duration,
}

impl ProposalReflector {
    pub fn new(timeout: Duration) -> Self {
        Self {
            proposals: BTreeMap::new(),
            voted_locally: HashSet::new(),
            timeout,
        }
    }

    /// Replace the cached copy with what the contract reports.
    pub fn apply_snapshot(&mut self, proposal: GovernanceProposal) -> SnapshotOutcome {
        let id = proposal.id;
        self.voted_locally.remove(&id);

        let outcome = match self.proposals.get(&id) {
            None => SnapshotOutcome::Inserted,
            Some(cached) if *cached == proposal => SnapshotOutcome::Unchanged,
            Some(cached) if cached.status == proposal.status => SnapshotOutcome::Updated,
            Some(cached) if cached.status.can_transition_to(proposal.status) => {
                SnapshotOutcome::Transitioned {
                    from: cached.status,
                    to: proposal.status,
                }
            }
            Some(cached) => SnapshotOutcome::Unexpected {
                from: cached.status,
                to: proposal.status,
            },
        };

        match outcome {
            SnapshotOutcome::Transitioned { from, to } => {
                info!(proposal = id, from = from.name(), to = to.name(), "Proposal status changed");
            }
            SnapshotOutcome::Unexpected { from, to } => {
                warn!(
                    proposal = id,
                    from = from.name(),
                    to = to.name(),
                    "Proposal moved outside the expected lifecycle"
                );
            }
            _ => {}
        }

        self.proposals.insert(id, proposal);
        outcome
    }

    /// Refetch every proposal. Returns how many were applied.
    ///
    /// Proposals the source no longer returns are dropped together with their
    /// vote flag.
    pub async fn refresh(&mut self, source: &dyn ProposalSource) -> ClientResult<usize> {
        let proposals = with_timeout(self.timeout, "fetch proposals", source.fetch_proposals()).await?;
        let count = proposals.len();
        let returned: HashSet<u64> = proposals.iter().map(|proposal| proposal.id).collect();
        for proposal in proposals {
            self.apply_snapshot(proposal);
        }

        let before = self.proposals.len();
        self.proposals.retain(|id, _| returned.contains(id));
        self.voted_locally.retain(|id| returned.contains(id));
        let pruned = before - self.proposals.len();
        if pruned > 0 {
            debug!(pruned, "Dropped proposals missing from source");
        }

        debug!(count, "Refreshed proposals");
        Ok(count)
    }

    pub async fn refresh_one(&mut self, source: &dyn ProposalSource, id: u64) -> ClientResult<Option<&GovernanceProposal>> {
        let fetched = with_timeout(self.timeout, "fetch proposal", source.fetch_proposal(id)).await?;
        match fetched {
            Some(proposal) => {
                self.apply_snapshot(proposal);
            }
            None => {
                self.proposals.remove(&id);
                self.voted_locally.remove(&id);
            }
        }
        Ok(self.proposals.get(&id))
    }

    /// Optimistic flag only; never blocks another vote attempt.
    pub fn mark_vote_submitted(&mut self, id: u64) {
        self.voted_locally.insert(id);
    }

    pub fn has_voted_locally(&self, id: u64) -> bool {
        self.voted_locally.contains(&id)
    }

    pub fn get(&self, id: u64) -> Option<&GovernanceProposal> {
        self.proposals.get(&id)
    }

    pub fn by_status(&self, status: ProposalStatus) -> Vec<&GovernanceProposal> {
        self.proposals
            .values()
            .filter(|proposal| proposal.status == status)
            .collect()
    }

    pub fn time_remaining(&self, id: u64, now: i64) -> Option<u64> {
        self.get(id).map(|proposal| proposal.time_remaining(now))
    }

    pub fn proposals(&self) -> impl Iterator<Item = &GovernanceProposal> {
        self.proposals.values()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
