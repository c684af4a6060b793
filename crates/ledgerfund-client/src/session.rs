//! Contract-mutating actions on behalf of the connected wallet

use crate::collaborators::WalletProvider;
use crate::error::{ClientError, ClientResult};
use crate::guard::{ActionKind, InFlightGuard};
use crate::poller::with_timeout;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct ActionSession {
    wallet: Arc<dyn WalletProvider>,
    guard: InFlightGuard,
    timeout: Duration,
}

impl ActionSession {
    pub fn new(wallet: Arc<dyn WalletProvider>, timeout: Duration) -> Self {
        Self {
            wallet,
            guard: InFlightGuard::new(),
            timeout,
        }
    }

    pub fn with_guard(mut self, guard: InFlightGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn guard(&self) -> &InFlightGuard {
        &self.guard
    }

    pub fn wallet(&self) -> &dyn WalletProvider {
        self.wallet.as_ref()
    }

    /// Run `action` for the connected wallet under the in-flight guard and the
    /// request timeout. Failures are returned as-is; nothing is retried.
    pub async fn submit<T, F>(&self, kind: ActionKind, action: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        let wallet = self.wallet.address().ok_or(ClientError::WalletNotConnected)?;
        let _ticket = self.guard.begin(wallet, kind)?;
        debug!(%wallet, action = kind.name(), "Submitting action");

        let result = with_timeout(self.timeout, kind.name(), action).await;
        match &result {
            Ok(_) => info!(%wallet, action = kind.name(), "Action confirmed"),
            Err(e) => warn!(%wallet, action = kind.name(), error = %e, "Action failed"),
        }
        result
    }
}
