//! Client error taxonomy
//!
//! Every failure a caller can see maps to one variant. `user_message` gives the
//! short text shown to the user and `is_retryable` says whether re-triggering
//! the same action by hand can help. Nothing is retried automatically.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Network error: {0}")]
    Network(String),

    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Contract reverted: {0}")]
    ContractRevert(String),

    #[error("{action} already in progress for {wallet}")]
    ActionInFlight { wallet: String, action: String },

    #[error("Failed to decode {what}: {reason}")]
    Decode { what: String, reason: String },

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn decode(what: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    pub fn timeout(operation: impl Into<String>, seconds: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            seconds,
        }
    }

    /// Text for the error toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::WalletNotConnected => "Connect your wallet to continue.".to_string(),
            Self::Network(_) => "Network problem. Check your connection and try again.".to_string(),
            Self::Timeout { .. } => "The request took too long. Please try again.".to_string(),
            Self::InsufficientBalance { .. } => "Insufficient balance for this transaction.".to_string(),
            Self::Validation(reason) => reason.clone(),
            Self::ContractRevert(reason) => format!("Transaction failed: {}", reason),
            Self::ActionInFlight { action, .. } => {
                format!("Your previous {} is still pending.", action)
            }
            Self::Decode { .. } => "Received unexpected data. Please refresh.".to_string(),
            Self::Cache(_) | Self::Config(_) => "Something went wrong. Please reload.".to_string(),
        }
    }

    /// Whether triggering the same action again may succeed without changes.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout { .. } | Self::ActionInFlight { .. }
        )
    }
}
