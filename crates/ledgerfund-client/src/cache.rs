//! Local JSON cache
//!
//! Holds the user's proposals list and whether a wallet was ever connected on
//! this device. The contracts stay authoritative: an unreadable cache file is
//! treated as empty.

use crate::error::{ClientError, ClientResult};
use crate::governance::GovernanceProposal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CACHE_FILENAME: &str = "cache.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheContents {
    #[serde(default)]
    pub user_proposals: Vec<GovernanceProposal>,
    #[serde(default)]
    pub has_connected_before: bool,
}

#[derive(Debug)]
pub struct LocalCache {
    path: PathBuf,
    contents: CacheContents,
}

impl LocalCache {
    pub fn open(cache_dir: &Path) -> ClientResult<Self> {
        let path = cache_dir.join(CACHE_FILENAME);
        let contents = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Discarding unreadable cache");
                CacheContents::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CacheContents::default(),
            Err(e) => {
                return Err(ClientError::Cache(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Ok(Self { path, contents })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn user_proposals(&self) -> &[GovernanceProposal] {
        &self.contents.user_proposals
    }

    pub fn set_user_proposals(&mut self, proposals: Vec<GovernanceProposal>) {
        self.contents.user_proposals = proposals;
    }

    pub fn has_connected_before(&self) -> bool {
        self.contents.has_connected_before
    }

    pub fn mark_connected(&mut self) {
        self.contents.has_connected_before = true;
    }

    /// Write through a temporary file so a crash never leaves half a cache.
    pub fn save(&self) -> ClientResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| ClientError::Cache(e.to_string()))?;
        }
        let bytes = serde_json::to_vec_pretty(&self.contents).map_err(|e| ClientError::Cache(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|e| ClientError::Cache(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| ClientError::Cache(e.to_string()))?;
        debug!(path = %self.path.display(), "Saved cache");
        Ok(())
    }

    pub fn clear(&mut self) -> ClientResult<()> {
        self.contents = CacheContents::default();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Cache(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::governance::tests::proposal;
    use crate::governance::ProposalStatus;

    #[test]
    fn missing_file_is_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::open(dir.path()).unwrap();
        assert!(cache.user_proposals().is_empty());
        assert!(!cache.has_connected_before());
    }

    #[test]
    fn saved_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = LocalCache::open(&dir.path().join("nested")).unwrap();
        cache.mark_connected();
        cache.set_user_proposals(vec![proposal(3, ProposalStatus::Ready)]);
        cache.save().unwrap();

        let reopened = LocalCache::open(&dir.path().join("nested")).unwrap();
        assert!(reopened.has_connected_before());
        assert_eq!(reopened.user_proposals().len(), 1);
        assert_eq!(reopened.user_proposals()[0].status, ProposalStatus::Ready);
    }

    #[test]
    fn corrupt_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CACHE_FILENAME), b"{not json").unwrap();
        let cache = LocalCache::open(dir.path()).unwrap();
        assert_eq!(cache.contents, CacheContents::default());
    }

    #[test]
    fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = LocalCache::open(dir.path()).unwrap();
        cache.mark_connected();
        cache.save().unwrap();
        assert!(cache.path().exists());

        cache.clear().unwrap();
        assert!(!cache.path().exists());
        assert!(!cache.has_connected_before());
        cache.clear().unwrap();
    }
}
