use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::profile::Profile;
use crate::models::saving::Saving;
use crate::remote::traits::SavingsRemote;

/// Replicates savings to the server and keeps the local queue of savings
/// that could not be sent yet.
///
/// Local state is always written first; the network is best effort. The
/// queue is flushed in insertion order and only cleared after the server
/// accepted the whole batch, so a saving may be delivered more than once
/// but is never dropped.
pub struct SyncService;

impl SyncService {
    pub fn new() -> Self {
        Self
    }

    /// Send a freshly recorded saving. Without a session nothing happens;
    /// if the push fails the saving is queued for the next flush.
    ///
    /// Returns `true` when the server accepted the saving.
    pub async fn replicate_new(
        &self,
        profile: &mut Profile,
        remote: &dyn SavingsRemote,
        saving: &Saving,
    ) -> bool {
        let Some(token) = profile.session.as_ref().map(|s| s.token.clone()) else {
            return false;
        };

        match remote.push_saving(&token, saving).await {
            Ok(()) => {
                debug!(remote = remote.name(), saving = %saving.id, "saving replicated");
                true
            }
            Err(e) => {
                warn!(remote = remote.name(), saving = %saving.id, error = %e, "push failed, queued for later");
                self.enqueue(profile, saving.clone());
                false
            }
        }
    }

    /// Put a saving at the back of the replication queue.
    pub fn enqueue(&self, profile: &mut Profile, saving: Saving) {
        profile.pending.push(saving);
    }

    /// Push the whole queue as one batch. Returns how many savings were sent.
    ///
    /// No session or an empty queue is not an error (returns 0). On failure
    /// the queue is left untouched and the error is returned.
    pub async fn flush_pending(
        &self,
        profile: &mut Profile,
        remote: &dyn SavingsRemote,
    ) -> Result<usize, CoreError> {
        let Some(token) = profile.session.as_ref().map(|s| s.token.clone()) else {
            return Ok(0);
        };
        if profile.pending.is_empty() {
            return Ok(0);
        }

        let count = profile.pending.len();
        debug!(remote = remote.name(), count, "flushing pending savings");
        remote.push_batch(&token, &profile.pending).await?;
        profile.pending.clear();
        Ok(count)
    }

    /// Replace the local savings with the server's copy.
    /// Returns the number of savings received.
    pub async fn pull(
        &self,
        profile: &mut Profile,
        remote: &dyn SavingsRemote,
    ) -> Result<usize, CoreError> {
        let token = profile
            .session
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or(CoreError::NotAuthenticated)?;

        let savings = remote.fetch_savings(&token).await?;
        debug!(remote = remote.name(), count = savings.len(), "pulled savings");
        let count = savings.len();
        profile.savings = savings;
        Ok(count)
    }

    /// First sync after sign-in or start-up: flush the queue, then pull.
    /// The pull is skipped when the flush fails, so queued savings are
    /// never hidden by an older server list.
    pub async fn initial_sync(
        &self,
        profile: &mut Profile,
        remote: &dyn SavingsRemote,
    ) -> Result<usize, CoreError> {
        if profile.session.is_none() {
            return Err(CoreError::NotAuthenticated);
        }
        self.flush_pending(profile, remote).await?;
        self.pull(profile, remote).await
    }
}

impl Default for SyncService {
    fn default() -> Self {
        Self::new()
    }
}
