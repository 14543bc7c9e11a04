use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::saving::Saving;

/// Server-side replication of savings.
///
/// Only `Saving` records cross this boundary. Incomes have no remote
/// counterpart at all, so keeping them on the device is enforced by the
/// type system rather than by a flag.
///
/// Delivery is at-least-once: a batch may be pushed again after a failure
/// that happened on the way back, and implementations are not expected to
/// deduplicate.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SavingsRemote: Send + Sync {
    /// Human-readable name of this remote (for logs/errors).
    fn name(&self) -> &str;

    /// Store a single newly recorded saving.
    async fn push_saving(&self, token: &str, saving: &Saving) -> Result<(), CoreError>;

    /// Store a batch of queued savings, in order.
    async fn push_batch(&self, token: &str, savings: &[Saving]) -> Result<(), CoreError>;

    /// Every saving stored for the token's user.
    async fn fetch_savings(&self, token: &str) -> Result<Vec<Saving>, CoreError>;
}
