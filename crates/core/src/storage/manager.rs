use tracing::debug;

use crate::errors::CoreError;
use crate::models::profile::Profile;

use super::format;

/// Device-local persistence of the whole profile (incomes included).
///
/// This is the only place incomes are ever written to. Replication of
/// savings goes through [`crate::remote::traits::SavingsRemote`] instead.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a profile to raw bytes. The caller decides where they go
    /// (file, browser storage, app sandbox).
    pub fn save_to_bytes(profile: &Profile) -> Result<Vec<u8>, CoreError> {
        let bytes = format::write_document(profile)?;
        debug!(
            bytes = bytes.len(),
            incomes = profile.incomes.len(),
            savings = profile.savings.len(),
            "profile serialized"
        );
        Ok(bytes)
    }

    /// Parse a profile from raw bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Profile, CoreError> {
        let profile = format::read_document(data)?;
        debug!(
            bytes = data.len(),
            incomes = profile.incomes.len(),
            savings = profile.savings.len(),
            pending = profile.pending.len(),
            "profile loaded"
        );
        Ok(profile)
    }

    /// Save the profile to a file on disk (native only).
    ///
    /// Writes `{path}.tmp` first, then renames it over `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(profile: &Profile, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(profile)?;
        let tmp = format!("{path}.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load the profile from a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Profile, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}
