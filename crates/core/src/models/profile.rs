use serde::{Deserialize, Serialize};

use super::income::Income;
use super::saving::Saving;
use super::session::Session;
use super::settings::Settings;

/// Everything the app keeps on the device. Serialized as a whole into the
/// local profile document.
///
/// Incomes stay here and nowhere else. Savings are mirrored to the server;
/// `pending` holds the ones that still have to be sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Whether the user finished the first-run income setup
    #[serde(default)]
    pub onboarded: bool,

    /// Declared incomes, in the order the user entered them
    #[serde(default)]
    pub incomes: Vec<Income>,

    /// Recorded savings, oldest first
    #[serde(default)]
    pub savings: Vec<Saving>,

    /// Savings not yet replicated, in insertion order
    #[serde(default)]
    pub pending: Vec<Saving>,

    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub session: Option<Session>,
}
