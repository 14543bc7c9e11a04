use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded decision not to spend `amount`, together with how many
/// working hours that amount represented at the time.
///
/// Savings are append-only: once created they are never edited, only
/// deleted. They are the one record type that is replicated to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saving {
    /// Unique identifier
    pub id: Uuid,

    /// Money not spent
    pub amount: f64,

    /// Working hours equivalent of `amount` when it was recorded
    pub hours: f64,

    /// Month label in the local calendar (e.g. "اسفند ۱۴۰۲").
    /// Display string and grouping key only; never parsed as a date.
    pub month: String,

    /// When the saving was recorded
    pub created_at: DateTime<Utc>,
}

impl Saving {
    pub fn new(amount: f64, hours: f64, month: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            hours,
            month: month.into(),
            created_at: Utc::now(),
        }
    }
}
