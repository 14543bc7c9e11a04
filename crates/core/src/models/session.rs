use serde::{Deserialize, Serialize};

/// A signed-in user as handed over by the external auth service.
///
/// The token is only ever sent as a bearer credential to the savings
/// backend; it is kept out of `Debug` output.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub token: String,
}

impl Session {
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}
