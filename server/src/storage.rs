pub use account::{Account, Accounts};
pub use reset_link::{ResetToken, ResetTokens};
pub use session::{Session, Sessions};

mod account;
mod reset_link;
mod session;

/// In-memory stores backing the auth client. Nothing here survives a
/// restart.
#[derive(Debug, Default)]
pub struct Storage {
    pub accounts: Accounts,
    pub sessions: Sessions,
    pub reset_tokens: ResetTokens,
}

impl Storage {
    /// Drop expired sessions and reset tokens.
    pub async fn prune(&self) {
        let sessions = self.sessions.prune().await;
        let tokens = self.reset_tokens.prune().await;

        if sessions + tokens > 0 {
            tracing::debug!(sessions, tokens, "pruned expired records");
        }
    }
}

/// Lowercased and trimmed, so lookups ignore case.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
