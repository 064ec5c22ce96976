use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE_NAME: &str = "nexnode_session";

/// The signed-in user, as returned by the session check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserSession {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn initial(&self) -> String {
        self.first_name
            .chars()
            .next()
            .or_else(|| self.email.chars().next())
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

/// Result of an auth call. `error` is shown to the user verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthReply {
    pub error: Option<String>,
    /// Signed session token, present after a successful sign in or sign up.
    pub session: Option<String>,
}

impl AuthReply {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn signed_in(token: String) -> Self {
        Self {
            error: None,
            session: Some(token),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            session: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Script storing a session token in the session cookie from the browser.
///
/// Returns `None` for tokens with characters outside the token alphabet.
pub fn store_session_script(token: &str) -> Option<String> {
    let valid = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    valid.then(|| format!("document.cookie = '{SESSION_COOKIE_NAME}={token}; path=/; samesite=lax';"))
}
