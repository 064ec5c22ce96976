use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use url::Url;

/// A password reset link sent to an account's email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetLink {
    pub url: Url,
    pub expires_at: Timestamp,
}
