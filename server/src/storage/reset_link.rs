use std::collections::HashMap;

use jiff::{SignedDuration, Timestamp};
use tokio::sync::RwLock;
use types::{Result, err};
use uuid::Uuid;

use crate::{storage::normalize_email, uuid_v7::UuidV7Ext};

/// Single-use permission to set a new password for one account.
#[derive(Debug, Clone)]
pub struct ResetToken {
    id: Uuid,
    email: String,
    expires_at: Timestamp,
}

impl ResetToken {
    pub fn new(email: &str, ttl: SignedDuration) -> Result<Self> {
        let id = Uuid::now_v7();

        Ok(Self {
            id,
            email: normalize_email(email),
            expires_at: id.jiff_timestamp()?.checked_add(ttl)?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    pub fn verify(&self) -> Result<()> {
        if self.is_expired() {
            return Err(err!("reset link has expired"));
        }
        Ok(())
    }

    fn is_expired(&self) -> bool {
        Timestamp::now() >= self.expires_at
    }
}

#[derive(Debug, Default)]
pub struct ResetTokens {
    inner: RwLock<HashMap<Uuid, ResetToken>>,
}

impl ResetTokens {
    pub async fn insert(&self, token: ResetToken) {
        self.inner.write().await.insert(token.id, token);
    }

    /// Removes the token whether or not it is still valid.
    pub async fn consume(&self, id: Uuid) -> Result<ResetToken> {
        let token = self
            .inner
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| err!("reset link is invalid or has already been used"))?;

        token.verify()?;
        Ok(token)
    }

    pub async fn prune(&self) -> usize {
        let mut tokens = self.inner.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| !token.is_expired());
        before - tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokens_are_single_use() {
        let tokens = ResetTokens::default();
        let token = ResetToken::new("Sofia@Devias.io ", SignedDuration::from_mins(60)).unwrap();
        let id = token.id();
        tokens.insert(token).await;

        assert_eq!(tokens.consume(id).await.unwrap().email(), "sofia@devias.io");
        assert_eq!(
            tokens.consume(id).await.unwrap_err().message,
            "reset link is invalid or has already been used"
        );
    }

    #[tokio::test]
    async fn expired_tokens_are_rejected() {
        let tokens = ResetTokens::default();
        let token = ResetToken::new("sofia@devias.io", SignedDuration::from_secs(-1)).unwrap();
        let id = token.id();
        tokens.insert(token).await;

        assert_eq!(tokens.consume(id).await.unwrap_err().message, "reset link has expired");
    }

    #[tokio::test]
    async fn prune_drops_only_expired_tokens() {
        let tokens = ResetTokens::default();
        tokens
            .insert(ResetToken::new("a@devias.io", SignedDuration::from_secs(-1)).unwrap())
            .await;
        let live = ResetToken::new("b@devias.io", SignedDuration::from_mins(5)).unwrap();
        let live_id = live.id();
        tokens.insert(live).await;

        assert_eq!(tokens.prune().await, 1);
        tokens.consume(live_id).await.unwrap();
    }
}
