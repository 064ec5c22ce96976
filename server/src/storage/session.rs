use std::collections::HashMap;

use jiff::{SignedDuration, Timestamp};
use tokio::sync::RwLock;
use types::{Result, err};
use uuid::Uuid;

use crate::uuid_v7::UuidV7Ext;

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    account_id: Uuid,
    expires_at: Timestamp,
}

impl Session {
    pub fn new(account_id: Uuid, ttl: SignedDuration) -> Result<Self> {
        let id = Uuid::now_v7();
        let expires_at = id.jiff_timestamp()?.checked_add(ttl)?;

        Ok(Self {
            id,
            account_id,
            expires_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn account_id(&self) -> Uuid {
        self.account_id
    }

    fn is_expired(&self) -> bool {
        Timestamp::now() >= self.expires_at
    }
}

#[derive(Debug, Default)]
pub struct Sessions {
    inner: RwLock<HashMap<Uuid, Session>>,
}

impl Sessions {
    pub async fn insert(&self, session: Session) {
        self.inner.write().await.insert(session.id, session);
    }

    /// Expired sessions are removed on lookup.
    pub async fn find(&self, id: Uuid) -> Result<Session> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| err!("session not found"))?;

        if session.is_expired() {
            sessions.remove(&id);
            return Err(err!("session has expired"));
        }
        Ok(session)
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn delete_for_account(&self, account_id: Uuid) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.account_id != account_id);
        before - sessions.len()
    }

    pub async fn prune(&self) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        before - sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn expired_sessions_are_dropped_on_lookup() {
        let sessions = Sessions::default();
        let session = Session::new(Uuid::now_v7(), SignedDuration::from_secs(-1)).unwrap();
        let id = session.id();
        sessions.insert(session).await;

        let error = sessions.find(id).await.unwrap_err();
        assert_eq!(error.message, "session has expired");
        assert_eq!(sessions.find(id).await.unwrap_err().message, "session not found");
    }

    #[tokio::test]
    async fn sessions_for_an_account_are_revoked_together() {
        let sessions = Sessions::default();
        let account = Uuid::now_v7();
        let ttl = SignedDuration::from_hours(1);

        let kept = Session::new(Uuid::now_v7(), ttl).unwrap();
        let kept_id = kept.id();
        sessions.insert(kept).await;
        for _ in 0..2 {
            sessions.insert(Session::new(account, ttl).unwrap()).await;
        }

        assert_eq!(sessions.delete_for_account(account).await, 2);
        assert_eq!(sessions.find(kept_id).await.unwrap().id(), kept_id);
    }
}
