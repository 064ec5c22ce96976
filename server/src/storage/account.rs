use std::collections::HashMap;

use tokio::sync::RwLock;
use types::{Result, UserSession, err};
use uuid::Uuid;

use crate::storage::normalize_email;

#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub salt: Uuid,
    pub password_digest: Vec<u8>,
}

impl Account {
    pub fn to_session(&self) -> UserSession {
        UserSession {
            user_id: self.id.to_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Accounts keyed by normalized email.
#[derive(Debug, Default)]
pub struct Accounts {
    by_email: RwLock<HashMap<String, Account>>,
}

impl Accounts {
    pub async fn insert(&self, mut account: Account) -> Result<()> {
        let key = normalize_email(&account.email);
        account.email = key.clone();

        let mut accounts = self.by_email.write().await;
        if accounts.contains_key(&key) {
            return Err(err!("account {key} already exists"));
        }
        accounts.insert(key, account);
        Ok(())
    }

    pub async fn find(&self, email: &str) -> Option<Account> {
        self.by_email
            .read()
            .await
            .get(&normalize_email(email))
            .cloned()
    }

    pub async fn find_id(&self, id: Uuid) -> Option<Account> {
        self.by_email
            .read()
            .await
            .values()
            .find(|account| account.id == id)
            .cloned()
    }

    pub async fn contains(&self, email: &str) -> bool {
        self.by_email
            .read()
            .await
            .contains_key(&normalize_email(email))
    }

    pub async fn set_password(&self, email: &str, salt: Uuid, digest: Vec<u8>) -> Result<()> {
        let key = normalize_email(email);
        let mut accounts = self.by_email.write().await;
        let account = accounts
            .get_mut(&key)
            .ok_or_else(|| err!("no account for {key}"))?;

        account.salt = salt;
        account.password_digest = digest;
        Ok(())
    }
}
