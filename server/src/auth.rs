use jiff::SignedDuration;
use secrecy::{ExposeSecret, SecretString};
use types::{
    AuthReply, ResetLink, Result, UserSession, err,
    forms::{Form, FormErrors, NewPasswordValues, ResetPasswordValues, SignInValues, SignUpValues},
    paths,
};
use url::Url;
use uuid::Uuid;

use crate::{
    config::Config,
    storage::{Account, ResetToken, Session, Storage},
    uuid_v7::TokenSigner,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const EMAIL_TAKEN: &str = "An account with this email already exists";
const UNKNOWN_EMAIL: &str = "No account found for this email";

/// Accounts, sessions and password resets, all held in memory.
///
/// User-facing failures come back as [`AuthReply::failed`] so the message can
/// be shown on the form. `Err` is reserved for faults and bad tokens.
pub struct AuthClient {
    storage: Storage,
    signer: TokenSigner,
    session_ttl: SignedDuration,
    reset_link_ttl: SignedDuration,
}

impl AuthClient {
    /// Builds the client and registers the demo account.
    pub async fn new(config: &Config) -> Result<Self> {
        let client = Self {
            storage: Storage::default(),
            signer: TokenSigner::new(config.session_secret.clone()),
            session_ttl: config.session_ttl(),
            reset_link_ttl: config.reset_link_ttl(),
        };

        let demo = client.new_account(
            &config.demo_email,
            &config.demo_first_name,
            &config.demo_last_name,
            &config.demo_password,
        )?;
        client.storage.accounts.insert(demo).await?;
        tracing::info!(email = %config.demo_email, "registered demo account");

        Ok(client)
    }

    fn new_account(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &SecretString,
    ) -> Result<Account> {
        let salt = Uuid::now_v7();

        Ok(Account {
            id: Uuid::now_v7(),
            email: email.to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            salt,
            password_digest: self
                .signer
                .password_digest(&salt, password.expose_secret())?,
        })
    }

    async fn start_session(&self, account: &Account) -> Result<String> {
        self.storage.prune().await;

        let session = Session::new(account.id, self.session_ttl)?;
        let token = self.signer.sign(&session.id())?;
        self.storage.sessions.insert(session).await;

        tracing::info!(email = %account.email, "session started");
        Ok(token)
    }

    async fn check_password(&self, email: &str, password: &str) -> Result<Option<Account>> {
        let Some(account) = self.storage.accounts.find(email).await else {
            return Ok(None);
        };

        let valid = self
            .signer
            .verify_password(&account.salt, password, &account.password_digest)?;

        Ok(valid.then_some(account))
    }

    pub async fn sign_in_with_password(&self, values: &SignInValues) -> Result<AuthReply> {
        if let Err(errors) = values.check() {
            return Ok(rejected(errors));
        }

        match self.check_password(&values.email, &values.password).await? {
            Some(account) => Ok(AuthReply::signed_in(self.start_session(&account).await?)),
            None => {
                tracing::info!(email = %values.email, "rejected sign in");
                Ok(AuthReply::failed(INVALID_CREDENTIALS))
            }
        }
    }

    pub async fn sign_up(&self, values: &SignUpValues) -> Result<AuthReply> {
        if let Err(errors) = values.check() {
            return Ok(rejected(errors));
        }

        if self.storage.accounts.contains(&values.email).await {
            return Ok(AuthReply::failed(EMAIL_TAKEN));
        }

        let account = self.new_account(
            &values.email,
            &values.first_name,
            &values.last_name,
            &SecretString::from(values.password.clone()),
        )?;
        // Two sign ups for one address can race past the check above.
        if self.storage.accounts.insert(account.clone()).await.is_err() {
            return Ok(AuthReply::failed(EMAIL_TAKEN));
        }
        tracing::info!(email = %account.email, "account created");

        Ok(AuthReply::signed_in(self.start_session(&account).await?))
    }

    /// Issues a reset link and writes it to the log in place of an email.
    pub async fn reset_password(
        &self,
        values: &ResetPasswordValues,
        base_url: &Url,
    ) -> Result<AuthReply> {
        if let Err(errors) = values.check() {
            return Ok(rejected(errors));
        }

        match self.issue_reset_link(&values.email, base_url).await? {
            Some(link) => {
                tracing::info!(
                    email = %values.email,
                    url = %link.url,
                    expires_at = %link.expires_at,
                    "password reset link issued"
                );
                Ok(AuthReply::ok())
            }
            None => Ok(AuthReply::failed(UNKNOWN_EMAIL)),
        }
    }

    pub(crate) async fn issue_reset_link(
        &self,
        email: &str,
        base_url: &Url,
    ) -> Result<Option<ResetLink>> {
        if !self.storage.accounts.contains(email).await {
            return Ok(None);
        }
        self.storage.prune().await;

        let token = ResetToken::new(email, self.reset_link_ttl)?;
        let mut url = base_url.join(paths::auth::NEW_PASSWORD)?;
        url.query_pairs_mut()
            .append_pair("token", &self.signer.sign(&token.id())?);

        let link = ResetLink {
            url,
            expires_at: token.expires_at(),
        };
        self.storage.reset_tokens.insert(token).await;

        Ok(Some(link))
    }

    /// Sets a new password, proven either by a reset token or by the current
    /// password. Every open session of the account is ended.
    pub async fn update_password(&self, values: &NewPasswordValues) -> Result<AuthReply> {
        if let Err(errors) = values.check() {
            return Ok(rejected(errors));
        }

        let account = match &values.token {
            Some(token) => {
                let reset = match self.consume_reset_token(token).await {
                    Ok(reset) => reset,
                    Err(error) => return Ok(AuthReply::failed(error.message)),
                };
                self.storage.accounts.find(reset.email()).await
            }
            None => {
                self.check_password(&values.email, &values.old_password)
                    .await?
            }
        };
        let Some(account) = account else {
            return Ok(AuthReply::failed(INVALID_CREDENTIALS));
        };

        let salt = Uuid::now_v7();
        let digest = self.signer.password_digest(&salt, &values.password)?;
        self.storage
            .accounts
            .set_password(&account.email, salt, digest)
            .await?;

        let ended = self.storage.sessions.delete_for_account(account.id).await;
        tracing::info!(email = %account.email, ended, "password changed");

        Ok(AuthReply::ok())
    }

    async fn consume_reset_token(&self, token: &str) -> Result<ResetToken> {
        let id = self
            .signer
            .verify(token)
            .map_err(|_| err!("reset link is invalid or has already been used"))?;

        self.storage.reset_tokens.consume(id).await
    }

    /// The signed-in user for a session token.
    pub async fn current_user(&self, token: &str) -> Result<UserSession> {
        let id = self.signer.verify(token)?;
        let session = self.storage.sessions.find(id).await?;

        let account = self
            .storage
            .accounts
            .find_id(session.account_id())
            .await
            .ok_or_else(|| err!("session refers to a missing account"))?;

        Ok(account.to_session())
    }

    /// Ends a session. Unknown sessions are ignored.
    pub async fn sign_out(&self, token: &str) -> Result<()> {
        let id = self.signer.verify(token)?;

        if self.storage.sessions.delete(id).await {
            tracing::info!(session = %id, "session ended");
        }
        Ok(())
    }
}

fn rejected(errors: FormErrors) -> AuthReply {
    AuthReply::failed(errors.first().unwrap_or("Invalid form"))
}
