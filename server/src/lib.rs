mod auth;
mod auth_routes;
mod config;
mod overview;
mod storage;
mod uuid_v7;

use std::sync::OnceLock;

use axum::Router;
use axum::http::HeaderMap;
use cookie::Cookie;
use dioxus::fullstack::FullstackContext;
use tracing_subscriber::EnvFilter;
use types::{Result, SESSION_COOKIE_NAME, UserSession, err};
use url::Url;

pub use crate::auth::AuthClient;
use crate::auth_routes::auth_router;
pub use crate::config::Config;
pub use crate::overview::mock_overview;

static AUTH_CLIENT: OnceLock<AuthClient> = OnceLock::new();

/// `RUST_LOG` wins over the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // The dev server may have installed a subscriber already.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Loads configuration, builds the auth client and returns the extra routes
/// to merge into the app router.
pub async fn init() -> anyhow::Result<Router> {
    let config = Config::load().map_err(anyhow::Error::msg)?;
    tracing::info!(site = %config.site_name, "starting server");

    let client = AuthClient::new(&config)
        .await
        .map_err(anyhow::Error::msg)?;
    AUTH_CLIENT
        .set(client)
        .map_err(|_| anyhow::anyhow!("server already initialised"))?;

    Ok(auth_router())
}

pub fn auth_client() -> Result<&'static AuthClient> {
    AUTH_CLIENT
        .get()
        .ok_or_else(|| err!("server is not initialised"))
}

async fn request_headers() -> Result<HeaderMap> {
    FullstackContext::extract()
        .await
        .map_err(|error| err!("failed to read request headers: {error}"))
}

pub async fn get_request_base_url() -> Result<Url> {
    let headers = request_headers().await?;

    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get("host"))
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| err!("no host header in request"))?;

    // Use X-Forwarded-Proto if set (by reverse proxy), otherwise assume http
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    Ok(Url::parse(&format!("{proto}://{host}"))?)
}

/// Session token from a `Cookie` header value.
pub fn session_token_from_cookies(header: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(|cookie| cookie.ok())
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}

pub async fn get_session_token() -> Result<String> {
    let headers = request_headers().await?;

    headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(session_token_from_cookies)
        .ok_or_else(|| err!("session cookie not found"))
}

/// The signed-in user for the current request.
pub async fn require_session() -> Result<UserSession> {
    let token = get_session_token().await?;
    auth_client()?.current_user(&token).await
}

/// Like [`require_session`], but a missing, forged or expired session is
/// `Ok(None)`. Only faults are errors.
pub async fn current_session() -> Result<Option<UserSession>> {
    let headers = request_headers().await?;
    let cookies = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok());

    Ok(session_from_cookies(auth_client()?, cookies).await)
}

async fn session_from_cookies(client: &AuthClient, cookies: Option<&str>) -> Option<UserSession> {
    let token = cookies.and_then(session_token_from_cookies)?;

    match client.current_user(&token).await {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::debug!(%error, "ignoring session cookie");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;
    use types::forms::SignInValues;

    #[test]
    fn finds_the_session_cookie() {
        let header = "theme=dark; nexnode_session=abc.def; other=1";
        assert_eq!(session_token_from_cookies(header).as_deref(), Some("abc.def"));
    }

    #[test]
    fn ignores_missing_or_cleared_cookie() {
        assert_eq!(session_token_from_cookies("theme=dark"), None);
        assert_eq!(session_token_from_cookies("nexnode_session="), None);
        assert_eq!(session_token_from_cookies(""), None);
    }

    #[tokio::test]
    async fn cookie_session_resolves_to_the_user() {
        let client = AuthClient::new(&test_config()).await.unwrap();
        let reply = client
            .sign_in_with_password(&SignInValues {
                email: "sofia@devias.io".into(),
                password: "Secret1".into(),
            })
            .await
            .unwrap();
        let header = format!("theme=dark; nexnode_session={}", reply.session.unwrap());

        let user = session_from_cookies(&client, Some(&header)).await.unwrap();
        assert_eq!(user.email, "sofia@devias.io");
    }

    #[tokio::test]
    async fn bad_or_missing_cookie_is_anonymous() {
        let client = AuthClient::new(&test_config()).await.unwrap();

        assert_eq!(session_from_cookies(&client, None).await, None);
        assert_eq!(session_from_cookies(&client, Some("theme=dark")).await, None);
        assert_eq!(
            session_from_cookies(&client, Some("nexnode_session=forged.token")).await,
            None
        );
    }
}
