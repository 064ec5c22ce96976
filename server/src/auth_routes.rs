use axum::{
    Router,
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use cookie::{Cookie, SameSite};
use types::{SESSION_COOKIE_NAME, paths};

use crate::{auth_client, session_token_from_cookies};

pub fn auth_router() -> Router {
    Router::new().route(paths::auth::SIGN_OUT, get(sign_out))
}

async fn sign_out(headers: HeaderMap) -> Response {
    let token = headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(session_token_from_cookies);

    if let Some(token) = token {
        let result = match auth_client() {
            Ok(client) => client.sign_out(&token).await,
            Err(error) => Err(error),
        };
        if let Err(error) = result {
            tracing::warn!(%error, "failed to end session");
        }
    }

    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    let mut response = Redirect::to(paths::auth::SIGN_IN).into_response();
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => {
            response.headers_mut().insert(SET_COOKIE, value);
        }
        Err(error) => tracing::warn!(%error, "failed to clear session cookie"),
    }

    response
}
