use dioxus::prelude::*;
use types::{
    AuthReply, UserSession,
    forms::{NewPasswordValues, ResetPasswordValues, SignInValues, SignUpValues},
    overview::Overview,
};
#[cfg(feature = "server")]
use types::ResultExt;

#[cfg(feature = "server")]
fn auth_client() -> ServerFnResult<&'static server::AuthClient> {
    server::auth_client().with_status(500)
}

/// `None` when the request carries no valid session.
#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<UserSession>> {
    server::current_session().await.with_status(500)
}

#[post("/api/auth/sign-in")]
pub async fn sign_in(values: SignInValues) -> ServerFnResult<AuthReply> {
    auth_client()?
        .sign_in_with_password(&values)
        .await
        .with_status(500)
}

#[post("/api/auth/sign-up")]
pub async fn sign_up(values: SignUpValues) -> ServerFnResult<AuthReply> {
    auth_client()?.sign_up(&values).await.with_status(500)
}

#[post("/api/auth/reset-password")]
pub async fn reset_password(values: ResetPasswordValues) -> ServerFnResult<AuthReply> {
    let base_url = server::get_request_base_url().await.with_status(500)?;
    auth_client()?
        .reset_password(&values, &base_url)
        .await
        .with_status(500)
}

#[post("/api/auth/update-password")]
pub async fn update_password(values: NewPasswordValues) -> ServerFnResult<AuthReply> {
    auth_client()?.update_password(&values).await.with_status(500)
}

#[post("/api/dashboard/overview")]
pub async fn get_overview() -> ServerFnResult<Overview> {
    server::require_session().await.with_status(401)?;
    Ok(server::mock_overview())
}
