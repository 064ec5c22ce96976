use dioxus::prelude::*;

mod views;

use types::{
    UserSession,
    menu::dashboard_menu,
    nav::{ExpansionState, validate_keys},
};
use ui::{Logo, MobileNav, SideNav};
use views::{DashboardPlaceholder, NewPassword, Overview, ResetPassword, SignIn, SignUp};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Overview {})]
    #[layout(GuestLayout)]
        #[route("/auth/sign-in?:error")]
        SignIn { error: Option<String> },
        #[route("/auth/sign-up")]
        SignUp {},
        #[route("/auth/reset-password")]
        ResetPassword {},
        #[route("/auth/new-password?:token")]
        NewPassword { token: Option<String> },
    #[end_layout]
    #[layout(AuthenticatedLayout)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/:..segments")]
        DashboardPlaceholder { segments: Vec<String> },
}

impl Route {
    pub fn sign_in() -> Self {
        Route::SignIn { error: None }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Nexnode" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Error information for display. `chain` holds the causes, outermost first.
#[derive(Clone, Debug, Default)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        // server errors join their causes with ": "
        let chain = message.split(": ").map(String::from).collect();
        Self { message, chain }
    }

    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError { message, .. } => Self::new(message.clone()),
            other => Self::new(other.to_string()),
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set_server_error(&mut self, err: &ServerFnError) {
        // A 401 means the session is gone; send the user back to sign in
        if let ServerFnError::ServerError { code: 401, message, .. } = err {
            tracing::info!(%message, "session rejected");
            navigator().push(Route::SignIn {
                error: Some("Your session has ended, please sign in again".to_string()),
            });
            return;
        }
        self.0.set(Some(ErrorInfo::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

/// Lets the auth forms re-run the session check after signing in.
#[derive(Clone, Copy)]
pub struct SessionCheck(Resource<ServerFnResult<Option<UserSession>>>);

impl SessionCheck {
    pub fn refresh(&mut self) {
        self.0.restart();
    }
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    if let Some(err) = error.as_ref() {
        let has_chain = err.chain.len() > 1;

        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    div { class: "error-banner-header",
                        span { class: "error-banner-message", "{err.message}" }
                        div { class: "error-banner-actions",
                            button {
                                class: "error-banner-close",
                                onclick: move |_| error_state.clear(),
                                "×"
                            }
                        }
                    }
                    if has_chain {
                        div { class: "error-details",
                            div { class: "error-chain",
                                h4 { class: "error-section-title", "Error Chain" }
                                ol { class: "error-chain-list",
                                    for (i, msg) in err.chain.iter().enumerate() {
                                        li {
                                            key: "{i}",
                                            class: "error-chain-item",
                                            "{msg}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

/// Wraps the auth screens. Signed-in users are sent to the dashboard.
#[component]
fn GuestLayout() -> Element {
    let user = use_server_future(api::get_current_user)?;
    use_context_provider(|| SessionCheck(user));

    match &*user.read() {
        Some(Ok(Some(_))) => {
            navigator().replace(Route::Overview {});
            rsx! {
                div { class: "loading", "Redirecting to dashboard..." }
            }
        }
        Some(_) => rsx! {
            Outlet::<Route> {}
        },
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}

/// Wraps the dashboard. Anonymous users are sent to sign in.
#[component]
fn AuthenticatedLayout() -> Element {
    use_context_provider(|| ErrorState(Signal::new(None)));
    let menu = use_hook(|| {
        let menu = dashboard_menu();
        if let Err(error) = validate_keys(&menu) {
            tracing::error!(%error, "invalid navigation menu");
        }
        menu
    });
    let expansion = use_signal(|| ExpansionState::new(&menu));
    let mut nav_open = use_signal(|| false);
    let route: Route = use_route();
    let pathname = route.to_string();

    let user = use_server_future(api::get_current_user)?;

    match &*user.read() {
        Some(Ok(Some(person))) => {
            let display_name = person.display_name();
            let initial = person.initial();

            rsx! {
                div { class: "app-layout",
                    SideNav { menu: menu.clone(), pathname: pathname.clone(), expansion }
                    MobileNav {
                        menu: menu.clone(),
                        pathname: pathname.clone(),
                        expansion,
                        open: nav_open(),
                        on_close: move |_| nav_open.set(false),
                    }
                    div { class: "main-column",
                        header { class: "top-bar",
                            div { class: "top-bar-left",
                                button {
                                    class: "top-bar-menu",
                                    r#type: "button",
                                    "aria-label": "Open navigation",
                                    onclick: move |_| nav_open.set(true),
                                    "☰"
                                }
                                span { class: "top-bar-logo", Logo {} }
                            }
                            div { class: "top-bar-user", title: "{person.email}",
                                div { class: "avatar", "{initial}" }
                                span { class: "top-bar-user-name", "{display_name}" }
                            }
                        }
                        main { class: "main-content",
                            ErrorBanner {}
                            Outlet::<Route> {}
                        }
                    }
                }
            }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            navigator().push(Route::sign_in());
            rsx! {
                div { class: "loading", "Redirecting to sign in..." }
            }
        }
        None => {
            rsx! {
                div { class: "loading", "Loading..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::paths;

    #[test]
    fn routes_match_shared_paths() {
        assert!(Route::sign_in().to_string().starts_with(paths::auth::SIGN_IN));
        assert_eq!(Route::SignUp {}.to_string(), paths::auth::SIGN_UP);
        assert_eq!(Route::ResetPassword {}.to_string(), paths::auth::RESET_PASSWORD);
        assert!(
            Route::NewPassword { token: None }
                .to_string()
                .starts_with(paths::auth::NEW_PASSWORD)
        );
        assert_eq!(Route::Overview {}.to_string(), paths::dashboard::OVERVIEW);
    }

    #[test]
    fn menu_targets_resolve_to_dashboard_routes() {
        let route: Route = paths::dashboard::REPORTS.parse().unwrap();
        assert_eq!(
            route,
            Route::DashboardPlaceholder {
                segments: vec!["reports".to_string()]
            }
        );

        let route: Route = paths::dashboard::OVERVIEW.parse().unwrap();
        assert_eq!(route, Route::Overview {});
    }

    #[test]
    fn error_chain_splits_causes() {
        let info = ErrorInfo::new("failed to read request headers: connection reset");
        assert_eq!(info.chain, ["failed to read request headers", "connection reset"]);
        assert_eq!(ErrorInfo::new("Invalid credentials").chain.len(), 1);
    }
}
