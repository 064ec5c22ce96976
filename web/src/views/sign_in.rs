use dioxus::prelude::*;
use types::{
    forms::{Form, FormErrors, SignInValues},
    paths,
};
use ui::{AsideContent, AuthLayout};

use super::components::{RootAlert, TextField, field_error, store_session};
use crate::{Route, SessionCheck};

#[component]
pub fn SignIn(error: Option<String>) -> Element {
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut pending = use_signal(|| false);
    let mut errors = use_signal(|| error.map(FormErrors::root_error).unwrap_or_default());
    let mut session = use_context::<SessionCheck>();

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let values = SignInValues {
            email: email().trim().to_string(),
            password: password(),
        };
        if let Err(invalid) = values.check() {
            errors.set(invalid);
            return;
        }

        errors.set(FormErrors::default());
        pending.set(true);
        spawn(async move {
            let result = match api::sign_in(values).await {
                Ok(reply) => store_session(reply).await,
                Err(error) => Err(error.to_string()),
            };
            match result {
                Ok(()) => session.refresh(),
                Err(message) => errors.set(FormErrors::root_error(message)),
            }
            pending.set(false);
        });
    };

    let aside = AsideContent::new(
        "!Welcome Back",
        "To keep connected with us please login with your personal info",
    )
    .with_cta("Sign Up", paths::auth::SIGN_UP);
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        AuthLayout { aside,
            h1 { class: "auth-title", "Sign in" }
            p { class: "auth-subtitle",
                "Don't have an account? "
                Link { to: Route::SignUp {}, "Sign up" }
            }
            form { class: "auth-fields", onsubmit,
                TextField {
                    id: "email",
                    label: "Email address",
                    input_type: "email",
                    value: email,
                    error: field_error(errors, "email"),
                    disabled: pending(),
                }
                TextField {
                    id: "password",
                    label: "Password",
                    input_type: "{password_type}",
                    value: password,
                    error: field_error(errors, "password"),
                    disabled: pending(),
                }
                div { class: "auth-row",
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| show_password.set(!show_password()),
                        if show_password() { "Hide password" } else { "Show password" }
                    }
                    Link { to: Route::ResetPassword {}, class: "text-muted", "Forgot password?" }
                }
                RootAlert { errors }
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Signing in..." } else { "Sign in" }
                }
            }
            div { class: "alert alert-warning",
                "Use "
                strong { "sofia@devias.io" }
                " with password "
                strong { "Secret1" }
            }
        }
    }
}
