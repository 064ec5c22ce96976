use dioxus::prelude::*;
use types::{
    forms::{Form, FormErrors, SignUpValues},
    paths,
};
use ui::{AsideContent, AuthLayout};

use super::components::{RootAlert, TextField, field_error, store_session};
use crate::{Route, SessionCheck};

#[component]
pub fn SignUp() -> Element {
    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let password_confirmation = use_signal(String::new);
    let mut terms = use_signal(|| false);
    let mut pending = use_signal(|| false);
    let mut errors = use_signal(FormErrors::default);
    let mut session = use_context::<SessionCheck>();

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let values = SignUpValues {
            first_name: first_name(),
            last_name: last_name(),
            email: email().trim().to_string(),
            password: password(),
            password_confirmation: password_confirmation(),
            terms: terms(),
        };
        if let Err(invalid) = values.check() {
            errors.set(invalid);
            return;
        }

        errors.set(FormErrors::default());
        pending.set(true);
        spawn(async move {
            let result = match api::sign_up(values).await {
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
        "!Welcome",
        "Sign Up to start creating and monitoring your projects remotely",
    )
    .with_cta("Log In", paths::auth::SIGN_IN);

    rsx! {
        AuthLayout { aside,
            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle",
                "Already have an account? "
                Link { to: Route::sign_in(), "Sign in" }
            }
            form { class: "auth-fields", onsubmit,
                TextField {
                    id: "first_name",
                    label: "First name",
                    value: first_name,
                    error: field_error(errors, "first_name"),
                    disabled: pending(),
                }
                TextField {
                    id: "last_name",
                    label: "Last name",
                    value: last_name,
                    error: field_error(errors, "last_name"),
                    disabled: pending(),
                }
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
                    input_type: "password",
                    value: password,
                    error: field_error(errors, "password"),
                    disabled: pending(),
                }
                TextField {
                    id: "password_confirmation",
                    label: "Confirm Password",
                    input_type: "password",
                    value: password_confirmation,
                    error: field_error(errors, "password_confirmation"),
                    disabled: pending(),
                }
                div { class: "form-group",
                    label { class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: terms(),
                            disabled: pending(),
                            onchange: move |e| terms.set(e.checked()),
                        }
                        span { "I have read the terms and conditions" }
                    }
                    if let Some(error) = field_error(errors, "terms") {
                        div { class: "form-error", "{error}" }
                    }
                }
                RootAlert { errors }
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Creating account..." } else { "Sign up" }
                }
            }
            div { class: "alert alert-warning", "Created users are not persisted" }
        }
    }
}
