use dioxus::prelude::*;
use types::forms::{Form, FormErrors, NewPasswordValues};
use ui::{AsideContent, AuthLayout};

use super::components::{RootAlert, TextField, field_error};
use crate::Route;

/// Set a new password, either from a reset link's token or with the current
/// credentials.
#[component]
pub fn NewPassword(token: Option<String>) -> Element {
    let email = use_signal(String::new);
    let old_password = use_signal(String::new);
    let password = use_signal(String::new);
    let password_confirmation = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut updated = use_signal(|| false);
    let mut errors = use_signal(FormErrors::default);

    let has_token = token.is_some();
    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let values = NewPasswordValues {
            token: token.clone(),
            email: email().trim().to_string(),
            old_password: old_password(),
            password: password(),
            password_confirmation: password_confirmation(),
        };
        if let Err(invalid) = values.check() {
            errors.set(invalid);
            return;
        }

        errors.set(FormErrors::default());
        pending.set(true);
        spawn(async move {
            match api::update_password(values).await {
                Ok(reply) => match reply.error {
                    Some(message) => errors.set(FormErrors::root_error(message)),
                    None => updated.set(true),
                },
                Err(error) => errors.set(FormErrors::root_error(error.to_string())),
            }
            pending.set(false);
        });
    };

    let aside = AsideContent::new(
        "? Change Password",
        "Fill In the Form to Change your password",
    );

    rsx! {
        AuthLayout { aside,
            h1 { class: "auth-title", "Change password" }
            if updated() {
                div { class: "alert alert-success", "Your password has been changed." }
                Link { to: Route::sign_in(), class: "btn btn-primary btn-lg", "Sign in" }
            } else {
                form { class: "auth-fields", onsubmit,
                    if !has_token {
                        TextField {
                            id: "email",
                            label: "Email address",
                            input_type: "email",
                            value: email,
                            error: field_error(errors, "email"),
                            disabled: pending(),
                        }
                        TextField {
                            id: "old_password",
                            label: "Current password",
                            input_type: "password",
                            value: old_password,
                            error: field_error(errors, "old_password"),
                            disabled: pending(),
                        }
                    }
                    TextField {
                        id: "password",
                        label: "New password",
                        input_type: "password",
                        value: password,
                        error: field_error(errors, "password"),
                        disabled: pending(),
                    }
                    TextField {
                        id: "password_confirmation",
                        label: "Confirm new password",
                        input_type: "password",
                        value: password_confirmation,
                        error: field_error(errors, "password_confirmation"),
                        disabled: pending(),
                    }
                    RootAlert { errors }
                    button {
                        class: "btn btn-primary btn-lg",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() { "Saving..." } else { "Change password" }
                    }
                }
                p { class: "auth-subtitle",
                    Link { to: Route::sign_in(), "Back to Login" }
                }
            }
        }
    }
}
