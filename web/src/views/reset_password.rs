use dioxus::prelude::*;
use types::forms::{Form, FormErrors, ResetPasswordValues};
use ui::{AsideContent, AuthLayout};

use super::components::{RootAlert, TextField, field_error};
use crate::Route;

#[component]
pub fn ResetPassword() -> Element {
    let email = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut sent = use_signal(|| false);
    let mut errors = use_signal(FormErrors::default);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let values = ResetPasswordValues {
            email: email().trim().to_string(),
        };
        if let Err(invalid) = values.check() {
            errors.set(invalid);
            return;
        }

        errors.set(FormErrors::default());
        pending.set(true);
        spawn(async move {
            match api::reset_password(values).await {
                Ok(reply) => match reply.error {
                    Some(message) => errors.set(FormErrors::root_error(message)),
                    None => sent.set(true),
                },
                Err(error) => errors.set(FormErrors::root_error(error.to_string())),
            }
            pending.set(false);
        });
    };

    let aside = AsideContent::new(
        "? Forgot Password",
        "Input a Valid E-mail to create a New Password",
    );

    rsx! {
        AuthLayout { aside,
            h1 { class: "auth-title", "Reset password" }
            if sent() {
                div { class: "alert alert-success",
                    "A password reset link has been issued for "
                    strong { "{email}" }
                    ". Check the server log for the link."
                }
            } else {
                form { class: "auth-fields", onsubmit,
                    TextField {
                        id: "email",
                        label: "Email address",
                        input_type: "email",
                        value: email,
                        error: field_error(errors, "email"),
                        disabled: pending(),
                    }
                    RootAlert { errors }
                    button {
                        class: "btn btn-primary btn-lg",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() { "Sending..." } else { "Send recovery link" }
                    }
                }
            }
            p { class: "auth-subtitle",
                Link { to: Route::sign_in(), "Back to Login" }
            }
        }
    }
}
