use dioxus::document::eval;
use dioxus::prelude::*;
use types::{AuthReply, forms::FormErrors, store_session_script};

/// Labelled input bound to a signal, with its validation message.
#[component]
pub fn TextField(
    id: String,
    label: String,
    mut value: Signal<String>,
    #[props(default = "text".to_string())] input_type: String,
    error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: if error.is_some() { "form-input invalid" } else { "form-input" },
                r#type: "{input_type}",
                disabled,
                value: "{value}",
                oninput: move |e| value.set(e.value()),
            }
            if let Some(error) = error.as_ref() {
                div { class: "form-error", "{error}" }
            }
        }
    }
}

/// The single server-side message for a form.
#[component]
pub fn RootAlert(errors: Signal<FormErrors>) -> Element {
    let errors = errors.read();

    rsx! {
        if let Some(message) = errors.root() {
            div { class: "alert alert-error", role: "alert", "{message}" }
        }
    }
}

/// Field message from a form error signal.
pub fn field_error(errors: Signal<FormErrors>, name: &str) -> Option<String> {
    errors.read().field(name).map(String::from)
}

/// Store the session cookie from a successful reply. The error is the text
/// to show on the form.
pub async fn store_session(reply: AuthReply) -> Result<(), String> {
    if let Some(error) = reply.error {
        return Err(error);
    }

    let script = reply
        .session
        .as_deref()
        .and_then(store_session_script)
        .ok_or_else(|| "The server did not return a valid session".to_string())?;

    eval(&format!("{script} dioxus.send(true);"))
        .recv::<bool>()
        .await
        .map_err(|error| {
            tracing::warn!(?error, "failed to store session cookie");
            "Could not store the session in this browser".to_string()
        })?;

    Ok(())
}
