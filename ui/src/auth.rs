use dioxus::prelude::*;
use types::paths;

use crate::nav::Logo;

#[derive(Debug, Clone, PartialEq)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

/// Text of the panel beside an auth form.
#[derive(Debug, Clone, PartialEq)]
pub struct AsideContent {
    pub title: String,
    pub description: String,
    pub cta: Option<Cta>,
}

impl AsideContent {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            cta: None,
        }
    }

    pub fn with_cta(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.cta = Some(Cta {
            label: label.into(),
            href: href.into(),
        });
        self
    }
}

#[component]
fn AuthAside(content: AsideContent) -> Element {
    rsx! {
        aside { class: "auth-aside",
            Link { to: paths::HOME, class: "auth-aside-logo", Logo {} }
            div { class: "auth-aside-body",
                h2 { class: "auth-aside-title", "{content.title}" }
                p { class: "auth-aside-description", "{content.description}" }
                if let Some(cta) = &content.cta {
                    Link { to: cta.href.clone(), class: "btn btn-outline-light", "{cta.label}" }
                }
            }
        }
    }
}

/// Form column beside an optional aside panel.
#[component]
pub fn AuthLayout(aside: Option<AsideContent>, children: Element) -> Element {
    rsx! {
        div { class: "auth-layout",
            div { class: "auth-form-column",
                div { class: "auth-form", {children} }
            }
            if let Some(content) = aside {
                AuthAside { content }
            }
        }
    }
}
