use dioxus::prelude::*;
use types::{
    menu::{FOOTER, scrolling_sections},
    nav::{ExpansionState, MenuEntry, section_groups},
    paths,
};

use crate::icons::icon_glyph;

/// Left padding of a row at `depth`, in pixels.
pub fn nav_indent(depth: usize) -> usize {
    16 + depth * 16
}

#[component]
pub fn Logo() -> Element {
    rsx! {
        span { class: "logo",
            span { class: "logo-mark", "N" }
            span { class: "logo-text", "Nexnode" }
        }
    }
}

/// One entry of the tree, plus its children when expanded.
///
/// Branch headers are buttons and only flip their flag in `expansion`.
/// Leaves are links to their target.
#[component]
pub fn NavItem(
    entry: MenuEntry,
    pathname: String,
    #[props(default)] depth: usize,
    expansion: Signal<ExpansionState>,
    #[props(default)] on_navigate: EventHandler<()>,
) -> Element {
    let active = entry.is_active(&pathname);
    let style = format!("padding-left: {}px", nav_indent(depth));
    let glyph = entry.icon.as_deref().and_then(icon_glyph);

    let mut row_class = String::from("nav-item");
    if active {
        row_class.push_str(" active");
    }
    if entry.disabled {
        row_class.push_str(" disabled");
    }

    let marker = rsx! {
        if let Some(glyph) = glyph {
            span { class: "nav-item-icon", "{glyph}" }
        } else if depth > 0 {
            span { class: "nav-item-dot" }
        }
    };
    let title = rsx! {
        span { class: "nav-item-title", "{entry.title}" }
    };

    if entry.is_branch() {
        let expanded = expansion.read().is_expanded(&entry.key);
        let header = entry.clone();

        return rsx! {
            li {
                button {
                    r#type: "button",
                    class: "{row_class}",
                    style: "{style}",
                    disabled: entry.disabled,
                    aria_expanded: "{expanded}",
                    onclick: move |_| {
                        expansion.write().activate(&header);
                    },
                    {marker}
                    {title}
                    span { class: "nav-item-caret", if expanded { "▴" } else { "▾" } }
                }
                if expanded {
                    ul { class: "nav-list",
                        for child in entry.children.iter() {
                            NavItem {
                                key: "{child.key}",
                                entry: child.clone(),
                                pathname: pathname.clone(),
                                depth: depth + 1,
                                expansion,
                                on_navigate,
                            }
                        }
                    }
                }
            }
        };
    }

    let href = entry.href.clone().unwrap_or_default();
    rsx! {
        li {
            if entry.disabled || entry.href.is_none() {
                span { class: "{row_class}", style: "{style}", {marker} {title} }
            } else if entry.external {
                a {
                    class: "{row_class}",
                    style: "{style}",
                    href: "{href}",
                    rel: "external",
                    {marker}
                    {title}
                }
            } else {
                Link {
                    class: "{row_class}",
                    to: href,
                    onclick: move |_| on_navigate.call(()),
                    span { class: "nav-item-row", style: "{style}", {marker} {title} }
                }
            }
        }
    }
}

/// Section lists in display order with the footer pinned after them.
#[component]
fn NavSections(
    menu: Vec<MenuEntry>,
    pathname: String,
    expansion: Signal<ExpansionState>,
    #[props(default)] on_navigate: EventHandler<()>,
) -> Element {
    let sections = section_groups(&menu);
    let footer = sections.get(FOOTER).unwrap_or_default();

    rsx! {
        nav { class: "nav-sections",
            for (index, group) in scrolling_sections(&sections).into_iter().enumerate() {
                div { key: "{group.label}", class: "nav-section",
                    if index > 0 {
                        hr { class: "nav-divider" }
                    }
                    h6 { class: "nav-section-title", "{group.label}" }
                    ul { class: "nav-list",
                        for entry in group.entries.iter() {
                            NavItem {
                                key: "{entry.key}",
                                entry: (*entry).clone(),
                                pathname: pathname.clone(),
                                expansion,
                                on_navigate,
                            }
                        }
                    }
                }
            }
        }
        if !footer.is_empty() {
            div { class: "nav-footer",
                ul { class: "nav-list",
                    for entry in footer.iter() {
                        NavItem {
                            key: "{entry.key}",
                            entry: (*entry).clone(),
                            pathname: pathname.clone(),
                            expansion,
                            on_navigate,
                        }
                    }
                }
            }
        }
    }
}

/// Fixed desktop navigation.
#[component]
pub fn SideNav(
    menu: Vec<MenuEntry>,
    pathname: String,
    expansion: Signal<ExpansionState>,
) -> Element {
    rsx! {
        aside { class: "side-nav",
            div { class: "side-nav-header",
                Link { to: paths::HOME, Logo {} }
            }
            hr { class: "nav-divider" }
            NavSections { menu, pathname, expansion }
        }
    }
}

/// Drawer version of [`SideNav`] for narrow screens. Following a link
/// closes it.
#[component]
pub fn MobileNav(
    menu: Vec<MenuEntry>,
    pathname: String,
    expansion: Signal<ExpansionState>,
    open: bool,
    on_close: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "mobile-nav-backdrop", onclick: move |_| on_close.call(()) }
        aside { class: "mobile-nav",
            div { class: "side-nav-header",
                Link { to: paths::HOME, onclick: move |_| on_close.call(()), Logo {} }
                div { class: "workspace-box",
                    div {
                        div { class: "workspace-label", "Workspace" }
                        div { class: "workspace-name", "Devias" }
                    }
                    span { class: "workspace-caret", "⇕" }
                }
            }
            hr { class: "nav-divider" }
            NavSections {
                menu,
                pathname,
                expansion,
                on_navigate: move |_| on_close.call(()),
            }
            div { class: "promo",
                h6 { class: "promo-title", "Need more features?" }
                p { class: "promo-text", "Check out our Pro solution template." }
            }
        }
    }
}
