use crate::{Route, use_error};
use dioxus::prelude::*;
use types::overview::Overview as OverviewData;
use ui::{
    AssignedTasksTable, BudgetBreakdownCard, CameraFeedCard, ProjectProgressCard,
    ProjectTrackingCard,
};

#[component]
pub fn Overview() -> Element {
    let mut overview = use_signal(|| None::<OverviewData>);
    let mut error_state = use_error();

    use_effect(move || {
        spawn(async move {
            match api::get_overview().await {
                Ok(data) => overview.set(Some(data)),
                Err(e) => error_state.set_server_error(&e),
            }
        });
    });

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Overview" }
            }
            if let Some(data) = overview() {
                div { class: "overview-grid",
                    ProjectProgressCard { progress: data.progress }
                    CameraFeedCard { feed: data.camera }
                    ProjectTrackingCard { series: data.tracking }
                    BudgetBreakdownCard { budget: data.budget }
                }
                AssignedTasksTable { tasks: data.tasks }
            } else {
                div { class: "loading", "Loading..." }
            }
        }
    }
}

/// Stand-in for menu targets that have no page of their own.
#[component]
pub fn DashboardPlaceholder(segments: Vec<String>) -> Element {
    let page = segments.join("/");

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "/dashboard/{page}" }
                p { class: "page-subtitle", "This page is not available yet." }
            }
            Link { to: Route::Overview {}, class: "btn btn-secondary", "Back to overview" }
        }
    }
}
