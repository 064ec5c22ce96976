use dioxus::prelude::*;
use types::overview::{
    BudgetBreakdown, CameraFeed, PROGRESS_RADIUS, PerformanceLevel, PerformanceSeries,
    ProjectProgress,
};

const ACCENT: &str = "#FF7043";
const ACCENT_LIGHT: &str = "#FFAB91";
const NEUTRAL: &str = "#BDBDBD";
const RING_TRACK: &str = "#E0E0E0";
const LIVE: &str = "#4CAF50";

/// Solid tile with a large value over a short label.
#[component]
pub fn MetricCard(
    value: String,
    label: String,
    #[props(default = ACCENT.to_string())] color: String,
) -> Element {
    rsx! {
        div { class: "metric-card", style: "background-color: {color}",
            div { class: "metric-card-value", "{value}" }
            div { class: "metric-card-label", "{label}" }
        }
    }
}

/// Coloured dot followed by a label.
#[component]
pub fn StatusIndicator(text: String, #[props(default = ACCENT.to_string())] color: String) -> Element {
    rsx! {
        div { class: "status-indicator",
            span { class: "status-indicator-dot", style: "background-color: {color}" }
            span { class: "status-indicator-text", "{text}" }
        }
    }
}

#[component]
pub fn ProjectProgressCard(progress: ProjectProgress) -> Element {
    let circumference = ProjectProgress::circumference();
    let offset = progress.stroke_dashoffset();
    let metrics = [
        (progress.tasks_completed, "milestones completed", ACCENT),
        (progress.workers, "workers", ACCENT_LIGHT),
        (progress.milestones_not_completed, "milestones not completed", NEUTRAL),
    ];

    rsx! {
        div { class: "card project-progress",
            div { class: "card-header",
                h2 { class: "card-title", "Project Progress" }
            }
            div { class: "project-progress-body",
                svg {
                    width: "120",
                    height: "120",
                    role: "img",
                    "aria-label": "{progress.percentage}% complete",
                    circle {
                        cx: "60",
                        cy: "60",
                        r: "{PROGRESS_RADIUS}",
                        stroke: RING_TRACK,
                        stroke_width: "8",
                        fill: "none",
                    }
                    circle {
                        cx: "60",
                        cy: "60",
                        r: "{PROGRESS_RADIUS}",
                        stroke: ACCENT,
                        stroke_width: "8",
                        fill: "none",
                        stroke_dasharray: "{circumference}",
                        stroke_dashoffset: "{offset}",
                    }
                }
                div { class: "project-progress-legend",
                    StatusIndicator {
                        color: "{ACCENT}",
                        text: format!("{} Tasks Completed", progress.tasks_completed),
                    }
                    StatusIndicator { color: "{ACCENT_LIGHT}", text: format!("{} Workers", progress.workers) }
                    StatusIndicator {
                        color: "{NEUTRAL}",
                        text: format!("{} Milestones Not Completed", progress.milestones_not_completed),
                    }
                }
                div { class: "project-progress-metrics",
                    for (value, label, color) in metrics {
                        MetricCard {
                            key: "{label}",
                            value: value.to_string(),
                            label: "{label}",
                            color: "{color}",
                        }
                    }
                }
            }
            div { class: "card-footer",
                a { class: "link-accent", href: "#", "All milestones →" }
            }
        }
    }
}

#[component]
pub fn CameraFeedCard(feed: CameraFeed) -> Element {
    let live_color = if feed.is_live { LIVE } else { NEUTRAL };

    rsx! {
        div { class: "card camera-feed",
            div {
                class: "camera-feed-thumbnail",
                style: "background-image: url({feed.thumbnail})",
                span { class: "camera-feed-play", "▶" }
            }
            div { class: "camera-feed-text",
                div { class: "camera-feed-title", "{feed.title}" }
                div { class: "camera-feed-caption", "{feed.caption()}" }
            }
            div { class: "camera-feed-live", style: "color: {live_color}",
                span { class: "camera-feed-icon", "●" }
                span {
                    "Go Live"
                    if feed.is_live {
                        span { class: "camera-feed-live-dot" }
                    }
                }
            }
        }
    }
}

/// Bar per day, height and colour taken from the day's level.
#[component]
pub fn ProjectTrackingCard(
    series: PerformanceSeries,
    #[props(default = "Project 1 Tracking".to_string())] title: String,
) -> Element {
    rsx! {
        div { class: "card project-tracking",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
            }
            div { class: "chart",
                div { class: "chart-y-axis",
                    for level in PerformanceLevel::ALL.iter().rev() {
                        span { key: "{level.value()}", "{level.label()}" }
                    }
                    span { "0" }
                }
                div { class: "chart-bars",
                    for (index, day) in series.days.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "chart-bar",
                            title: "{day.day}: {day.level.label()}",
                            style: "height: {day.level.bar_height()}px; background-color: {day.level.bar_color()}",
                        }
                    }
                }
                div { class: "chart-x-axis",
                    for (index, day) in series.days.iter().enumerate() {
                        span { key: "{index}", "{day.day}" }
                    }
                }
            }
        }
    }
}

/// Donut chart of the budget with a colour legend.
#[component]
pub fn BudgetBreakdownCard(budget: BudgetBreakdown) -> Element {
    let gradient = budget.conic_gradient();

    rsx! {
        div { class: "card budget-breakdown",
            div { class: "card-header",
                h2 { class: "card-title", "Budget Breakdown" }
            }
            div { class: "budget-breakdown-body",
                div { class: "donut", style: "background: {gradient}" }
                ul { class: "legend",
                    for (index, slice) in budget.slices.iter().enumerate() {
                        li { key: "{slice.label}", class: "legend-item",
                            span {
                                class: "legend-swatch",
                                style: "background-color: {BudgetBreakdown::color(index)}",
                            }
                            span { "{slice.label}" }
                            span { class: "legend-value", "{slice.percent}%" }
                        }
                    }
                }
            }
        }
    }
}
