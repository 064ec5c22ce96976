use dioxus::prelude::*;
use types::overview::{TASKS_PER_PAGE, Task, paginate, sort_by_deadline};

/// Paged task list. "Priority" orders rows by deadline.
#[component]
pub fn AssignedTasksTable(tasks: Vec<Task>) -> Element {
    let mut page = use_signal(|| 1usize);
    let mut by_deadline = use_signal(|| false);

    let mut rows = tasks.clone();
    if by_deadline() {
        sort_by_deadline(&mut rows);
    }
    let current = paginate(&rows, page(), TASKS_PER_PAGE);
    let (number, count) = (current.number, current.count);
    let (has_previous, has_next) = (current.has_previous(), current.has_next());

    rsx! {
        div { class: "card assigned-tasks",
            div { class: "card-header",
                h2 { class: "card-title", "List of Assigned Tasks" }
                div { class: "card-actions",
                    button { class: "btn btn-primary", r#type: "button", "+ Assign Task" }
                    button {
                        class: if by_deadline() { "btn btn-secondary active" } else { "btn btn-secondary" },
                        r#type: "button",
                        onclick: move |_| {
                            by_deadline.set(!by_deadline());
                            page.set(1);
                        },
                        "Priority"
                    }
                    button { class: "btn btn-secondary", r#type: "button", "Download" }
                }
            }
            div { class: "table-container",
                table {
                    thead {
                        tr {
                            th { "Task" }
                            th { "Task Description" }
                            th { "Assigned to" }
                            th { "Deadline" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for task in current.items.iter() {
                            tr { key: "{task.id}",
                                td { "{task.name}" }
                                td { class: "task-description", "{task.description}" }
                                td { "{task.assigned_to}" }
                                td { "{task.deadline_label()}" }
                                td {
                                    span { class: "chip chip-{task.status.tone()}", "{task.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "card-footer pagination",
                button {
                    class: "btn btn-secondary btn-sm",
                    r#type: "button",
                    disabled: !has_previous,
                    onclick: move |_| page.set(number.saturating_sub(1)),
                    "Previous"
                }
                span { class: "text-muted", "Page {number} of {count}" }
                button {
                    class: "btn btn-secondary btn-sm",
                    r#type: "button",
                    disabled: !has_next,
                    onclick: move |_| page.set(number + 1),
                    "Next"
                }
            }
        }
    }
}
