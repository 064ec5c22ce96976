use jiff::civil::date;
use types::overview::{
    BudgetBreakdown, BudgetSlice, CameraFeed, DayPerformance, Overview, PerformanceLevel,
    PerformanceSeries, ProjectProgress, Task, TaskStatus,
};

/// Fixed dataset served to the overview page.
pub fn mock_overview() -> Overview {
    Overview {
        progress: ProjectProgress {
            percentage: 78,
            tasks_completed: 66,
            workers: 14,
            milestones_not_completed: 16,
        },
        camera: CameraFeed {
            thumbnail: "https://placehold.co/100x80/E0E0E0/424242?text=Video".into(),
            title: "Feed from outside door".into(),
            camera_name: "Camera 002".into(),
            camera_location: "outside door".into(),
            timestamp: "03:32".into(),
            is_live: true,
        },
        tracking: tracking(),
        budget: budget(),
        tasks: tasks(),
    }
}

fn tracking() -> PerformanceSeries {
    use PerformanceLevel::*;

    let days = ["Mon", "Tue", "Wed", "Thurs", "Fri", "Sat"]
        .into_iter()
        .zip([Good, Best, Better, Best, Good, Better])
        .map(|(day, level)| DayPerformance {
            day: day.into(),
            level,
        })
        .collect();

    PerformanceSeries {
        name: "Performance".into(),
        days,
    }
}

fn budget() -> BudgetBreakdown {
    let slices = ["Total Budget", "Used Funds", "Others", "Balance"]
        .into_iter()
        .zip([40, 25, 20, 15])
        .map(|(label, percent)| BudgetSlice {
            label: label.into(),
            percent,
        })
        .collect();

    BudgetBreakdown { slices }
}

fn tasks() -> Vec<Task> {
    let task = |id: &str, name: &str, description: &str, assigned_to: &str, deadline, status| Task {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        assigned_to: assigned_to.into(),
        deadline,
        status,
    };

    vec![
        task(
            "TSK-001",
            "Lay Foundation",
            "Excavate and pour concrete for the building foundation.",
            "Logical",
            date(2025, 12, 11),
            TaskStatus::Completed,
        ),
        task(
            "TSK-002",
            "Set Up Formwork",
            "Install timber or metal forms for beams and columns.",
            "Esther",
            date(2025, 12, 21),
            TaskStatus::Ongoing,
        ),
        task(
            "TSK-003",
            "Bricklaying - Ground Floor",
            "Lay concrete blocks up to lintel level for the ground floor.",
            "Holison",
            date(2025, 12, 5),
            TaskStatus::Completed,
        ),
        task(
            "TSK-004",
            "Roof Truss Installation",
            "Assemble and install timber trusses for the roof structure.",
            "Rosemond",
            date(2025, 12, 8),
            TaskStatus::NotStarted,
        ),
        task(
            "TSK-005",
            "Floor Tiling - Bathrooms",
            "Lay ceramic floor tiles in all bathrooms and wet areas.",
            "Famous",
            date(2026, 1, 9),
            TaskStatus::Completed,
        ),
        task(
            "TSK-006",
            "Paint Interior Walls",
            "Apply two coats of emulsion paint to all interior walls.",
            "Daniel",
            date(2025, 11, 11),
            TaskStatus::Ongoing,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_slices_cover_the_donut() {
        let total: u32 = budget().slices.iter().map(|s| u32::from(s.percent)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn tasks_span_two_pages() {
        let overview = mock_overview();
        let page = types::overview::paginate(&overview.tasks, 2, types::overview::TASKS_PER_PAGE);

        assert_eq!(page.count, 2);
        assert_eq!(page.items[0].id, "TSK-006");
    }
}
