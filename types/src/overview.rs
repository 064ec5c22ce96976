//! Records shown on the dashboard overview and the values derived from them.

use std::f64::consts::PI;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Everything the overview page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub progress: ProjectProgress,
    pub camera: CameraFeed,
    pub tracking: PerformanceSeries,
    pub budget: BudgetBreakdown,
    pub tasks: Vec<Task>,
}

/// Radius of the progress ring, in SVG user units.
pub const PROGRESS_RADIUS: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProgress {
    /// Percentage of the project completed, 0 to 100.
    pub percentage: u8,
    pub tasks_completed: u32,
    pub workers: u32,
    pub milestones_not_completed: u32,
}

impl ProjectProgress {
    pub fn circumference() -> f64 {
        2.0 * PI * PROGRESS_RADIUS
    }

    /// Dash offset that leaves `percentage` of the ring stroked.
    pub fn stroke_dashoffset(&self) -> f64 {
        let circumference = Self::circumference();
        let fraction = f64::from(self.percentage.min(100)) / 100.0;
        circumference - fraction * circumference
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraFeed {
    pub thumbnail: String,
    pub title: String,
    pub camera_name: String,
    pub camera_location: String,
    pub timestamp: String,
    pub is_live: bool,
}

impl CameraFeed {
    pub fn caption(&self) -> String {
        format!(
            "{} | {} | {}",
            self.camera_name, self.camera_location, self.timestamp
        )
    }
}

/// Qualitative daily performance, plotted as 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Good = 1,
    Better = 2,
    Best = 3,
}

/// Bar colours indexed by level.
pub const BAR_COLORS: [&str; 4] = ["#BDBDBD", "#FFAB91", "#FF7043", "#FFE0B2"];
/// Pixels per level.
pub const BAR_HEIGHT_SCALE: u32 = 50;

impl PerformanceLevel {
    pub const ALL: [PerformanceLevel; 3] = [Self::Good, Self::Better, Self::Best];

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Good),
            2 => Some(Self::Better),
            3 => Some(Self::Best),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Better => "Better",
            Self::Best => "Best",
        }
    }

    pub fn bar_height(self) -> u32 {
        u32::from(self.value()) * BAR_HEIGHT_SCALE
    }

    pub fn bar_color(self) -> &'static str {
        BAR_COLORS[usize::from(self.value()) - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPerformance {
    pub day: String,
    pub level: PerformanceLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSeries {
    pub name: String,
    pub days: Vec<DayPerformance>,
}

/// Slice colours in legend order.
pub const BUDGET_COLORS: [&str; 4] = ["#757575", "#FF7043", "#FFAB91", "#FFE0B2"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSlice {
    pub label: String,
    /// Share of the whole, in percent.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub slices: Vec<BudgetSlice>,
}

impl BudgetBreakdown {
    pub fn color(index: usize) -> &'static str {
        BUDGET_COLORS[index % BUDGET_COLORS.len()]
    }

    /// CSS donut fill. Slices are laid end to end and the last one is
    /// stretched to close the circle.
    pub fn conic_gradient(&self) -> String {
        if self.slices.is_empty() {
            return "conic-gradient(#E0E0E0 0% 100%)".to_string();
        }

        let mut start = 0u32;
        let stops: Vec<String> = self
            .slices
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                let end = if index + 1 == self.slices.len() {
                    100
                } else {
                    (start + u32::from(slice.percent)).min(100)
                };
                let stop = format!("{} {start}% {end}%", Self::color(index));
                start = end;
                stop
            })
            .collect();

        format!("conic-gradient({})", stops.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Completed,
    Ongoing,
    NotStarted,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Ongoing => "Ongoing",
            Self::NotStarted => "Not Started",
        }
    }

    /// Chip colour role.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Completed => "success",
            Self::Ongoing => "warning",
            Self::NotStarted => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub assigned_to: String,
    pub deadline: Date,
    pub status: TaskStatus,
}

impl Task {
    pub fn deadline_label(&self) -> String {
        self.deadline.strftime("%d/%m/%Y").to_string()
    }
}

pub const TASKS_PER_PAGE: usize = 5;

/// One page of a list. `number` is 1-based and `count` is at least 1.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub count: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.count
    }
}

/// Slice out page `number`, clamped into range.
pub fn paginate<T>(items: &[T], number: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let count = items.len().div_ceil(per_page).max(1);
    let number = number.clamp(1, count);
    let start = ((number - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Page {
        items: &items[start..end],
        number,
        count,
    }
}

/// Earliest deadline first. Ties keep their order.
pub fn sort_by_deadline(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| task.deadline);
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn task(id: &str, deadline: Date) -> Task {
        Task {
            id: id.into(),
            name: "Lay Foundation".into(),
            description: "Excavate and pour concrete.".into(),
            assigned_to: "Logical".into(),
            deadline,
            status: TaskStatus::Completed,
        }
    }

    #[test]
    fn ring_offset_follows_percentage() {
        let progress = |percentage| ProjectProgress {
            percentage,
            tasks_completed: 66,
            workers: 14,
            milestones_not_completed: 16,
        };
        let circumference = ProjectProgress::circumference();

        assert!((progress(0).stroke_dashoffset() - circumference).abs() < 1e-9);
        assert!(progress(100).stroke_dashoffset().abs() < 1e-9);
        assert!((progress(78).stroke_dashoffset() - 0.22 * circumference).abs() < 1e-9);
        assert_eq!(progress(250).stroke_dashoffset(), progress(100).stroke_dashoffset());
    }

    #[test]
    fn gradient_stops_accumulate() {
        let budget = BudgetBreakdown {
            slices: ["Total Budget", "Used Funds", "Others", "Balance"]
                .into_iter()
                .zip([40, 25, 20, 15])
                .map(|(label, percent)| BudgetSlice {
                    label: label.into(),
                    percent,
                })
                .collect(),
        };

        assert_eq!(
            budget.conic_gradient(),
            "conic-gradient(#757575 0% 40%, #FF7043 40% 65%, #FFAB91 65% 85%, #FFE0B2 85% 100%)"
        );
    }

    #[test]
    fn empty_budget_is_a_grey_ring() {
        let budget = BudgetBreakdown { slices: vec![] };
        assert_eq!(budget.conic_gradient(), "conic-gradient(#E0E0E0 0% 100%)");
    }

    #[test]
    fn levels_map_to_bars() {
        assert_eq!(PerformanceLevel::from_value(0), None);
        assert_eq!(PerformanceLevel::from_value(3), Some(PerformanceLevel::Best));
        assert_eq!(PerformanceLevel::Better.bar_height(), 100);
        assert_eq!(PerformanceLevel::Good.bar_color(), "#BDBDBD");
        assert_eq!(PerformanceLevel::Best.label(), "Best");
    }

    #[test]
    fn deadline_is_day_first() {
        assert_eq!(task("TSK-001", date(2025, 12, 5)).deadline_label(), "05/12/2025");
    }

    #[test]
    fn status_serializes_camel_case() {
        let json = serde_json::to_string(&TaskStatus::NotStarted).unwrap();
        assert_eq!(json, "\"notStarted\"");
        assert_eq!(TaskStatus::NotStarted.label(), "Not Started");
        assert_eq!(TaskStatus::Ongoing.tone(), "warning");
    }

    #[test]
    fn pagination_clamps() {
        let items: Vec<u32> = (1..=6).collect();

        let first = paginate(&items, 1, 5);
        assert_eq!(first.items, &[1, 2, 3, 4, 5]);
        assert_eq!(first.count, 2);
        assert!(first.has_next() && !first.has_previous());

        let last = paginate(&items, 9, 5);
        assert_eq!(last.number, 2);
        assert_eq!(last.items, &[6]);

        let empty: Page<'_, u32> = paginate(&[], 0, 5);
        assert_eq!((empty.number, empty.count), (1, 1));
        assert!(empty.items.is_empty());
    }

    #[test]
    fn sorting_puts_earliest_first() {
        let mut tasks = vec![
            task("a", date(2025, 12, 11)),
            task("b", date(2025, 11, 11)),
            task("c", date(2026, 1, 9)),
        ];
        sort_by_deadline(&mut tasks);

        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
