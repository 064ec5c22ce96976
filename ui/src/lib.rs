//! Presentational components for the Nexnode dashboard.
//!
//! Nothing in here talks to the server. Views fetch data through `api` and
//! hand it down as props.

mod auth;
mod cards;
mod icons;
mod nav;
mod tasks;

pub use auth::{AsideContent, AuthLayout, Cta};
pub use cards::{
    BudgetBreakdownCard, CameraFeedCard, MetricCard, ProjectProgressCard, ProjectTrackingCard,
    StatusIndicator,
};
pub use icons::icon_glyph;
pub use nav::{Logo, MobileNav, NavItem, SideNav, nav_indent};
pub use tasks::AssignedTasksTable;
