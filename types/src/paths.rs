//! Route paths shared by the router, the menu and the server.

pub const HOME: &str = "/";

pub mod auth {
    pub const SIGN_IN: &str = "/auth/sign-in";
    pub const SIGN_UP: &str = "/auth/sign-up";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
    pub const NEW_PASSWORD: &str = "/auth/new-password";
    /// Served by the server router, not the client router.
    pub const SIGN_OUT: &str = "/auth/sign-out";
}

pub mod dashboard {
    pub const OVERVIEW: &str = "/dashboard";
    pub const PROJECT_DETAILS: &str = "/dashboard/project-details";
    pub const PROJECTS: &str = "/dashboard/projects";
    pub const PROJECT_1: &str = "/dashboard/project-1";
    pub const PROJECT_2: &str = "/dashboard/project-2";
    pub const PROJECT_3: &str = "/dashboard/project-3";
    pub const PROJECT_4: &str = "/dashboard/project-4";
    pub const PROJECT_5: &str = "/dashboard/project-5";
    pub const REPORTS: &str = "/dashboard/reports";
    pub const FINANCIALS: &str = "/dashboard/financials";
    pub const MESSAGING: &str = "/dashboard/messaging";
    pub const USER_PROFILE: &str = "/dashboard/user-profile";
}
