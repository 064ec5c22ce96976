use crate::nav::{MenuEntry, SectionGroup, Sections};
use crate::paths::{auth, dashboard};

pub const FAVORITES: &str = "Favorites";
pub const DASHBOARDS: &str = "Dashboards";
pub const PAGES: &str = "Pages";
pub const FOOTER: &str = "Footer";

/// Sections rendered in the scrolling part of the side nav, in display order.
/// [`FOOTER`] is pinned below them.
pub const SECTION_ORDER: [&str; 3] = [FAVORITES, DASHBOARDS, PAGES];

/// Groups for the scrolling part of the side nav: [`SECTION_ORDER`] first,
/// then any other label in order of appearance. [`FOOTER`] is left out.
pub fn scrolling_sections<'s, 'a>(sections: &'s Sections<'a>) -> Vec<&'s SectionGroup<'a>> {
    let known = SECTION_ORDER
        .iter()
        .filter_map(|label| sections.iter().find(|group| group.label == *label));
    let others = sections
        .iter()
        .filter(|group| group.label != FOOTER && !SECTION_ORDER.contains(&group.label));

    known.chain(others).collect()
}

/// The dashboard's navigation tree.
pub fn dashboard_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::leaf("favorites-overview", "Overview", dashboard::OVERVIEW)
            .with_icon("chartPie")
            .in_section(FAVORITES),
        MenuEntry::leaf("favorites-project-1", "Project 1", dashboard::PROJECT_1)
            .with_icon("chartPie")
            .in_section(FAVORITES),
        MenuEntry::leaf("dashboards-overview", "Overview", dashboard::OVERVIEW)
            .with_icon("chartPie")
            .in_section(DASHBOARDS),
        MenuEntry::leaf("dashboards-project-details", "Project Details", dashboard::PROJECT_DETAILS)
            .with_icon("folderSimple")
            .in_section(DASHBOARDS),
        MenuEntry::leaf("dashboards-projects", "Projects", dashboard::PROJECTS)
            .with_icon("folderSimple")
            .in_section(DASHBOARDS),
        MenuEntry::branch(
            "pages",
            "Pages",
            vec![
                MenuEntry::branch(
                    "pages-projects-parent",
                    "Projects",
                    vec![
                        MenuEntry::leaf("pages-projects-1", "Project 1", dashboard::PROJECT_1),
                        MenuEntry::leaf("pages-projects-2", "Project 2", dashboard::PROJECT_2),
                        MenuEntry::leaf("pages-projects-3", "Project 3", dashboard::PROJECT_3),
                        MenuEntry::leaf("pages-projects-4", "Project 4", dashboard::PROJECT_4),
                        MenuEntry::leaf("pages-projects-5", "Project 5", dashboard::PROJECT_5),
                    ],
                )
                .with_icon("folderSimple")
                .expanded(true),
                MenuEntry::leaf("pages-reports", "Reports", dashboard::REPORTS).with_icon("chartBar"),
                MenuEntry::leaf("pages-financials", "Financials", dashboard::FINANCIALS)
                    .with_icon("currencyDollar"),
                MenuEntry::leaf("pages-messaging", "Messaging", dashboard::MESSAGING)
                    .with_icon("chatCircleDots"),
                MenuEntry::leaf("pages-user-profile", "User Profile", dashboard::USER_PROFILE)
                    .with_icon("userCircle"),
            ],
        )
        .with_icon("folderSimple")
        .in_section(PAGES)
        .expanded(true),
        MenuEntry::leaf("logout", "Log out", auth::SIGN_OUT)
            .with_icon("signOut")
            .in_section(FOOTER)
            .external(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{ExpansionState, section_groups, validate_keys};

    #[test]
    fn keys_are_unique() {
        validate_keys(&dashboard_menu()).unwrap();
    }

    #[test]
    fn every_section_is_rendered() {
        let menu = dashboard_menu();
        let sections = section_groups(&menu);

        for label in sections.labels() {
            assert!(SECTION_ORDER.contains(&label) || label == FOOTER, "{label}");
        }
    }

    #[test]
    fn scrolling_sections_follow_display_order() {
        let menu = vec![
            MenuEntry::leaf("logout", "Log out", auth::SIGN_OUT).in_section(FOOTER),
            MenuEntry::leaf("misc", "Misc", "/misc"),
            MenuEntry::leaf("pages", "Reports", dashboard::REPORTS).in_section(PAGES),
            MenuEntry::leaf("fav", "Overview", dashboard::OVERVIEW).in_section(FAVORITES),
        ];
        let sections = section_groups(&menu);

        let labels: Vec<_> = scrolling_sections(&sections)
            .iter()
            .map(|group| group.label)
            .collect();
        assert_eq!(labels, [FAVORITES, PAGES, "Uncategorized"]);
    }

    #[test]
    fn pages_and_projects_open_on_first_render() {
        let state = ExpansionState::new(&dashboard_menu());

        assert!(state.is_expanded("pages"));
        assert!(state.is_expanded("pages-projects-parent"));
    }

    #[test]
    fn overview_is_highlighted_twice() {
        let menu = dashboard_menu();
        let active: Vec<_> = menu
            .iter()
            .filter(|entry| entry.is_active(crate::paths::dashboard::OVERVIEW))
            .map(|entry| entry.key.as_str())
            .collect();

        assert_eq!(active, ["favorites-overview", "dashboards-overview"]);
    }
}
