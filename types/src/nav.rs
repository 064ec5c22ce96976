//! The navigation tree model.
//!
//! Menu entries are static configuration built once at startup. Rendering
//! state lives outside the tree: [`ExpansionState`] maps branch keys to their
//! expanded flag, and the active entry is derived from the current location.

use std::collections::{HashMap, HashSet};

use crate::{Result, err};

/// Group label for entries without an explicit section.
pub const DEFAULT_SECTION: &str = "Uncategorized";

/// Title of the top-level branch that starts expanded, together with the
/// branches directly beneath it, unless an entry says otherwise.
pub const EXPANDED_BRANCH_TITLE: &str = "Pages";

/// One node in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: String,
    pub title: String,
    pub href: Option<String>,
    pub icon: Option<String>,
    pub section: Option<String>,
    /// Overrides the title based expansion rule when set.
    pub default_expanded: Option<bool>,
    /// Targets handled outside the client router, e.g. server routes.
    pub external: bool,
    pub disabled: bool,
    pub children: Vec<MenuEntry>,
}

/// What activating an entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Flip the expansion flag of the branch with this key. Never navigates.
    Toggle(String),
    /// Navigate to this target.
    Navigate(String),
    /// Nothing happens (disabled entries, leaves without a target).
    Inert,
}

impl MenuEntry {
    fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            href: None,
            icon: None,
            section: None,
            default_expanded: None,
            external: false,
            disabled: false,
            children: Vec::new(),
        }
    }

    pub fn leaf(key: impl Into<String>, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::new(key, title)
        }
    }

    pub fn branch(
        key: impl Into<String>,
        title: impl Into<String>,
        children: Vec<MenuEntry>,
    ) -> Self {
        Self {
            children,
            ..Self::new(key, title)
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = Some(expanded);
        self
    }

    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn section_label(&self) -> &str {
        self.section.as_deref().unwrap_or(DEFAULT_SECTION)
    }

    /// Whether this entry's target is exactly the current location.
    pub fn is_active(&self, location: &str) -> bool {
        self.href.as_deref() == Some(location)
    }

    /// Branches toggle, leaves navigate. A branch's `href` is ignored.
    pub fn activation(&self) -> Activation {
        if self.disabled {
            Activation::Inert
        } else if self.is_branch() {
            Activation::Toggle(self.key.clone())
        } else {
            match &self.href {
                Some(href) => Activation::Navigate(href.clone()),
                None => Activation::Inert,
            }
        }
    }
}

/// Check that every key in the tree is unique.
pub fn validate_keys(entries: &[MenuEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut duplicate = None;

    walk(entries, &mut |entry, _, _| {
        if duplicate.is_none() && !seen.insert(entry.key.as_str()) {
            duplicate = Some(entry.key.clone());
        }
    });

    match duplicate {
        Some(key) => Err(err!("duplicate menu key `{key}`")),
        None => Ok(()),
    }
}

/// Depth-first, pre-order traversal passing each entry with its depth and parent.
pub fn walk<'a, F>(entries: &'a [MenuEntry], f: &mut F)
where
    F: FnMut(&'a MenuEntry, usize, Option<&'a MenuEntry>),
{
    fn go<'a, F>(entries: &'a [MenuEntry], depth: usize, parent: Option<&'a MenuEntry>, f: &mut F)
    where
        F: FnMut(&'a MenuEntry, usize, Option<&'a MenuEntry>),
    {
        for entry in entries {
            f(entry, depth, parent);
            go(&entry.children, depth + 1, Some(entry), f);
        }
    }

    go(entries, 0, None, f)
}

/// Entries sharing one section label, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup<'a> {
    pub label: &'a str,
    pub entries: Vec<&'a MenuEntry>,
}

/// Section label to entries, iterated in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    groups: Vec<SectionGroup<'a>>,
}

impl<'a> Sections<'a> {
    pub fn get(&self, label: &str) -> Option<&[&'a MenuEntry]> {
        self.groups
            .iter()
            .find(|group| group.label == label)
            .map(|group| group.entries.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionGroup<'a>> {
        self.groups.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|group| group.label)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Partition top-level entries by section label.
pub fn section_groups(entries: &[MenuEntry]) -> Sections<'_> {
    let mut groups: Vec<SectionGroup<'_>> = Vec::new();

    for entry in entries {
        let label = entry.section_label();
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.entries.push(entry),
            None => groups.push(SectionGroup {
                label,
                entries: vec![entry],
            }),
        }
    }

    Sections { groups }
}

/// Initial expansion of a branch at `depth` under `parent`.
pub fn default_expansion(entry: &MenuEntry, depth: usize, parent: Option<&MenuEntry>) -> bool {
    if let Some(expanded) = entry.default_expanded {
        return expanded;
    }
    if !entry.is_branch() {
        return false;
    }

    match (depth, parent) {
        (0, _) => is_expanded_branch(entry),
        (1, Some(parent)) => is_expanded_branch(parent),
        _ => false,
    }
}

fn is_expanded_branch(entry: &MenuEntry) -> bool {
    entry.is_branch() && entry.title == EXPANDED_BRANCH_TITLE
}

/// Expanded flags keyed by branch key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    /// Seed every branch in the tree with its default expansion.
    pub fn new(entries: &[MenuEntry]) -> Self {
        let mut expanded = HashMap::new();

        walk(entries, &mut |entry, depth, parent| {
            if entry.is_branch() {
                expanded.insert(entry.key.clone(), default_expansion(entry, depth, parent));
            }
        });

        Self { expanded }
    }

    /// Unknown keys are collapsed.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    /// Flip a branch and return its new flag.
    pub fn toggle(&mut self, key: &str) -> bool {
        let flag = self.expanded.entry(key.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Apply an activation, returning the navigation target if there is one.
    pub fn activate(&mut self, entry: &MenuEntry) -> Option<String> {
        match entry.activation() {
            Activation::Toggle(key) => {
                self.toggle(&key);
                None
            }
            Activation::Navigate(href) => Some(href),
            Activation::Inert => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<MenuEntry> {
        vec![
            MenuEntry::leaf("a", "A", "/x"),
            MenuEntry::branch("b", "B", vec![MenuEntry::leaf("c", "C", "/y")]).in_section("Pages"),
        ]
    }

    #[test]
    fn scenario_active_and_groups() {
        let entries = scenario();
        let c = &entries[1].children[0];

        assert!(c.is_active("/y"));
        assert!(!entries[0].is_active("/y"));

        let sections = section_groups(&entries);
        let pages: Vec<_> = sections.get("Pages").unwrap().iter().map(|e| &e.key).collect();
        assert_eq!(pages, ["b"]);
        assert_eq!(sections.get(DEFAULT_SECTION).unwrap().len(), 1);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(section_groups(&[]).is_empty());
    }

    #[test]
    fn groups_follow_first_appearance() {
        let entries = vec![
            MenuEntry::leaf("1", "1", "/1").in_section("Favorites"),
            MenuEntry::leaf("2", "2", "/2").in_section("Dashboards"),
            MenuEntry::leaf("3", "3", "/3").in_section("Favorites"),
        ];
        let sections = section_groups(&entries);

        assert_eq!(sections.labels().collect::<Vec<_>>(), ["Favorites", "Dashboards"]);
        let favorites: Vec<_> = sections.get("Favorites").unwrap().iter().map(|e| &e.key).collect();
        assert_eq!(favorites, ["1", "3"]);
    }

    #[test]
    fn missing_href_is_never_active() {
        let branch = MenuEntry::branch("b", "B", vec![MenuEntry::leaf("c", "C", "/y")]);
        assert!(!branch.is_active(""));
        assert!(!branch.is_active("/y"));
    }

    #[test]
    fn pages_branch_starts_expanded() {
        let entries = vec![MenuEntry::branch(
            "pages",
            "Pages",
            vec![
                MenuEntry::branch(
                    "projects",
                    "Projects",
                    vec![MenuEntry::branch("deep", "Deep", vec![MenuEntry::leaf("p1", "P1", "/p1")])],
                ),
                MenuEntry::leaf("reports", "Reports", "/reports"),
            ],
        )];
        let state = ExpansionState::new(&entries);

        assert!(state.is_expanded("pages"));
        assert!(state.is_expanded("projects"));
        assert!(!state.is_expanded("deep"));
    }

    #[test]
    fn other_branches_start_collapsed() {
        let entries = vec![
            MenuEntry::branch("other", "Other", vec![MenuEntry::leaf("x", "X", "/x")]),
            MenuEntry::branch(
                "other-parent",
                "Other",
                vec![MenuEntry::branch("projects", "Projects", vec![MenuEntry::leaf("y", "Y", "/y")])],
            ),
        ];
        let state = ExpansionState::new(&entries);

        assert!(!state.is_expanded("other"));
        assert!(!state.is_expanded("projects"));
    }

    #[test]
    fn explicit_flag_wins() {
        let entries = vec![
            MenuEntry::branch("pages", "Pages", vec![MenuEntry::leaf("x", "X", "/x")]).expanded(false),
            MenuEntry::branch("misc", "Misc", vec![MenuEntry::leaf("y", "Y", "/y")]).expanded(true),
        ];
        let state = ExpansionState::new(&entries);

        assert!(!state.is_expanded("pages"));
        assert!(state.is_expanded("misc"));
    }

    #[test]
    fn double_toggle_restores() {
        let entries = scenario();
        let mut state = ExpansionState::new(&entries);
        let before = state.clone();

        assert!(state.toggle("b"));
        assert_ne!(state, before);
        assert!(!state.toggle("b"));
        assert_eq!(state, before);
    }

    #[test]
    fn branch_activation_never_navigates() {
        let mut branch = MenuEntry::branch("b", "B", vec![MenuEntry::leaf("c", "C", "/y")]);
        branch.href = Some("/ignored".into());
        let mut state = ExpansionState::new(std::slice::from_ref(&branch));

        assert_eq!(branch.activation(), Activation::Toggle("b".into()));
        assert_eq!(state.activate(&branch), None);
        assert!(state.is_expanded("b"));
    }

    #[test]
    fn leaf_activation_navigates_unless_disabled() {
        let leaf = MenuEntry::leaf("a", "A", "/x");
        assert_eq!(leaf.activation(), Activation::Navigate("/x".into()));
        assert_eq!(leaf.clone().disabled().activation(), Activation::Inert);
    }

    #[test]
    fn duplicate_keys_are_reported() {
        let entries = vec![
            MenuEntry::leaf("a", "A", "/x"),
            MenuEntry::branch("b", "B", vec![MenuEntry::leaf("a", "Again", "/y")]),
        ];

        let error = validate_keys(&entries).unwrap_err();
        assert_eq!(error.message, "duplicate menu key `a`");
        assert!(validate_keys(&scenario()).is_ok());
    }
}
