use proptest::prelude::*;
use types::nav::{Activation, ExpansionState, MenuEntry, section_groups};

const SECTIONS: [&str; 3] = ["Favorites", "Dashboards", "Pages"];
const LOCATIONS: [&str; 4] = ["/x", "/y", "/z", "/dashboard"];

fn arb_leaf() -> impl Strategy<Value = MenuEntry> {
    (
        prop::option::of(prop::sample::select(LOCATIONS.to_vec())),
        prop::option::of(prop::sample::select(SECTIONS.to_vec())),
    )
        .prop_map(|(href, section)| {
            let mut entry = MenuEntry::leaf("", "Leaf", "");
            entry.href = href.map(String::from);
            entry.section = section.map(String::from);
            entry
        })
}

fn arb_entry() -> impl Strategy<Value = MenuEntry> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        (
            prop::collection::vec(inner, 1..4),
            prop::option::of(prop::sample::select(SECTIONS.to_vec())),
            prop::sample::select(vec!["Pages", "Projects", "Other"]),
        )
            .prop_map(|(children, section, title)| {
                let mut entry = MenuEntry::branch("", title, children);
                entry.section = section.map(String::from);
                entry
            })
    })
}

/// Give every entry a unique key, depth first.
fn with_unique_keys(mut entries: Vec<MenuEntry>) -> Vec<MenuEntry> {
    fn assign(entries: &mut [MenuEntry], next: &mut usize) {
        for entry in entries {
            entry.key = format!("k{next}");
            *next += 1;
            assign(&mut entry.children, next);
        }
    }

    let mut next = 0;
    assign(&mut entries, &mut next);
    entries
}

fn arb_menu() -> impl Strategy<Value = Vec<MenuEntry>> {
    prop::collection::vec(arb_entry(), 0..12).prop_map(with_unique_keys)
}

fn branch_keys(entries: &[MenuEntry], keys: &mut Vec<String>) {
    for entry in entries {
        if entry.is_branch() {
            keys.push(entry.key.clone());
        }
        branch_keys(&entry.children, keys);
    }
}

proptest! {
    /// Property: grouping is a partition that keeps input order inside each group
    #[test]
    fn prop_groups_partition_input(menu in arb_menu()) {
        let sections = section_groups(&menu);

        let flattened: Vec<&str> = sections
            .iter()
            .flat_map(|group| group.entries.iter().map(|e| e.key.as_str()))
            .collect();
        let mut sorted_flat = flattened.clone();
        sorted_flat.sort_unstable();
        let mut sorted_input: Vec<&str> = menu.iter().map(|e| e.key.as_str()).collect();
        sorted_input.sort_unstable();
        prop_assert_eq!(sorted_flat, sorted_input);

        for group in sections.iter() {
            let expected: Vec<&str> = menu
                .iter()
                .filter(|e| e.section_label() == group.label)
                .map(|e| e.key.as_str())
                .collect();
            let actual: Vec<&str> = group.entries.iter().map(|e| e.key.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    /// Property: an entry is active exactly when its target equals the location
    #[test]
    fn prop_active_iff_href_matches(entry in arb_leaf(), location in prop::sample::select(LOCATIONS.to_vec())) {
        prop_assert_eq!(entry.is_active(location), entry.href.as_deref() == Some(location));
    }

    /// Property: toggling any branch twice restores the state
    #[test]
    fn prop_double_toggle_is_identity(menu in arb_menu()) {
        let mut state = ExpansionState::new(&menu);
        let original = state.clone();

        let mut keys = Vec::new();
        branch_keys(&menu, &mut keys);
        for key in &keys {
            state.toggle(key);
            state.toggle(key);
            prop_assert_eq!(&state, &original);
        }
    }

    /// Property: activating a branch never produces a navigation target
    #[test]
    fn prop_branch_activation_never_navigates(entry in arb_entry()) {
        let menu = with_unique_keys(vec![entry]);
        let branch = &menu[0];
        let mut state = ExpansionState::new(&menu);

        if branch.is_branch() {
            prop_assert_eq!(branch.activation(), Activation::Toggle(branch.key.clone()));
            prop_assert_eq!(state.activate(branch), None);
        }
    }
}
