/// Glyph for a menu icon key. Unknown keys have none.
pub fn icon_glyph(key: &str) -> Option<&'static str> {
    let glyph = match key {
        "chartPie" => "◔",
        "folderSimple" => "▭",
        "chartBar" => "▥",
        "currencyDollar" => "$",
        "chatCircleDots" => "◌",
        "userCircle" => "◉",
        "signOut" => "⇥",
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_icon_has_a_glyph() {
        types::nav::walk(&types::menu::dashboard_menu(), &mut |entry, _, _| {
            if let Some(icon) = &entry.icon {
                assert!(icon_glyph(icon).is_some(), "{icon}");
            }
        });
    }

    #[test]
    fn unknown_icons_are_omitted() {
        assert_eq!(icon_glyph("rocket"), None);
        assert_eq!(icon_glyph(""), None);
    }
}
