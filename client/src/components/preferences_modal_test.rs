use super::*;

#[test]
fn every_tab_has_rows() {
    for tab in PreferencesTab::ALL {
        assert!(rows_for(tab).next().is_some(), "{} is empty", tab.title());
    }
}

#[test]
fn rows_for_filters_by_tab() {
    let names: Vec<&str> = rows_for(PreferencesTab::Appearance).map(|row| row.name).collect();
    assert_eq!(names, vec!["showBlockBreadcrumbs", "showIconLabels"]);
}

#[test]
fn preference_keys_are_unique() {
    for (i, a) in PREFERENCES.iter().enumerate() {
        for b in &PREFERENCES[i + 1..] {
            assert!((a.scope, a.name) != (b.scope, b.name), "duplicate {}/{}", a.scope, a.name);
        }
    }
}

#[test]
fn default_tab_is_general() {
    assert_eq!(PreferencesTab::default(), PreferencesTab::General);
}
