use contact_popup::selection::{default_materials, display_text, SelectOption, SelectionSet};

#[test]
fn test_toggle_appends_absent_value() {
    let set = SelectionSet::from_values(["javascript"]);
    let next = set.toggled("react");
    assert_eq!(next.as_slice(), ["javascript", "react"]);
    // The original set is untouched
    assert_eq!(set.as_slice(), ["javascript"]);
}

#[test]
fn test_toggle_removes_present_value_keeping_order() {
    let set = SelectionSet::from_values(["a", "b", "c", "d"]);
    let next = set.toggled("b");
    assert_eq!(next.as_slice(), ["a", "c", "d"]);
}

#[test]
fn test_toggle_twice_restores_original() {
    let original = SelectionSet::from_values(["python", "react", "nodejs"]);
    for value in ["python", "react", "nodejs", "typescript"] {
        assert_eq!(original.toggled(value).toggled(value), original, "toggling {value} twice");
    }
}

#[test]
fn test_from_values_drops_duplicates() {
    let set = SelectionSet::from_values(["react", "javascript", "react"]);
    assert_eq!(set.as_slice(), ["react", "javascript"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_display_text_falls_back_to_raw_value() {
    let options = default_materials();
    assert_eq!(display_text(&options, "javascript"), "JavaScript");
    assert_eq!(display_text(&options, "cobol"), "cobol");
}

#[test]
fn test_selection_serializes_as_list() {
    let set = SelectionSet::from_values(["javascript", "react"]);
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["javascript","react"]"#);

    let option = SelectOption::new("React", "react");
    let json = serde_json::to_string(&option).unwrap();
    assert_eq!(json, r#"{"text":"React","value":"react"}"#);
}
