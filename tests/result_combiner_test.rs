use doctasks::application::services::combine_results;

#[test]
fn given_no_results_when_combining_then_returns_empty_string() {
    let empty: [&str; 0] = [];
    assert_eq!(combine_results(&empty), "");
}

#[test]
fn given_ordered_results_when_combining_then_joins_with_single_space() {
    assert_eq!(combine_results(&["r1", "r2", "r3"]), "r1 r2 r3");
}

#[test]
fn given_owned_strings_when_combining_then_preserves_order() {
    let results = vec!["second".to_string(), "first".to_string()];
    assert_eq!(combine_results(&results), "second first");
}
