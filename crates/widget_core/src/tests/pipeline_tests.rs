use super::*;

use shared::{Catalog, Tag};

fn titles(projects: &[&ProjectRecord]) -> Vec<String> {
    projects.iter().map(|project| project.title.clone()).collect()
}

#[test]
fn empty_query_returns_whole_catalog_in_sort_order() {
    let catalog = Catalog::sample();

    let ascending = apply(&catalog, &QueryState::default());
    assert_eq!(ascending.len(), 4);
    assert_eq!(
        titles(&ascending),
        [
            "E-commerce Hero Mock",
            "Portfolio Website",
            "Simple Calculator",
            "Todo App"
        ]
    );

    let descending = apply(
        &catalog,
        &QueryState::default().with_sort_order(SortOrder::Descending),
    );
    assert_eq!(descending.len(), 4);
    assert_eq!(
        titles(&descending),
        [
            "Todo App",
            "Simple Calculator",
            "Portfolio Website",
            "E-commerce Hero Mock"
        ]
    );
}

#[test]
fn non_matching_search_yields_nothing() {
    let catalog = Catalog::sample();
    let query = QueryState::default().with_search_text("zzz");
    assert!(apply(&catalog, &query).is_empty());
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let catalog = Catalog::sample();

    let by_title = apply(&catalog, &QueryState::default().with_search_text("CALC"));
    assert_eq!(titles(&by_title), ["Simple Calculator"]);

    let by_description = apply(&catalog, &QueryState::default().with_search_text("html"));
    assert_eq!(
        titles(&by_description),
        ["Portfolio Website", "Simple Calculator"]
    );
}

#[test]
fn todo_search_finds_only_the_todo_app() {
    let catalog = Catalog::sample();
    let query = QueryState::default()
        .with_search_text("todo")
        .with_tag_filter(TagFilter::All)
        .with_sort_order(SortOrder::Ascending);
    assert_eq!(titles(&apply(&catalog, &query)), ["Todo App"]);
}

#[test]
fn js_filter_returns_calculator_and_todo_app() {
    let catalog = Catalog::sample();
    let query = QueryState::default().with_tag_filter(TagFilter::Only(Tag::Js));
    assert_eq!(
        titles(&apply(&catalog, &query)),
        ["Simple Calculator", "Todo App"]
    );
}

#[test]
fn text_match_and_tag_filter_combine() {
    let catalog = Catalog::sample();
    let query = QueryState::default()
        .with_search_text("html")
        .with_tag_filter(TagFilter::Only(Tag::Js));
    assert_eq!(titles(&apply(&catalog, &query)), ["Simple Calculator"]);
}

#[test]
fn tag_missing_from_every_record_yields_empty_result() {
    let catalog = Catalog::new(vec![
        ProjectRecord::new("Clock", [Tag::Js], "A ticking clock."),
        ProjectRecord::new("Quiz", [Tag::Js], "Ten questions."),
    ])
    .expect("catalog");
    let query = QueryState::default().with_tag_filter(TagFilter::Only(Tag::Design));
    assert!(apply(&catalog, &query).is_empty());
}

#[test]
fn empty_catalog_yields_empty_result() {
    let catalog = Catalog::default();
    assert!(apply(&catalog, &QueryState::default()).is_empty());
}

#[test]
fn reapplying_to_own_output_is_idempotent() {
    let catalog = Catalog::sample();
    let queries = [
        QueryState::default(),
        QueryState::default().with_sort_order(SortOrder::Descending),
        QueryState::default().with_tag_filter(TagFilter::Only(Tag::Js)),
        QueryState::default().with_search_text("o"),
    ];

    for query in queries {
        let first = apply(&catalog, &query);
        let second = apply(first.iter().copied(), &query);
        assert_eq!(first, second, "query {query:?}");
        assert_eq!(apply(&catalog, &query), first, "query {query:?}");
    }
}

#[test]
fn descending_reverses_ascending_for_every_filter() {
    let catalog = Catalog::sample();
    for tag_filter in TagFilter::OPTIONS {
        for search in ["", "o", "css", "zzz"] {
            let ascending = QueryState::default()
                .with_search_text(search)
                .with_tag_filter(tag_filter);
            let descending = ascending.clone().with_sort_order(SortOrder::Descending);

            let mut expected = apply(&catalog, &ascending);
            expected.reverse();
            assert_eq!(
                apply(&catalog, &descending),
                expected,
                "filter {tag_filter} search {search:?}"
            );
        }
    }
}

#[test]
fn titles_compare_case_sensitively() {
    let catalog = Catalog::new(vec![
        ProjectRecord::new("apple", [Tag::Css], "lowercase title"),
        ProjectRecord::new("Banana", [Tag::Css], "capitalised title"),
    ])
    .expect("catalog");
    assert_eq!(
        titles(&apply(&catalog, &QueryState::default())),
        ["Banana", "apple"]
    );
    assert_eq!(
        compare_titles("Banana", "apple", SortOrder::Descending),
        Ordering::Greater
    );
}
