use super::*;
use crate::{
    obs::{MetricsEvent, MetricsSink, with_metrics_sink},
    query::{PageError, predicate::ValidateError},
    test_fixtures::{Show, show, shows},
    types::Id,
};
use proptest::prelude::*;
use std::cell::RefCell;

fn ids(view: &PageView<Show>) -> Vec<u64> {
    view.items().iter().map(|s| s.id.get()).collect()
}

fn festival() -> Vec<Show> {
    vec![
        show(1, "Jazz na Praça", "Livre", &["Música"]),
        show(2, "Teatro de Bonecos", "Livre", &["Teatro", "Infantil"]),
        show(3, "Noite do JAZZ", "18 anos", &["Música", "Dança"]),
        show(4, "Oficina de Gravura", "12 anos", &["Artes Visuais"]),
    ]
}

///
/// Reorder + paginate
///

#[test]
fn unfiltered_query_surfaces_most_recent_first() {
    let view = ListQueryEngine::new()
        .execute(&shows(3), &ListQuery::new())
        .unwrap();

    assert_eq!(ids(&view), vec![3, 2, 1]);
    assert_eq!(view.total_count(), 3);
    assert_eq!(view.total_pages(), 1);
}

#[test]
fn second_page_of_five_rows_by_three() {
    let view = ListQueryEngine::new()
        .execute(&shows(5), &ListQuery::new().page(2).page_size(3))
        .unwrap();

    assert_eq!(ids(&view), vec![2, 1]);
    assert_eq!(view.page(), 2);
    assert_eq!(view.page_size(), 3);
    assert_eq!(view.total_pages(), 2);
    assert_eq!(view.total_count(), 5);
}

#[test]
fn overflowing_page_is_clamped_to_last() {
    let view = ListQueryEngine::new()
        .execute(&shows(5), &ListQuery::new().page(40).page_size(3))
        .unwrap();

    assert_eq!(view.page(), 2);
    assert_eq!(ids(&view), vec![2, 1]);
}

#[test]
fn zero_page_size_is_rejected() {
    let err = ListQueryEngine::new()
        .execute(&shows(2), &ListQuery::new().page_size(0))
        .unwrap_err();

    assert!(matches!(err, QueryError::Page(PageError::InvalidPageSize)));
}

#[test]
fn empty_collection_yields_empty_first_page() {
    let view = ListQueryEngine::new()
        .execute::<Show>(&[], &ListQuery::new().keyword("jazz"))
        .unwrap();

    assert!(view.is_empty());
    assert_eq!(view.page(), 1);
    assert_eq!(view.total_pages(), 0);
    assert_eq!(view.total_count(), 0);
}

///
/// Filters
///

#[test]
fn keyword_matches_case_insensitively_across_searchable_fields() {
    let view = ListQueryEngine::new()
        .execute(&festival(), &ListQuery::new().keyword("jazz"))
        .unwrap();

    assert_eq!(ids(&view), vec![3, 1]);
}

#[test]
fn keyword_reaches_categorical_searchable_field() {
    let view = ListQueryEngine::new()
        .execute(&festival(), &ListQuery::new().keyword("18 ANOS"))
        .unwrap();

    assert_eq!(ids(&view), vec![3]);
}

#[test]
fn categorical_and_keyword_combine_with_and() {
    let query = ListQuery::new().keyword("jazz").filter_eq("age_rating", "Livre");
    let view = ListQueryEngine::new().execute(&festival(), &query).unwrap();

    assert_eq!(ids(&view), vec![1]);
}

#[test]
fn categorical_match_is_case_sensitive() {
    let query = ListQuery::new().filter_eq("age_rating", "livre");
    let view = ListQueryEngine::new().execute(&festival(), &query).unwrap();

    assert!(view.is_empty());
}

#[test]
fn tag_filter_matches_any_selected_tag() {
    let query = ListQuery::new().filter_tags("languages", ["Dança", "Teatro"]);
    let view = ListQueryEngine::new().execute(&festival(), &query).unwrap();

    assert_eq!(ids(&view), vec![3, 2]);
}

#[test]
fn no_match_is_an_empty_page_not_an_error() {
    let query = ListQuery::new().keyword("circo");
    let view = ListQueryEngine::new().execute(&festival(), &query).unwrap();

    assert!(view.is_empty());
    assert_eq!(view.total_count(), 0);
}

#[test]
fn deserialized_empty_filters_list_everything() {
    let query: ListQuery = serde_json::from_str(
        r#"{"keyword":"","categorical":{"age_rating":""},"tags":{"languages":[]},"after":{},"until":{},"page":1,"page_size":10}"#,
    )
    .unwrap();

    let view = ListQueryEngine::new().execute(&festival(), &query).unwrap();

    assert_eq!(view.total_count(), 4);
    assert_eq!(ids(&view), vec![4, 3, 2, 1]);
}

#[test]
fn unknown_filter_field_is_rejected() {
    let query = ListQuery::new().filter_eq("venue", "Praça");
    let err = ListQueryEngine::new()
        .execute(&festival(), &query)
        .unwrap_err();

    assert!(matches!(
        err,
        QueryError::Validate(ValidateError::UnknownField { .. })
    ));
}

#[test]
fn keyword_filtering_is_idempotent() {
    let engine = ListQueryEngine::new();
    let query = ListQuery::new().keyword("jazz").page_size(10);

    let once = engine.execute(&festival(), &query).unwrap().into_items();
    let mut stored = once.clone();
    stored.reverse();
    let twice = engine.execute(&stored, &query).unwrap().into_items();

    assert_eq!(once, twice);
}

#[test]
fn source_slice_is_left_untouched() {
    let source = festival();
    let before = source.clone();

    ListQueryEngine::new()
        .debug()
        .execute(&source, &ListQuery::new().keyword("jazz"))
        .unwrap();

    assert_eq!(source, before);
}

///
/// Metrics
///

struct CapturingSink {
    events: RefCell<Vec<MetricsEvent>>,
}

impl MetricsSink for CapturingSink {
    fn record(&self, event: MetricsEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn execution_emits_start_and_finish_with_row_counts() {
    let sink = CapturingSink {
        events: RefCell::new(Vec::new()),
    };

    with_metrics_sink(&sink, || {
        ListQueryEngine::new()
            .execute(&festival(), &ListQuery::new().keyword("jazz").page_size(1))
            .unwrap();
    });

    let path = <Show as EntityKind>::MODEL.path;
    assert_eq!(
        sink.events.into_inner(),
        vec![
            MetricsEvent::QueryStart { entity_path: path },
            MetricsEvent::QueryFinish {
                entity_path: path,
                rows_scanned: 4,
                rows_matched: 2,
                rows_returned: 1,
            },
        ]
    );
}

#[test]
fn rejected_query_emits_only_rejection() {
    let sink = CapturingSink {
        events: RefCell::new(Vec::new()),
    };

    with_metrics_sink(&sink, || {
        let _ = ListQueryEngine::new().execute(&festival(), &ListQuery::new().page_size(0));
    });

    assert_eq!(
        sink.events.into_inner(),
        vec![MetricsEvent::QueryRejected {
            entity_path: <Show as EntityKind>::MODEL.path,
        }]
    );
}

///
/// Properties
///

const TAGS: [&str; 4] = ["Música", "Teatro", "Dança", "Circo"];

fn arb_tags() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(TAGS.to_vec()), 0..3)
}

fn arb_rows() -> impl Strategy<Value = Vec<Show>> {
    prop::collection::vec(arb_tags(), 0..12).prop_map(|tag_sets| {
        tag_sets
            .iter()
            .zip(1u64..)
            .map(|(tags, id)| show(id, &format!("Show {id}"), "Livre", tags))
            .collect()
    })
}

proptest! {
    #[test]
    fn concatenated_pages_reproduce_reordered_rows(rows in arb_rows(), size in 1u32..5) {
        let engine = ListQueryEngine::new();
        let first = engine.execute(&rows, &ListQuery::new().page_size(size)).unwrap();

        let mut seen = Vec::new();
        for page in 1..=u32::try_from(first.total_pages()).unwrap().max(1) {
            let view = engine
                .execute(&rows, &ListQuery::new().page(page).page_size(size))
                .unwrap();
            prop_assert!(view.len() <= size as usize);
            seen.extend(view.into_items().into_iter().map(|s| s.id));
        }

        let expected: Vec<Id> = rows.iter().rev().map(|s| s.id).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn row_is_listed_iff_tags_intersect(rows in arb_rows(), filter in arb_tags()) {
        let query = ListQuery::new()
            .filter_tags("languages", filter.iter().copied())
            .page_size(100);
        let view = ListQueryEngine::new().execute(&rows, &query).unwrap();
        let listed: Vec<Id> = view.items().iter().map(|s| s.id).collect();

        for row in &rows {
            let expected = filter.is_empty()
                || row.languages.iter().any(|tag| filter.iter().any(|f| tag == f));
            prop_assert_eq!(listed.contains(&row.id), expected);
        }
    }
}
