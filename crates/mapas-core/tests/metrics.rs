use mapas_core::{
    obs::{metrics_report, metrics_reset_all},
    prelude::*,
};

static FIELDS: [EntityFieldModel; 3] = [
    EntityFieldModel::new("id", EntityFieldKind::Id),
    EntityFieldModel::new("title", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("genres", EntityFieldKind::TagSet),
];

static MODEL: EntityModel = EntityModel {
    path: "tests::Book",
    entity_name: "book",
    primary_key: &FIELDS[0],
    fields: &FIELDS,
};

#[derive(Clone, Debug, PartialEq)]
struct Book {
    id: Id,
    title: String,
    genres: Vec<String>,
}

struct BookDraft {
    title: &'static str,
    genres: &'static [&'static str],
}

impl FieldValues for Book {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "title" => Some(self.title.to_value()),
            "genres" => Some(self.genres.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Book {
    const MODEL: &'static EntityModel = &MODEL;

    fn id(&self) -> Id {
        self.id
    }
}

impl EntityCreate for Book {
    type Draft = BookDraft;

    fn from_draft(id: Id, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title.to_string(),
            genres: draft.genres.iter().map(ToString::to_string).collect(),
        }
    }
}

fn library() -> Collection<Book> {
    let seed: [(&'static str, &'static [&'static str]); 3] = [
        ("Vidas Secas", &["Romance"]),
        ("Morte e Vida Severina", &["Poesia", "Teatro"]),
        ("Grande Sertão: Veredas", &["Romance"]),
    ];

    let mut books = Collection::new();
    for (title, genres) in seed {
        books.insert_new(BookDraft { title, genres }).unwrap();
    }

    books
}

#[test]
fn report_counts_queries_rows_and_inserts_per_entity() {
    metrics_reset_all();

    let books = library();
    books
        .query(&ListQuery::new().filter_tags("genres", ["Romance"]))
        .unwrap();
    books
        .query(&ListQuery::new().page_size(0))
        .unwrap_err();

    let report = metrics_report(None);
    let counters = report.counters.unwrap();
    assert_eq!(counters.ops.inserts, 3);
    assert_eq!(counters.ops.query_calls, 1);
    assert_eq!(counters.ops.query_rejected, 1);
    assert_eq!(counters.ops.rows_scanned, 3);
    assert_eq!(counters.ops.rows_matched, 2);
    assert_eq!(counters.ops.rows_returned, 2);

    let summary = &report.entity_counters[0];
    assert_eq!(summary.path, "tests::Book");
}

#[test]
fn reset_clears_counters() {
    let books = library();
    books.query(&ListQuery::new()).unwrap();

    metrics_reset_all();
    let counters = metrics_report(None).counters.unwrap();

    assert_eq!(counters.ops.query_calls, 0);
    assert!(counters.entities.is_empty());
}

#[test]
fn debug_engine_returns_the_same_page() {
    let books = library();
    let query = ListQuery::new().keyword("vida").page_size(1);

    let quiet = ListQueryEngine::new().execute(books.as_slice(), &query).unwrap();
    let traced = ListQueryEngine::new()
        .debug()
        .execute(books.as_slice(), &query)
        .unwrap();

    assert_eq!(quiet, traced);
    assert_eq!(quiet.items()[0].title, "Morte e Vida Severina");
    assert_eq!(quiet.total_pages(), 2);
}
