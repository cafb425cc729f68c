
use crate::{
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    query::predicate::{
        CompareOp, ComparePredicate, Predicate, ValidateError, eval,
        eval::{FieldPresence, Row},
        normalize, validate, validate_model,
    },
    value::Value,
};
use std::collections::BTreeMap;
use time::{Date, Month};

///
/// TestRow
///

#[derive(Clone, Debug, Default)]
pub(super) struct TestRow {
    fields: BTreeMap<String, Value>,
}

impl TestRow {
    pub(super) fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }
}

impl Row for TestRow {
    fn field(&self, name: &str) -> FieldPresence {
        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

static FIELDS: [EntityFieldModel; 5] = [
    EntityFieldModel::new("id", EntityFieldKind::Id),
    EntityFieldModel::new("title", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("type", EntityFieldKind::Categorical).searchable(),
    EntityFieldModel::new("areas", EntityFieldKind::TagSet),
    EntityFieldModel::new("deadline", EntityFieldKind::Date),
];

static MODEL: EntityModel = EntityModel {
    path: "predicate::tests::Opportunity",
    entity_name: "opportunity",
    primary_key: &FIELDS[0],
    fields: &FIELDS,
};

fn date(y: i32, m: Month, d: u8) -> Date {
    Date::from_calendar_date(y, m, d).unwrap()
}

fn festival() -> TestRow {
    TestRow::default()
        .with("id", 1u64)
        .with("title", "Festival de Música Independente")
        .with("type", "Festival")
        .with("areas", vec!["Música", "Produção Cultural"])
        .with("deadline", date(2023, Month::December, 31))
}

//
// Eval
//

#[test]
fn text_contains_ci_matches_any_case() {
    let row = festival();

    assert!(eval(&row, &Predicate::text_contains_ci("title", "MÚSICA")));
    assert!(!eval(&row, &Predicate::text_contains_ci("title", "teatro")));
}

#[test]
fn eq_is_exact_and_case_sensitive() {
    let row = festival();

    assert!(eval(&row, &Predicate::eq("type", "Festival")));
    assert!(!eval(&row, &Predicate::eq("type", "festival")));
}

#[test]
fn intersects_is_or_within_the_set() {
    let row = festival();

    assert!(eval(&row, &Predicate::intersects("areas", ["Teatro", "Música"])));
    assert!(!eval(&row, &Predicate::intersects("areas", ["Teatro", "Dança"])));
}

#[test]
fn date_gt_is_strict() {
    let row = festival();

    assert!(eval(&row, &Predicate::gt("deadline", date(2023, Month::December, 30))));
    assert!(!eval(&row, &Predicate::gt("deadline", date(2023, Month::December, 31))));
}

#[test]
fn missing_and_null_fields_never_match() {
    let row = TestRow::default().with("title", Value::Null);

    assert!(!eval(&row, &Predicate::text_contains_ci("title", "")));
    assert!(!eval(&row, &Predicate::eq("type", "Festival")));
    assert!(!eval(&row, &Predicate::intersects("areas", ["Música"])));
}

#[test]
fn ne_on_missing_field_is_false() {
    let row = TestRow::default();
    let pred = Predicate::Compare(ComparePredicate::new("type", CompareOp::Ne, "Edital"));

    assert!(!eval(&row, &pred));
}

#[test]
fn bit_ops_compose() {
    let row = festival();
    let pred = Predicate::eq("type", "Festival") & Predicate::text_contains_ci("title", "jazz");

    assert!(!eval(&row, &pred));
    assert!(eval(&row, &(pred | Predicate::True)));
}

//
// Normalize
//

#[test]
fn normalize_flattens_nested_groups() {
    let a = Predicate::eq("type", "Festival");
    let b = Predicate::text_contains_ci("title", "x");
    let c = Predicate::intersects("areas", ["Música"]);

    let nested = Predicate::and(vec![
        Predicate::and(vec![a.clone(), Predicate::True]),
        Predicate::and(vec![b.clone(), c.clone()]),
    ]);

    assert_eq!(normalize(&nested), Predicate::And(vec![a, b, c]));
}

#[test]
fn normalize_collapses_empty_and_single_groups() {
    let a = Predicate::eq("type", "Festival");

    assert_eq!(normalize(&Predicate::and(vec![])), Predicate::True);
    assert_eq!(normalize(&Predicate::or(vec![])), Predicate::False);
    assert_eq!(normalize(&Predicate::or(vec![a.clone()])), a);
}

#[test]
fn normalize_short_circuits_absorbing_children() {
    let a = Predicate::eq("type", "Festival");

    assert_eq!(
        normalize(&Predicate::And(vec![a.clone(), Predicate::False])),
        Predicate::False
    );
    assert_eq!(
        normalize(&Predicate::Or(vec![a, Predicate::True])),
        Predicate::True
    );
}

#[test]
fn normalize_removes_double_negation() {
    let a = Predicate::eq("type", "Festival");

    assert_eq!(normalize(&Predicate::not(Predicate::not(a.clone()))), a);
    assert_eq!(normalize(&Predicate::not(Predicate::True)), Predicate::False);
}

//
// Validate
//

#[test]
fn validate_accepts_well_typed_filters() {
    let pred = Predicate::And(vec![
        Predicate::text_contains_ci("title", "festival"),
        Predicate::eq("type", "Festival"),
        Predicate::intersects("areas", ["Música"]),
        Predicate::gt("deadline", date(2024, Month::January, 1)),
        Predicate::eq("id", 3u64),
    ]);

    assert_eq!(validate(&MODEL, &pred), Ok(()));
}

#[test]
fn validate_rejects_unknown_field() {
    let err = validate(&MODEL, &Predicate::eq("genre", "Jazz")).unwrap_err();

    assert_eq!(
        err,
        ValidateError::UnknownField {
            field: "genre".to_string()
        }
    );
}

#[test]
fn validate_rejects_tag_filter_on_categorical_field() {
    let err = validate(&MODEL, &Predicate::intersects("type", ["Festival"])).unwrap_err();

    assert!(matches!(
        err,
        ValidateError::UnsupportedOperator {
            kind: EntityFieldKind::Categorical,
            op: "intersects",
            ..
        }
    ));
}

#[test]
fn validate_rejects_ordering_on_text() {
    let pred = Predicate::gt("title", "M");

    assert!(matches!(
        validate(&MODEL, &pred),
        Err(ValidateError::UnsupportedOperator { op: ">", .. })
    ));
}

#[test]
fn validate_rejects_mistyped_literal() {
    let err = validate(&MODEL, &Predicate::gt("deadline", "2023-12-31")).unwrap_err();

    assert_eq!(
        err,
        ValidateError::InvalidLiteral {
            field: "deadline".to_string(),
            kind: EntityFieldKind::Date,
        }
    );
}

#[test]
fn validate_model_accepts_consistent_model() {
    assert!(validate_model(&MODEL).is_ok());
}

#[test]
fn validate_model_rejects_duplicate_fields() {
    static DUP: [EntityFieldModel; 3] = [
        EntityFieldModel::new("id", EntityFieldKind::Id),
        EntityFieldModel::new("name", EntityFieldKind::Text),
        EntityFieldModel::new("name", EntityFieldKind::Categorical),
    ];
    static BAD: EntityModel = EntityModel {
        path: "predicate::tests::Dup",
        entity_name: "dup",
        primary_key: &DUP[0],
        fields: &DUP,
    };

    let err = validate_model(&BAD).unwrap_err();
    assert!(err.message.contains("more than once"));
}

#[test]
fn validate_model_rejects_non_id_primary_key() {
    static BAD_PK: [EntityFieldModel; 1] = [EntityFieldModel::new("name", EntityFieldKind::Text)];
    static BAD: EntityModel = EntityModel {
        path: "predicate::tests::BadPk",
        entity_name: "bad_pk",
        primary_key: &BAD_PK[0],
        fields: &BAD_PK,
    };

    assert!(validate_model(&BAD).is_err());
}
