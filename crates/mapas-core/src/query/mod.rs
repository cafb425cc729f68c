//! Module: query
//! Responsibility: externally-owned list query state and its compilation
//! into a validated predicate + page specification.
//! Does not own: row iteration or slicing (see `engine`).

mod page;
pub mod predicate;


pub use page::{PageBounds, PageError, PageSpec};

use crate::{
    error::InternalError,
    query::predicate::{Predicate, ValidateError},
    traits::EntityKind,
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error as ThisError;
use time::Date;

///
/// CONSTANTS
///

/// Rows per page when a query does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 3;

///
/// QueryError
///

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("query validation failed: {0}")]
    Validate(#[from] ValidateError),

    #[error("{0}")]
    Page(#[from] PageError),

    #[error("{0}")]
    Execute(#[from] InternalError),
}

///
/// ListQuery
///
/// Query state owned by a list page: keyword, categorical filters, tag
/// filters, date bounds, and the requested page. Setting an empty
/// value (empty string, empty tag set) removes that filter; an empty value
/// that arrives through deserialization compiles to no filter.
///
/// `ListQuery` is plain data; nothing is evaluated until `plan`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ListQuery {
    keyword: String,
    categorical: BTreeMap<String, String>,
    tags: BTreeMap<String, BTreeSet<String>>,
    after: BTreeMap<String, Date>,
    until: BTreeMap<String, Date>,
    page: u32,
    page_size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ListQuery {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keyword: String::new(),
            categorical: BTreeMap::new(),
            tags: BTreeMap::new(),
            after: BTreeMap::new(),
            until: BTreeMap::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    //
    // Builders
    //

    /// Case-insensitive substring matched against every searchable field.
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.set_keyword(keyword);
        self
    }

    /// Exact-match filter on a categorical field.
    #[must_use]
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter_eq(field, value);
        self
    }

    /// Tag filter: the field's tag set must share at least one value.
    #[must_use]
    pub fn filter_tags<I, S>(mut self, field: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_filter_tags(field, tags);
        self
    }

    /// Date filter: the field must be strictly after `date`.
    #[must_use]
    pub fn filter_after(mut self, field: impl Into<String>, date: Date) -> Self {
        self.set_filter_after(field, Some(date));
        self
    }

    /// Date filter: the field must be on or before `date`.
    #[must_use]
    pub fn filter_until(mut self, field: impl Into<String>, date: Date) -> Self {
        self.set_filter_until(field, Some(date));
        self
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    //
    // Mutators
    //

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn set_filter_eq(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let (field, value) = (field.into(), value.into());
        if value.is_empty() {
            self.categorical.remove(&field);
        } else {
            self.categorical.insert(field, value);
        }
    }

    pub fn set_filter_tags<I, S>(&mut self, field: impl Into<String>, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field = field.into();
        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            self.tags.remove(&field);
        } else {
            self.tags.insert(field, tags);
        }
    }

    /// Add one tag to a field's tag filter, keeping the ones already selected.
    pub fn add_filter_tag(&mut self, field: impl Into<String>, tag: impl Into<String>) {
        self.tags.entry(field.into()).or_default().insert(tag.into());
    }

    /// Remove one tag; the filter disappears once its last tag is removed.
    pub fn remove_filter_tag(&mut self, field: &str, tag: &str) {
        if let Some(tags) = self.tags.get_mut(field) {
            tags.remove(tag);
            if tags.is_empty() {
                self.tags.remove(field);
            }
        }
    }

    pub fn set_filter_after(&mut self, field: impl Into<String>, date: Option<Date>) {
        let field = field.into();
        match date {
            Some(date) => {
                self.after.insert(field, date);
            }
            None => {
                self.after.remove(&field);
            }
        }
    }

    pub fn set_filter_until(&mut self, field: impl Into<String>, date: Option<Date>) {
        let field = field.into();
        match date {
            Some(date) => {
                self.until.insert(field, date);
            }
            None => {
                self.until.remove(&field);
            }
        }
    }

    pub const fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub const fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
    }

    /// Drop the keyword and every filter; page and page size are kept.
    pub fn clear_filters(&mut self) {
        self.keyword.clear();
        self.categorical.clear();
        self.tags.clear();
        self.after.clear();
        self.until.clear();
    }

    //
    // Accessors
    //

    #[must_use]
    pub fn keyword_str(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn eq_filter(&self, field: &str) -> Option<&str> {
        self.categorical.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn tag_filter(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.tags.get(field)
    }

    #[must_use]
    pub fn after_filter(&self, field: &str) -> Option<Date> {
        self.after.get(field).copied()
    }

    #[must_use]
    pub fn until_filter(&self, field: &str) -> Option<Date> {
        self.until.get(field).copied()
    }

    #[must_use]
    pub const fn requested_page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn requested_page_size(&self) -> u32 {
        self.page_size
    }

    /// True when no keyword and no filter is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.keyword.is_empty()
            && self.categorical.values().all(String::is_empty)
            && self.tags.values().all(BTreeSet::is_empty)
            && self.after.is_empty()
            && self.until.is_empty()
    }

    //
    // Compilation
    //

    /// Compile the filters into one predicate for `E`.
    ///
    /// Keyword is an `Or` over searchable fields; every other filter is
    /// `And`-combined with it. The result is normalized but not validated.
    #[must_use]
    pub fn predicate<E: EntityKind>(&self) -> Predicate {
        let mut clauses = Vec::new();

        if !self.keyword.is_empty() {
            clauses.push(Predicate::or(
                E::MODEL
                    .searchable_fields()
                    .map(|field| Predicate::text_contains_ci(field.name, self.keyword.as_str()))
                    .collect(),
            ));
        }

        // Empty values mean "no filter" even when the state was built
        // without the setters (deserialized).
        for (field, value) in self.categorical.iter().filter(|(_, v)| !v.is_empty()) {
            clauses.push(Predicate::eq(field.as_str(), value.as_str()));
        }

        for (field, tags) in self.tags.iter().filter(|(_, t)| !t.is_empty()) {
            clauses.push(Predicate::Intersects {
                field: field.clone(),
                values: tags.iter().map(|t| Value::Text(t.clone())).collect(),
            });
        }

        for (field, date) in &self.after {
            clauses.push(Predicate::gt(field.as_str(), *date));
        }

        for (field, date) in &self.until {
            clauses.push(Predicate::lte(field.as_str(), *date));
        }

        predicate::normalize(&Predicate::and(clauses))
    }

    /// Validate the query against `E`'s model and resolve the page request.
    pub fn plan<E: EntityKind>(&self) -> Result<QueryPlan, QueryError> {
        predicate::validate_model(E::MODEL)?;
        let page = PageSpec::new(self.page, self.page_size)?;
        let predicate = self.predicate::<E>();
        predicate::validate(E::MODEL, &predicate)?;

        Ok(QueryPlan { predicate, page })
    }
}

///
/// QueryPlan
///
/// Validated, executable form of a `ListQuery` for one entity type.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryPlan {
    pub predicate: Predicate,
    pub page: PageSpec,
}
