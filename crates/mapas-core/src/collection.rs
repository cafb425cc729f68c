//! Module: collection
//! Responsibility: the record set of one entity type and its only mutation.
//! Does not own: filtering or pagination (see `engine`).

use crate::{
    engine::ListQueryEngine,
    error::InternalError,
    obs::sink::{self, MetricsEvent},
    query::{ListQuery, QueryError},
    response::PageView,
    traits::{EntityCreate, EntityKind},
    types::Id,
};
use std::collections::BTreeSet;

///
/// Collection
///
/// Records in insertion order, oldest first. The end of the vector is the
/// recency head: `insert_new` appends there and list views surface it first.
///

#[derive(Clone, Debug)]
pub struct Collection<E: EntityKind> {
    rows: Vec<E>,
}

impl<E: EntityKind> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityKind> Collection<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build a collection from seed records given oldest first.
    ///
    /// Ids must be unique; a repeated id is an invariant violation.
    pub fn from_seed(rows: impl IntoIterator<Item = E>) -> Result<Self, InternalError> {
        let rows: Vec<E> = rows.into_iter().collect();

        let mut seen = BTreeSet::new();
        for row in &rows {
            if !seen.insert(row.id()) {
                return Err(InternalError::collection_invariant(format!(
                    "duplicate id {} in {} seed",
                    row.id(),
                    E::MODEL.path
                )));
            }
        }

        Ok(Self { rows })
    }

    /// Id the next inserted record receives: one past the largest id, or 1.
    /// Fails once the largest id is `u64::MAX`.
    pub fn next_id(&self) -> Result<Id, InternalError> {
        self.rows
            .iter()
            .map(EntityKind::id)
            .max()
            .unwrap_or_default()
            .checked_next()
            .ok_or_else(|| {
                InternalError::collection_invariant(format!(
                    "id space exhausted for {}",
                    E::MODEL.path
                ))
            })
    }

    /// Finalize `draft` with a fresh id and insert it at the recency head.
    pub fn insert_new(&mut self, draft: E::Draft) -> Result<&E, InternalError>
    where
        E: EntityCreate,
    {
        let id = self.next_id()?;
        let index = self.rows.len();
        self.rows.push(E::from_draft(id, draft));

        sink::record(MetricsEvent::Insert {
            entity_path: E::MODEL.path,
        });

        Ok(&self.rows[index])
    }

    /// Look up one record by id.
    pub fn get(&self, id: Id) -> Result<&E, InternalError> {
        self.rows
            .iter()
            .find(|row| row.id() == id)
            .ok_or_else(|| InternalError::not_found(E::MODEL.entity_name, id))
    }

    #[must_use]
    pub fn contains(&self, id: Id) -> bool {
        self.rows.iter().any(|row| row.id() == id)
    }

    /// Records in storage order, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.rows.iter()
    }

    /// Records most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &E> {
        self.rows.iter().rev()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &[E] {
        self.rows.as_slice()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Run `query` over this collection with a default engine.
    pub fn query(&self, query: &ListQuery) -> Result<PageView<E>, QueryError> {
        ListQueryEngine::new().execute(&self.rows, query)
    }
}

impl<'a, E: EntityKind> IntoIterator for &'a Collection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

///
/// TESTS
///
