//! Module: engine
//! Responsibility: the reorder -> filter -> paginate pipeline over a
//! borrowed record slice.
//! Does not own: query state (see `query`) or the record set (see `collection`).

#[cfg(test)]
mod tests;

use crate::{
    obs::sink::{self, MetricsEvent, Span},
    query::{ListQuery, QueryError, predicate},
    response::PageView,
    traits::EntityKind,
};

///
/// ListQueryEngine
///
/// Stateless executor for list queries. Rows are read in storage order
/// (oldest first) and surfaced most recent first; the source slice is
/// never mutated.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ListQueryEngine {
    debug: bool,
}

impl ListQueryEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self { debug: false }
    }

    /// Print a `[debug]` trace for every execution.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    /// Execute `query` over `items` and return the requested page.
    ///
    /// An empty match set is a normal empty page, not an error.
    pub fn execute<E: EntityKind>(
        &self,
        items: &[E],
        query: &ListQuery,
    ) -> Result<PageView<E>, QueryError> {
        let plan = match query.plan::<E>() {
            Ok(plan) => plan,
            Err(err) => {
                sink::record(MetricsEvent::QueryRejected {
                    entity_path: E::MODEL.path,
                });
                self.debug_log(format!("Rejected query on {}: {err}", E::MODEL.path));

                return Err(err);
            }
        };

        let mut span = Span::<E>::new();

        self.debug_log(format!(
            "Executing list query on {} ({} rows)",
            E::MODEL.path,
            items.len()
        ));
        self.debug_log(format!(
            "Predicate: {:?}, page={}, page_size={}",
            plan.predicate,
            plan.page.page(),
            plan.page.size()
        ));

        // Reorder for recency, then filter.
        let matched: Vec<&E> = items
            .iter()
            .rev()
            .filter(|row| predicate::eval(*row, &plan.predicate))
            .collect();

        let bounds = plan.page.bounds(matched.len());
        let rows: Vec<E> = matched[bounds.start..bounds.end]
            .iter()
            .map(|row| (*row).clone())
            .collect();

        span.set_rows(items.len() as u64, matched.len() as u64, rows.len() as u64);

        self.debug_log(format!(
            "List query complete -> page {}/{}, {} of {} matched rows",
            bounds.page,
            bounds.total_pages,
            rows.len(),
            matched.len()
        ));

        Ok(PageView::new(
            rows,
            bounds.page,
            plan.page.size(),
            bounds.total_pages,
            matched.len(),
        ))
    }
}
