//! Module: directory
//! Responsibility: list-page controllers that own query state and a
//! collection, and re-derive the visible page after every change.
//! Does not own: filtering semantics (see `mapas_core::engine`).

use crate::{
    Error,
    config::DirectoryConfig,
    entity::{Agent, Event, Opportunity, Project, Space},
    seed,
    validate::ValidateDraft,
};
use mapas_core::{
    collection::Collection,
    engine::ListQueryEngine,
    query::ListQuery,
    response::{PageLink, PageView},
    traits::{EntityCreate, EntityKind},
    types::Id,
};
use std::collections::BTreeSet;
use time::Date;

///
/// ListPage
///
/// One list screen. Every mutation of the query state runs the engine
/// again; a change the engine rejects leaves both the query and the view
/// untouched. Changing the keyword or any filter returns to page 1.
///

#[derive(Clone, Debug)]
pub struct ListPage<E: EntityKind> {
    collection: Collection<E>,
    query: ListQuery,
    engine: ListQueryEngine,
    radius: u32,
    view: PageView<E>,
}

impl<E: EntityKind> ListPage<E> {
    pub fn new(collection: Collection<E>, page_size: u32) -> Result<Self, Error> {
        Self::with_engine(collection, page_size, ListQueryEngine::new())
    }

    /// Build a page sized by `config` for this entity.
    pub fn from_config(collection: Collection<E>, config: &DirectoryConfig) -> Result<Self, Error> {
        let mut page = Self::new(collection, config.page_size_for(E::MODEL.entity_name))?;
        page.radius = config.pagination_radius;

        Ok(page)
    }

    pub fn with_engine(
        collection: Collection<E>,
        page_size: u32,
        engine: ListQueryEngine,
    ) -> Result<Self, Error> {
        let query = ListQuery::new().page_size(page_size);
        let view = engine.execute(collection.as_slice(), &query)?;

        Ok(Self {
            collection,
            query,
            engine,
            radius: 1,
            view,
        })
    }

    //
    // State
    //

    #[must_use]
    pub const fn view(&self) -> &PageView<E> {
        &self.view
    }

    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    #[must_use]
    pub const fn collection(&self) -> &Collection<E> {
        &self.collection
    }

    /// Pagination bar links for the current view.
    #[must_use]
    pub fn page_links(&self) -> Vec<PageLink> {
        self.view.window(self.radius)
    }

    /// Detail lookup by id.
    pub fn get(&self, id: Id) -> Result<&E, Error> {
        Ok(self.collection.get(id)?)
    }

    //
    // Filters
    //

    pub fn set_keyword(&mut self, keyword: impl Into<String>) -> Result<&PageView<E>, Error> {
        let keyword = keyword.into();
        self.refilter(|q| q.set_keyword(keyword))
    }

    pub fn set_filter_eq(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&PageView<E>, Error> {
        let (field, value) = (field.into(), value.into());
        self.refilter(|q| q.set_filter_eq(field, value))
    }

    pub fn set_filter_tags(
        &mut self,
        field: impl Into<String>,
        tags: BTreeSet<String>,
    ) -> Result<&PageView<E>, Error> {
        let field = field.into();
        self.refilter(|q| q.set_filter_tags(field, tags))
    }

    pub fn add_filter_tag(
        &mut self,
        field: impl Into<String>,
        tag: impl Into<String>,
    ) -> Result<&PageView<E>, Error> {
        let (field, tag) = (field.into(), tag.into());
        self.refilter(|q| q.add_filter_tag(field, tag))
    }

    pub fn remove_filter_tag(&mut self, field: &str, tag: &str) -> Result<&PageView<E>, Error> {
        self.refilter(|q| q.remove_filter_tag(field, tag))
    }

    pub fn set_filter_after(
        &mut self,
        field: impl Into<String>,
        date: Option<Date>,
    ) -> Result<&PageView<E>, Error> {
        let field = field.into();
        self.refilter(|q| q.set_filter_after(field, date))
    }

    pub fn set_filter_until(
        &mut self,
        field: impl Into<String>,
        date: Option<Date>,
    ) -> Result<&PageView<E>, Error> {
        let field = field.into();
        self.refilter(|q| q.set_filter_until(field, date))
    }

    pub fn clear_filters(&mut self) -> Result<&PageView<E>, Error> {
        self.refilter(ListQuery::clear_filters)
    }

    //
    // Paging
    //

    /// Jump to `page`; out-of-range pages clamp to the nearest valid one.
    pub fn go_to(&mut self, page: u32) -> Result<&PageView<E>, Error> {
        self.apply(|q| q.set_page(page))
    }

    pub fn next_page(&mut self) -> Result<&PageView<E>, Error> {
        let page = self.view.page().saturating_add(1);
        self.go_to(page)
    }

    pub fn prev_page(&mut self) -> Result<&PageView<E>, Error> {
        let page = self.view.page().saturating_sub(1).max(1);
        self.go_to(page)
    }

    //
    // Execution
    //

    fn refilter(&mut self, f: impl FnOnce(&mut ListQuery)) -> Result<&PageView<E>, Error> {
        self.apply(|q| {
            f(q);
            q.set_page(1);
        })
    }

    fn apply(&mut self, f: impl FnOnce(&mut ListQuery)) -> Result<&PageView<E>, Error> {
        let mut next = self.query.clone();
        f(&mut next);

        let view = self.engine.execute(self.collection.as_slice(), &next)?;
        next.set_page(view.page());
        self.query = next;
        self.view = view;

        Ok(&self.view)
    }

    fn refresh(&mut self) -> Result<&PageView<E>, Error> {
        self.apply(|_| {})
    }
}

impl<E> ListPage<E>
where
    E: EntityCreate,
    E::Draft: ValidateDraft,
{
    /// Validate and insert a draft, then show page 1 where the new record
    /// leads the list. Filters stay as they are.
    pub fn submit(&mut self, draft: E::Draft) -> Result<Id, Error> {
        draft.validate()?;

        let id = self.collection.insert_new(draft)?.id();
        self.query.set_page(1);
        self.refresh()?;

        Ok(id)
    }
}

///
/// Directory
///
/// Every list page of the registry, each seeded with its sample records.
///

#[derive(Clone, Debug)]
pub struct Directory {
    pub agents: ListPage<Agent>,
    pub spaces: ListPage<Space>,
    pub events: ListPage<Event>,
    pub opportunities: ListPage<Opportunity>,
    pub projects: ListPage<Project>,
}

impl Directory {
    pub fn seeded(config: &DirectoryConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            agents: ListPage::from_config(Collection::from_seed(seed::agents())?, config)?,
            spaces: ListPage::from_config(Collection::from_seed(seed::spaces())?, config)?,
            events: ListPage::from_config(Collection::from_seed(seed::events())?, config)?,
            opportunities: ListPage::from_config(
                Collection::from_seed(seed::opportunities())?,
                config,
            )?,
            projects: ListPage::from_config(Collection::from_seed(seed::projects())?, config)?,
        })
    }
}
