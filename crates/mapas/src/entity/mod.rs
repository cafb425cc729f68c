//! Directory records: one module per entity, each carrying its record
//! type, its creation draft, and the field model the list engine reads.

mod agent;
mod event;
mod opportunity;
mod project;
mod space;

pub use agent::{Agent, AgentDraft};
pub use event::{Event, EventDraft};
pub use opportunity::{Opportunity, OpportunityDraft};
pub use project::{Project, ProjectDraft};
pub use space::{Space, SpaceDraft};
