//! Core module containing the list-management pipeline and its supporting types

pub mod auth;
pub mod collection;
pub mod debounce;
pub mod entity;
pub mod error;
pub mod events;
pub mod filter;
pub mod list;
pub mod query;
pub mod validation;

pub use auth::{Credentials, Route, Session};
pub use collection::Collection;
pub use debounce::Debounced;
pub use entity::Record;
pub use error::{AuthError, Error, FormError};
pub use events::{EventBus, EventEnvelope, RecordEvent, UiEvent};
pub use filter::ListFilter;
pub use list::{ListController, Page};
pub use query::{PageMeta, Pager};
