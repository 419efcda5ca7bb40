//! # Backoffice
//!
//! List-management core for an e-commerce back office: the state and timing
//! logic behind every list view — collection stores with snapshot semantics,
//! debounced search input, facet filtering and pagination — without any
//! rendering or transport concerns.
//!
//! ## Architecture
//!
//! Three pieces compose into the per-view pipeline:
//!
//! - [`Collection`](core::Collection): the ordered, id-unique record store.
//!   Mutations publish fresh immutable snapshots, so readers never observe a
//!   half-mutated sequence.
//! - [`Debounced`](core::Debounced): raw keystrokes in, a trailing committed
//!   value out once the input has been quiet for the configured window.
//! - [`Pager`](core::Pager): page arithmetic with clamping; `total_pages` is
//!   0 for an empty population and navigation never goes out of range.
//!
//! [`ListController`](core::ListController) wires them together: snapshot →
//! filter → clamp → page window, resetting to page 1 whenever the committed
//! search or the facet selector changes. [`App`](app::App) owns the shared
//! state (session, collections, event bus) and hands out view controllers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice::prelude::*;
//! use std::sync::Arc;
//!
//! let config = AppConfig::default();
//! let store = Arc::new(InMemorySessionStore::new());
//! let app = App::init_with_fixtures(config, store).await?;
//!
//! app.sign_in("admin@example.com", "password123").await?;
//!
//! let mut view = app.products_view();
//! view.search_input("coat");
//! view.settled().await;            // debounce window elapses, page resets
//! let page = view.page();          // visible window + pagination metadata
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod seed;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::app::App;
    pub use crate::config::{AccountConfig, AppConfig, ViewConfig};
    pub use crate::core::{
        AuthError, Collection, Credentials, Debounced, Error, EventBus, EventEnvelope, FormError,
        ListController, ListFilter, Page, PageMeta, Pager, Record, RecordEvent, Route, Session,
        UiEvent,
    };
    pub use crate::entities::{
        Order, OrderDraft, OrderItem, OrderStatus, Product, ProductDraft, ProductForm, Role, User,
    };
    pub use crate::storage::{InMemorySessionStore, SESSION_KEY, SessionStore};
}

/// Install a global `tracing` subscriber honoring `RUST_LOG`.
///
/// Optional; embedders that already configure tracing should skip this.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
