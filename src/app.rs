//! Root application context
//!
//! One `App` owns the global mutable state the views share: the session,
//! the order and product collections and the event bus. Views receive the
//! context explicitly rather than reaching for ambient globals, which keeps
//! ownership traceable and teardown explicit.

use crate::config::AppConfig;
use crate::core::auth::{Route, Session};
use crate::core::collection::Collection;
use crate::core::error::{AuthError, FormError};
use crate::core::events::{EventBus, RecordEvent, UiEvent};
use crate::core::list::ListController;
use crate::core::validation;
use crate::entities::{Order, OrderDraft, Product, ProductDraft, User};
use crate::storage::SessionStore;
use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

/// The back-office root context
pub struct App {
    config: AppConfig,
    session: Session,
    events: EventBus,
    orders: Collection<Order>,
    products: Collection<Product>,
}

impl App {
    /// Initialize the app: restore any persisted session, start with empty
    /// collections
    pub async fn init(config: AppConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        Self::init_inner(config, store, Collection::new(), Collection::new()).await
    }

    /// Initialize the app with the sample fixtures loaded
    pub async fn init_with_fixtures(
        config: AppConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self> {
        Self::init_inner(
            config,
            store,
            Collection::from_records(crate::seed::orders()),
            Collection::from_records(crate::seed::products()),
        )
        .await
    }

    async fn init_inner(
        config: AppConfig,
        store: Arc<dyn SessionStore>,
        orders: Collection<Order>,
        products: Collection<Product>,
    ) -> Result<Self> {
        let session = Session::new(
            store,
            config.session_key.clone(),
            config.account.credentials(),
            config.account.user(),
            config.sign_in_latency(),
        );
        session.restore().await?;

        Ok(Self {
            config,
            session,
            events: EventBus::default(),
            orders,
            products,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The session owning the signed-in state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The shared event bus
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// The shared order collection
    pub fn orders(&self) -> &Collection<Order> {
        &self.orders
    }

    /// The shared product collection
    pub fn products(&self) -> &Collection<Product> {
        &self.products
    }

    /// Mount a fresh orders list view
    pub fn orders_view(&self) -> ListController<Order> {
        ListController::new(
            self.orders.clone(),
            self.config.orders.page_size,
            self.config.debounce(),
        )
    }

    /// Mount a fresh products list view
    pub fn products_view(&self) -> ListController<Product> {
        ListController::new(
            self.products.clone(),
            self.config.products.page_size,
            self.config.debounce(),
        )
    }

    /// Gate a route through the session
    pub fn guard(&self, route: Route) -> Route {
        self.session.guard(route)
    }

    /// Sign in; on success the routing collaborator is asked to go home
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.session.sign_in(email, password).await?;
        self.events.publish(UiEvent::Navigate(Route::Dashboard));
        Ok(user)
    }

    /// Sign out and redirect to the login screen
    pub async fn sign_out(&self) {
        self.session.sign_out().await;
        self.events.publish(UiEvent::Navigate(Route::Login));
    }

    /// Create a product from a validated draft
    pub fn create_product(&self, draft: ProductDraft) -> Result<Product, FormError> {
        validation::check(&draft)?;
        let product = self.products.insert(Product::new(draft));
        self.publish_record(RecordEvent::Created {
            resource: "product".to_string(),
            id: product.id,
        });
        Ok(product)
    }

    /// Replace the product matching `id`; `Ok(None)` when it is absent
    pub fn update_product(
        &self,
        id: &Uuid,
        draft: ProductDraft,
    ) -> Result<Option<Product>, FormError> {
        validation::check(&draft)?;
        let updated = self.products.update(id, |current| current.apply(draft));
        if updated.is_some() {
            self.publish_record(RecordEvent::Updated {
                resource: "product".to_string(),
                id: *id,
            });
        }
        Ok(updated)
    }

    /// Delete the product matching `id`; absent ids are a no-op
    pub fn delete_product(&self, id: &Uuid) {
        self.products.remove(id);
        self.publish_record(RecordEvent::Deleted {
            resource: "product".to_string(),
            id: *id,
        });
    }

    /// Create an order from a validated draft
    pub fn create_order(&self, draft: OrderDraft) -> Result<Order, FormError> {
        validation::check(&draft)?;
        let order = self.orders.insert(Order::new(draft));
        self.publish_record(RecordEvent::Created {
            resource: "order".to_string(),
            id: order.id,
        });
        Ok(order)
    }

    /// Replace the order matching `id`; `Ok(None)` when it is absent
    pub fn update_order(&self, id: &Uuid, draft: OrderDraft) -> Result<Option<Order>, FormError> {
        validation::check(&draft)?;
        let updated = self.orders.update(id, |current| current.apply(draft));
        if updated.is_some() {
            self.publish_record(RecordEvent::Updated {
                resource: "order".to_string(),
                id: *id,
            });
        }
        Ok(updated)
    }

    /// Look up an order for the detail view and ask the routing
    /// collaborator to navigate there. `None` renders the not-found state.
    pub fn open_order(&self, id: &Uuid) -> Option<Order> {
        let order = self.orders.get(id)?;
        self.events.publish(UiEvent::Navigate(Route::OrderDetail(*id)));
        Some(order)
    }

    fn publish_record(&self, event: RecordEvent) {
        self.events.publish(UiEvent::Record(event));
    }
}
