//! Order entities

use crate::core::entity::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order — drives the filter dropdown
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a status from its wire form
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    pub product_id: Uuid,

    #[validate(length(min = 1, message = "product name must not be empty"))]
    pub product_name: String,

    pub quantity: u32,

    #[validate(range(min = 0.0, message = "unit price must not be negative"))]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// A customer order.
///
/// `code` is the human-facing order number shown in lists and matched by
/// the search predicate; it is derived from the id at creation and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub code: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Construct a new order from a validated draft, synthesizing the id,
    /// display code and creation timestamp
    pub fn new(draft: OrderDraft) -> Self {
        let id = Uuid::new_v4();
        Self {
            code: Self::code_for(&id),
            id,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            items: draft.items,
            status: draft.status,
            created_at: Utc::now(),
        }
    }

    /// Build the replacement value for an update, keeping the id, code and
    /// creation timestamp of `self`
    pub fn apply(&self, draft: OrderDraft) -> Self {
        Self {
            id: self.id,
            code: self.code.clone(),
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            items: draft.items,
            status: draft.status,
            created_at: self.created_at,
        }
    }

    /// Order total: the sum of line subtotals
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    fn code_for(id: &Uuid) -> String {
        let hex = id.simple().to_string();
        format!("ORD-{}", hex[..8].to_uppercase())
    }
}

impl Record for Order {
    fn resource_name() -> &'static str {
        "order"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.code, &self.customer_name]
    }

    fn facet(&self) -> &str {
        self.status.as_str()
    }
}

/// Validated order fields, ready for the collection store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderDraft {
    #[validate(length(min = 1, message = "customer name must not be empty"))]
    pub customer_name: String,

    #[validate(email(message = "customer email must be a valid address"))]
    pub customer_email: String,

    #[validate(nested)]
    pub items: Vec<OrderItem>,

    pub status: OrderStatus,
}
