//! Concrete back-office entity types

pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderDraft, OrderItem, OrderStatus};
pub use product::{Product, ProductDraft, ProductForm};
pub use user::{Role, User};
