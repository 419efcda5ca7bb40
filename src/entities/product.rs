//! Product catalog entities and forms

use crate::core::entity::Record;
use crate::core::error::FormError;
use crate::core::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Construct a new product from a validated draft, synthesizing the id
    /// and creation timestamp
    pub fn new(draft: ProductDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            category: draft.category,
            created_at: Utc::now(),
        }
    }

    /// Build the replacement value for an update, keeping the id and
    /// creation timestamp of `self`
    pub fn apply(&self, draft: ProductDraft) -> Self {
        Self {
            id: self.id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            category: draft.category,
            created_at: self.created_at,
        }
    }
}

impl Record for Product {
    fn resource_name() -> &'static str {
        "product"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.category]
    }

    fn facet(&self) -> &str {
        &self.category
    }
}

/// Validated product fields, ready for the collection store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    pub description: String,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    pub stock: u32,

    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
}

/// Raw product form as received from the rendering collaborator.
///
/// Numeric fields are strings straight from the inputs; [`parse`]
/// trims and converts them before anything reaches a store.
///
/// [`parse`]: ProductForm::parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
}

impl ProductForm {
    /// Prefill the form from an existing product, as the edit modal does
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category: product.category.clone(),
        }
    }

    /// Parse and validate the form into a draft
    pub fn parse(&self) -> Result<ProductDraft, FormError> {
        let draft = ProductDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: validation::parse_price("price", &self.price)?,
            stock: validation::parse_count("stock", &self.stock)?,
            category: self.category.trim().to_string(),
        };
        validation::check(&draft)?;
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            name: "Wool Coat".to_string(),
            description: "Heavy winter coat".to_string(),
            price: "12800".to_string(),
            stock: "14".to_string(),
            category: "Outerwear".to_string(),
        }
    }

    #[test]
    fn test_form_parses_into_draft() {
        let draft = form().parse().expect("valid");
        assert_eq!(draft.price, 12800.0);
        assert_eq!(draft.stock, 14);
    }

    #[test]
    fn test_form_rejects_non_numeric_price() {
        let mut bad = form();
        bad.price = "twelve".to_string();
        let err = bad.parse().expect_err("rejected");
        assert!(matches!(err, FormError::NotANumber { field: "price" }));
    }

    #[test]
    fn test_form_rejects_empty_name() {
        let mut bad = form();
        bad.name = "   ".to_string();
        assert!(matches!(bad.parse(), Err(FormError::Invalid(_))));
    }

    #[test]
    fn test_apply_preserves_identity() {
        let product = Product::new(form().parse().expect("valid"));
        let mut draft = form().parse().expect("valid");
        draft.stock = 3;

        let updated = product.apply(draft);
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.stock, 3);
    }

    #[test]
    fn test_edit_prefill_round_trips() {
        let product = Product::new(form().parse().expect("valid"));
        let refilled = ProductForm::from_product(&product);
        let draft = refilled.parse().expect("valid");
        assert_eq!(product.apply(draft), product);
    }

    #[test]
    fn test_searchable_fields() {
        let product = Product::new(form().parse().expect("valid"));
        assert_eq!(product.search_text(), vec!["Wool Coat", "Outerwear"]);
        assert_eq!(product.facet(), "Outerwear");
    }
}
