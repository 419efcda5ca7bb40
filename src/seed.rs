//! Sample catalog, orders and account used by demos and tests
//!
//! The fixtures mirror a small apparel shop: 23 products across six
//! categories and a dozen orders spanning every status. Quantities and
//! prices are arbitrary but stable, so scenario tests can rely on the
//! population sizes.

use crate::entities::{Order, OrderDraft, OrderItem, OrderStatus, Product, ProductDraft};
use chrono::{Duration, Utc};

const CATALOG: [(&str, &str, f64, u32); 23] = [
    ("Linen Shirt", "Tops", 5800.0, 42),
    ("Oxford Button-Down", "Tops", 6400.0, 18),
    ("Graphic Tee", "Tops", 2900.0, 120),
    ("Merino Sweater", "Tops", 9800.0, 25),
    ("Henley Long Sleeve", "Tops", 4200.0, 61),
    ("Slim Chinos", "Bottoms", 7200.0, 38),
    ("Wide-Leg Trousers", "Bottoms", 8400.0, 12),
    ("Denim Jeans", "Bottoms", 8900.0, 55),
    ("Pleated Skirt", "Bottoms", 6800.0, 21),
    ("Wool Coat", "Outerwear", 24800.0, 8),
    ("Rain Shell", "Outerwear", 13600.0, 16),
    ("Down Jacket", "Outerwear", 19800.0, 11),
    ("Denim Jacket", "Outerwear", 11200.0, 27),
    ("Leather Sneakers", "Shoes", 12800.0, 33),
    ("Canvas High-Tops", "Shoes", 7400.0, 48),
    ("Suede Loafers", "Shoes", 15800.0, 9),
    ("Trail Runners", "Shoes", 11800.0, 22),
    ("Canvas Tote", "Bags", 3200.0, 75),
    ("Leather Messenger", "Bags", 18900.0, 7),
    ("Nylon Backpack", "Bags", 8600.0, 31),
    ("Leather Belt", "Accessories", 4500.0, 64),
    ("Wool Scarf", "Accessories", 3800.0, 29),
    ("Silver Ring", "Accessories", 6200.0, 15),
];

/// The 23-product sample catalog, newest first
pub fn products() -> Vec<Product> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, (name, category, price, stock))| {
            let mut product = Product::new(ProductDraft {
                name: name.to_string(),
                description: format!("{name} from the standing {category} line"),
                price: *price,
                stock: *stock,
                category: category.to_string(),
            });
            product.created_at = Utc::now() - Duration::days(i as i64);
            product
        })
        .collect()
}

const CUSTOMERS: [(&str, &str); 12] = [
    ("Haruto Tanaka", "haruto.tanaka@example.com"),
    ("Yui Suzuki", "yui.suzuki@example.com"),
    ("Sota Takahashi", "sota.takahashi@example.com"),
    ("Mei Watanabe", "mei.watanabe@example.com"),
    ("Ren Ito", "ren.ito@example.com"),
    ("Aoi Yamamoto", "aoi.yamamoto@example.com"),
    ("Hina Nakamura", "hina.nakamura@example.com"),
    ("Yuto Kobayashi", "yuto.kobayashi@example.com"),
    ("Sakura Kato", "sakura.kato@example.com"),
    ("Riku Yoshida", "riku.yoshida@example.com"),
    ("Akari Tanaka", "akari.tanaka@example.com"),
    ("Kaito Sasaki", "kaito.sasaki@example.com"),
];

/// A dozen sample orders covering every status, newest first
pub fn orders() -> Vec<Order> {
    let catalog = products();
    CUSTOMERS
        .iter()
        .enumerate()
        .map(|(i, (name, email))| {
            let first = &catalog[i % catalog.len()];
            let second = &catalog[(i + 7) % catalog.len()];
            let mut order = Order::new(OrderDraft {
                customer_name: name.to_string(),
                customer_email: email.to_string(),
                items: vec![
                    OrderItem {
                        product_id: first.id,
                        product_name: first.name.clone(),
                        quantity: 1 + (i as u32 % 3),
                        unit_price: first.price,
                    },
                    OrderItem {
                        product_id: second.id,
                        product_name: second.name.clone(),
                        quantity: 1,
                        unit_price: second.price,
                    },
                ],
                status: OrderStatus::ALL[i % OrderStatus::ALL.len()],
            });
            order.created_at = Utc::now() - Duration::hours(6 * i as i64);
            order
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_and_categories() {
        let products = products();
        assert_eq!(products.len(), 23);

        let categories: HashSet<&str> =
            products.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn test_orders_cover_every_status() {
        let orders = orders();
        assert_eq!(orders.len(), 12);
        for status in OrderStatus::ALL {
            assert!(orders.iter().any(|o| o.status == status), "{status} seeded");
        }
        assert!(orders.iter().all(|o| o.total() > 0.0));
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 23);
    }
}
