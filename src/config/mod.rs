//! Configuration loading and management

use crate::core::auth::Credentials;
use crate::entities::{Role, User};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Configuration for one list view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Fixed page size for the view
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { page_size: 8 }
    }
}

/// Mock sign-in account: the accepted credentials plus the identity
/// returned on success
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "password123".to_string(),
            name: "Taro Tanaka".to_string(),
            role: Role::Admin,
        }
    }
}

impl AccountConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// The user handed out on a successful sign-in
    pub fn user(&self) -> User {
        User {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Complete configuration for the back-office core
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quiet period for debounced search inputs, in milliseconds
    pub debounce_ms: u64,

    /// Artificial sign-in latency, in milliseconds
    pub sign_in_latency_ms: u64,

    /// Key under which the signed-in user is persisted
    pub session_key: String,

    /// Orders list view
    pub orders: ViewConfig,

    /// Products list view
    pub products: ViewConfig,

    /// Mock sign-in account
    pub account: AccountConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            sign_in_latency_ms: 800,
            session_key: crate::storage::SESSION_KEY.to_string(),
            orders: ViewConfig::default(),
            products: ViewConfig::default(),
            account: AccountConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Debounce quiet period as a [`Duration`]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Sign-in latency as a [`Duration`]
    pub fn sign_in_latency(&self) -> Duration {
        Duration::from_millis(self.sign_in_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_ui() {
        let config = AppConfig::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.orders.page_size, 8);
        assert_eq!(config.products.page_size, 8);
        assert_eq!(config.session_key, "auth_user");
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config = AppConfig::from_yaml_str(
            "debounce_ms: 150\nproducts:\n  page_size: 12\naccount:\n  email: ops@example.com\n",
        )
        .expect("valid yaml");

        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.products.page_size, 12);
        assert_eq!(config.orders.page_size, 8);
        assert_eq!(config.account.email, "ops@example.com");
        // unspecified account fields fall back to the defaults
        assert_eq!(config.account.role, Role::Admin);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml_str("debounce_ms: [oops").is_err());
    }
}
