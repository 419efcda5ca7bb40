//! Session state and the signed-in route gate
//!
//! Authentication here is deliberately shallow: one configured set of mock
//! credentials, a signed-in user kept in memory, and exactly one persisted
//! value — the user record under a fixed session key. The session store is
//! an opaque capability; no token format or session protocol exists.

use crate::core::error::AuthError;
use crate::entities::User;
use crate::storage::SessionStore;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use uuid::Uuid;

/// Credentials checked by [`Session::sign_in`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// View identity supplied by the routing collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Dashboard,
    Orders,
    OrderDetail(Uuid),
    Products,
    Settings,
}

impl Route {
    /// Every view except the login screen requires a signed-in user
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Signed-in state for the whole app.
///
/// Owned by the root context and handed to views by reference; the
/// `RwLock` only guards the in-memory copy of the user.
pub struct Session {
    store: Arc<dyn SessionStore>,
    key: String,
    credentials: Credentials,
    profile: User,
    latency: Duration,
    user: RwLock<Option<User>>,
}

impl Session {
    /// Create a signed-out session.
    ///
    /// `profile` is the identity returned when the mock credentials match;
    /// `latency` models the round trip of a real sign-in call.
    pub fn new(
        store: Arc<dyn SessionStore>,
        key: impl Into<String>,
        credentials: Credentials,
        profile: User,
        latency: Duration,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            credentials,
            profile,
            latency,
            user: RwLock::new(None),
        }
    }

    /// Restore the persisted user, if any.
    ///
    /// The persisted record is deserialized verbatim; a corrupt value is
    /// logged, discarded and cleared rather than surfaced as an error.
    pub async fn restore(&self) -> anyhow::Result<()> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(());
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(email = %user.email, "session restored");
                *self.user_mut() = Some(user);
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding corrupt session record");
                self.store.remove(&self.key).await?;
            }
        }
        Ok(())
    }

    /// Attempt a sign-in.
    ///
    /// Synchronous from the caller's point of view, but not instantaneous:
    /// the configured latency elapses before the outcome. Wrong credentials
    /// yield [`AuthError::InvalidCredentials`] with a user-visible message;
    /// attempts are independent, with no lockout or backoff.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.latency).await;

        if email != self.credentials.email || password != self.credentials.password {
            tracing::info!(email, "sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let user = self.profile.clone();
        *self.user_mut() = Some(user.clone());
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(err) = self.store.put(&self.key, json).await {
                    // the in-memory session stays valid either way
                    tracing::warn!(error = %err, "failed to persist session");
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to serialize session"),
        }
        tracing::info!(email = %user.email, "signed in");
        Ok(user)
    }

    /// Sign out: clear the in-memory user and the persisted record
    pub async fn sign_out(&self) {
        *self.user_mut() = None;
        if let Err(err) = self.store.remove(&self.key).await {
            tracing::warn!(error = %err, "failed to clear persisted session");
        }
        tracing::info!("signed out");
    }

    /// The currently signed-in user, if any
    pub fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The signed-in user, or [`AuthError::SignedOut`]
    pub fn require_user(&self) -> Result<User, AuthError> {
        self.current_user().ok_or(AuthError::SignedOut)
    }

    /// Gate a route: protected views redirect to the login screen when no
    /// user is signed in, and the login screen redirects home once one is.
    pub fn guard(&self, route: Route) -> Route {
        let signed_in = self.is_authenticated();
        if route.is_protected() && !signed_in {
            Route::Login
        } else if route == Route::Login && signed_in {
            Route::Dashboard
        } else {
            route
        }
    }

    fn user_mut(&self) -> std::sync::RwLockWriteGuard<'_, Option<User>> {
        self.user.write().unwrap_or_else(PoisonError::into_inner)
    }
}
