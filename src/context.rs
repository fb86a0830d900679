//! Capabilities injected into every storefront component.
//!
//! Nothing in the UI reaches for global state: navigation, auth, strings,
//! catalog and wishlist all arrive through [`StoreContext`].

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::i18n::Localizer;
use crate::wishlist::Wishlist;

/// Navigation collaborator. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}

pub type AuthContinuation = Box<dyn FnOnce() + Send + 'static>;

/// Auth-gate collaborator used by navigation widgets to guard routes.
pub trait AuthGate: Send + Sync {
    fn is_authenticated(&self) -> bool;

    /// Ask the shopper to sign in; `on_success` runs once they do.
    fn prompt_auth(&self, on_success: AuthContinuation);
}

#[derive(Clone)]
pub struct StoreContext {
    pub navigator: Arc<dyn Navigator>,
    pub auth: Arc<dyn AuthGate>,
    pub localizer: Arc<dyn Localizer>,
    pub catalog: Arc<dyn CatalogSource>,
    pub wishlist: Arc<dyn Wishlist>,
}

/// In-process router: remembers the current route and the trail behind it.
#[derive(Default)]
pub struct Router {
    history: Mutex<Vec<String>>,
}

impl Router {
    pub fn new(initial: &str) -> Self {
        Self {
            history: Mutex::new(vec![initial.to_string()]),
        }
    }

    pub fn current(&self) -> String {
        self.history
            .lock()
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    /// Returns to the previous route. Stays put at the root of the trail.
    pub fn back(&self) -> String {
        let mut history = self.history.lock();
        if history.len() > 1 {
            history.pop();
        }
        history.last().cloned().unwrap_or_else(|| "/".to_string())
    }

}

impl Navigator for Router {
    fn navigate_to(&self, route: &str) {
        let mut history = self.history.lock();
        if history.last().map(String::as_str) == Some(route) {
            return;
        }
        tracing::info!(route, "navigate");
        history.push(route.to_string());
    }
}

/// Session held by the running storefront.
///
/// `prompt_auth` parks the continuation until the shopper answers the
/// sign-in prompt; a second prompt replaces the first.
#[derive(Default)]
pub struct SessionGate {
    authenticated: AtomicBool,
    pending: Mutex<Option<AuthContinuation>>,
}

impl SessionGate {
    pub fn new(signed_in: bool) -> Self {
        Self {
            authenticated: AtomicBool::new(signed_in),
            pending: Mutex::new(None),
        }
    }

    pub fn has_pending_prompt(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Signs the session in and runs the parked continuation, if any.
    pub fn confirm(&self) {
        self.authenticated.store(true, Ordering::SeqCst);
        let continuation = self.pending.lock().take();
        tracing::info!(resumed = continuation.is_some(), "signed in");
        if let Some(continuation) = continuation {
            continuation();
        }
    }

    /// Drops the parked continuation without signing in.
    pub fn cancel(&self) {
        self.pending.lock().take();
    }

    /// Ends the session. A parked prompt is dropped with it.
    pub fn sign_out(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
        self.pending.lock().take();
        tracing::info!("signed out");
    }
}

impl AuthGate for SessionGate {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    fn prompt_auth(&self, on_success: AuthContinuation) {
        if self.is_authenticated() {
            on_success();
            return;
        }
        *self.pending.lock() = Some(on_success);
    }
}
