//! Per-user context storage.
//!
//! Rule-driven callers keep textual bindings between matches (see
//! [`crate::matcher::text_bindings`]) keyed by user. Stores are
//! concurrency-safe but make no durability promises.

use std::collections::HashMap;

use dashmap::DashMap;

/// Textual bindings kept for one user.
pub type UserContext = HashMap<String, String>;

pub trait ContextStore: Send + Sync {
    /// Returns the stored context for `user`, empty if none was saved.
    fn load(&self, user: &str) -> UserContext;

    /// Replaces the stored context for `user`.
    fn save(&self, user: &str, context: UserContext);
}

/// In-memory store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryContextStore {
    store: DashMap<String, UserContext>,
}

impl MemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContextStore for MemoryContextStore {
    fn load(&self, user: &str) -> UserContext {
        self.store
            .get(user)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }

    fn save(&self, user: &str, context: UserContext) {
        self.store.insert(user.to_string(), context);
    }
}
