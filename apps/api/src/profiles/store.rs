//! In-memory profile store. Lives for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::profiles::models::UserProfile;

/// Cheaply cloneable handle to the shared profile map.
/// Concurrent writers to the same id: last write wins.
#[derive(Clone, Default)]
pub struct ProfileStore {
    inner: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or fully replaces the profile keyed by `profile.id`. Returns the id.
    pub async fn set(&self, profile: UserProfile) -> String {
        let id = profile.id.clone();
        self.inner.write().await.insert(id.clone(), profile);
        id
    }

    pub async fn get(&self, id: &str) -> Option<UserProfile> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
