use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::repositories::{StoreError, UserDirectory};

/// In-process user directory backed by a plain map.
///
/// Identity lives outside this crate; callers register the display
/// names they already know and unknown users fall back to a generated
/// name in the use cases.
pub struct StaticUserDirectory {
    names: RwLock<HashMap<String, String>>,
}

impl StaticUserDirectory {
    pub fn new() -> Self {
        Self {
            names: RwLock::new(HashMap::new()),
        }
    }

    /// Register or replace a user's display name
    pub fn insert(&self, user_id: &str, display_name: &str) {
        let mut names = self.names.write().unwrap();
        names.insert(user_id.to_string(), display_name.to_string());
    }

    /// Forget a user's display name
    pub fn remove(&self, user_id: &str) {
        let mut names = self.names.write().unwrap();
        names.remove(user_id);
    }
}

impl Default for StaticUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn display_name(&self, user_id: &str) -> Result<Option<String>, StoreError> {
        let names = self.names.read().unwrap();
        Ok(names.get(user_id).cloned())
    }
}
