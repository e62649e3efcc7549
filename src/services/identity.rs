use crate::models::Member;
use crate::services::directory::DirectoryStore;
use std::sync::{Arc, RwLock};

/// Source of the signed-in member
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<Member>;
}

/// Stand-in identity: a single configured member who can log in and out
///
/// Starts signed out.
pub struct MockIdentity {
    directory: Arc<dyn DirectoryStore>,
    user_id: String,
    signed_in: RwLock<bool>,
}

impl MockIdentity {
    pub fn new(directory: Arc<dyn DirectoryStore>, user_id: impl Into<String>) -> Self {
        Self {
            directory,
            user_id: user_id.into(),
            signed_in: RwLock::new(false),
        }
    }

    /// Sign the configured member in, returning their profile
    pub fn login(&self) -> Option<Member> {
        *self.signed_in.write().unwrap_or_else(|e| e.into_inner()) = true;
        tracing::info!("Mock login as {}", self.user_id);
        self.current_user()
    }

    pub fn logout(&self) {
        *self.signed_in.write().unwrap_or_else(|e| e.into_inner()) = false;
        tracing::info!("Mock logout for {}", self.user_id);
    }
}

impl IdentityProvider for MockIdentity {
    fn current_user(&self) -> Option<Member> {
        if !*self.signed_in.read().unwrap_or_else(|e| e.into_inner()) {
            return None;
        }
        self.directory.get_member(&self.user_id)
    }
}
