use crate::core::{ResultMerger, SearchSession};
use std::sync::Arc;
use std::time::Duration;

/// Live search sessions keyed by session id
///
/// Sessions expire after `idle_ttl` without access and the registry holds at
/// most `max_sessions`; an evicted session's in-flight search simply finishes
/// unobserved.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: moka::future::Cache<String, Arc<SearchSession>>,
    merger: ResultMerger,
    min_query_length: usize,
}

impl SessionRegistry {
    pub fn new(
        merger: ResultMerger,
        min_query_length: usize,
        max_sessions: u64,
        idle_ttl: Duration,
    ) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(idle_ttl)
            .build();

        Self {
            sessions,
            merger,
            min_query_length,
        }
    }

    /// Open a new idle session
    pub async fn create(&self) -> (String, Arc<SearchSession>) {
        let id = uuid::Uuid::new_v4().to_string();
        let session = Arc::new(SearchSession::new(self.merger.clone(), self.min_query_length));

        self.sessions.insert(id.clone(), Arc::clone(&session)).await;
        tracing::debug!("Search session opened: {}", id);

        (id, session)
    }

    pub async fn get(&self, id: &str) -> Option<Arc<SearchSession>> {
        self.sessions.get(id).await
    }

    pub async fn close(&self, id: &str) {
        self.sessions.invalidate(id).await;
    }

    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchStatus;
    use crate::services::{DisabledOracle, InMemoryDirectory};

    fn registry() -> SessionRegistry {
        let merger = ResultMerger::new(
            Arc::new(InMemoryDirectory::seeded()),
            Arc::new(DisabledOracle),
            Duration::from_secs(1),
        );
        SessionRegistry::new(merger, 2, 100, Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let registry = registry();
        let (id, _) = registry.create().await;

        let session = registry.get(&id).await.expect("session should exist");
        assert_eq!(session.state().status, SearchStatus::Idle);
        assert!(registry.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let registry = registry();
        let (_, first) = registry.create().await;
        let (_, second) = registry.create().await;

        first.search("harsha").await.unwrap();

        assert_eq!(first.state().status, SearchStatus::Presenting);
        assert_eq!(second.state().status, SearchStatus::Idle);
    }

    #[tokio::test]
    async fn test_close() {
        let registry = registry();
        let (id, _) = registry.create().await;

        registry.close(&id).await;
        assert!(registry.get(&id).await.is_none());
    }
}
