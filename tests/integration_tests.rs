// Integration tests for the LGC search pipeline and search sessions

use async_trait::async_trait;
use lgc_directory::core::{ResultMerger, SearchQuery, SearchSession};
use lgc_directory::models::{Member, SearchStatus};
use lgc_directory::services::{DirectoryStore, InMemoryDirectory, OracleError, SuggestionOracle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

struct StaticOracle(Vec<String>);

#[async_trait]
impl SuggestionOracle for StaticOracle {
    async fn suggest(&self, _query: &str) -> Result<Vec<String>, OracleError> {
        Ok(self.0.clone())
    }
}

struct FailingOracle;

#[async_trait]
impl SuggestionOracle for FailingOracle {
    async fn suggest(&self, _query: &str) -> Result<Vec<String>, OracleError> {
        Err(OracleError::ApiError("Failed to fetch suggestions: 503".to_string()))
    }
}

struct SlowOracle(Duration);

#[async_trait]
impl SuggestionOracle for SlowOracle {
    async fn suggest(&self, _query: &str) -> Result<Vec<String>, OracleError> {
        tokio::time::sleep(self.0).await;
        Ok(vec!["SHIVANI".to_string()])
    }
}

/// Holds "Har" until released; answers everything else immediately
struct GatedOracle {
    gate: Arc<Notify>,
    released: Arc<AtomicUsize>,
}

#[async_trait]
impl SuggestionOracle for GatedOracle {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, OracleError> {
        if query == "Har" {
            self.gate.notified().await;
            self.released.fetch_add(1, Ordering::SeqCst);
            return Ok(vec!["HARSHA SAI".to_string(), "HEMANTH VENKAT".to_string()]);
        }
        Ok(vec!["KANISHK K".to_string()])
    }
}

fn two_member_directory() -> Arc<InMemoryDirectory> {
    let member = |id: &str, name: &str| Member {
        id: id.to_string(),
        name: name.to_string(),
        designation: "Core Member".to_string(),
        photo_url: String::new(),
        projects_count: 0,
        likes_count: 0,
        is_core: true,
    };

    Arc::new(
        InMemoryDirectory::new(vec![
            member("harsha-sai", "HARSHA SAI"),
            member("kanishk-k", "KANISHK K"),
        ])
        .unwrap(),
    )
}

fn merger_with(oracle: impl SuggestionOracle + 'static, timeout: Duration) -> ResultMerger {
    ResultMerger::new(Arc::new(InMemoryDirectory::seeded()), Arc::new(oracle), timeout)
}

#[tokio::test]
async fn test_merger_appends_oracle_only_match() {
    let merger = ResultMerger::new(
        two_member_directory(),
        Arc::new(StaticOracle(vec!["Harsha Sai".to_string()])),
        Duration::from_secs(1),
    );

    let results = merger.search(&SearchQuery::new("kani").unwrap()).await;
    assert_eq!(results.ids(), vec!["kanishk-k", "harsha-sai"]);
}

#[tokio::test]
async fn test_merger_failure_degrades_to_exact_matches() {
    let query = SearchQuery::new("sh").unwrap();

    let degraded = merger_with(FailingOracle, Duration::from_secs(1)).search(&query).await;
    let exact_only = merger_with(StaticOracle(vec![]), Duration::from_secs(1)).search(&query).await;

    assert!(!exact_only.is_empty());
    assert_eq!(degraded, exact_only);
}

#[tokio::test]
async fn test_merger_timeout_degrades_to_exact_matches() {
    let merger = merger_with(SlowOracle(Duration::from_secs(5)), Duration::from_millis(50));

    let results = merger.search(&SearchQuery::new("kanishk").unwrap()).await;
    assert_eq!(results.ids(), vec!["kanishk-k"]);
}

#[tokio::test]
async fn test_merger_reflects_directory_updates() {
    use lgc_directory::models::CountDelta;
    use lgc_directory::services::ProfileStore;

    let directory = Arc::new(InMemoryDirectory::seeded());
    let merger = ResultMerger::new(directory.clone(), Arc::new(StaticOracle(vec![])), Duration::from_secs(1));

    directory.mutate_counts("shalini", CountDelta::likes(1)).unwrap();

    let results = merger.search(&SearchQuery::new("shal").unwrap()).await;
    let shalini = results.iter().next().unwrap();
    assert_eq!(shalini.likes_count, directory.get_member("shalini").unwrap().likes_count);
}

#[tokio::test]
async fn test_session_last_submitted_query_wins() {
    let gate = Arc::new(Notify::new());
    let released = Arc::new(AtomicUsize::new(0));
    let merger = merger_with(
        GatedOracle {
            gate: gate.clone(),
            released: released.clone(),
        },
        Duration::from_secs(5),
    );
    let session = SearchSession::new(merger, 2);
    let mut rx = session.subscribe();

    let first = session.submit_query("Har").unwrap();
    let second = session.submit_query("Kan").unwrap();
    assert_eq!((first, second), (1, 2));

    let presented = rx
        .wait_for(|s| s.status == SearchStatus::Presenting)
        .await
        .unwrap()
        .clone();
    assert_eq!(presented.generation, 2);
    assert_eq!(presented.results.ids(), vec!["kanishk-k"]);

    // let the stale "Har" search finish
    gate.notify_one();
    while released.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }
    tokio::time::sleep(Duration::from_millis(20)).await;

    let state = session.state();
    assert_eq!(state.status, SearchStatus::Presenting);
    assert_eq!(state.query.as_deref(), Some("Kan"));
    assert_eq!(state.generation, 2);
    assert_eq!(state.results.ids(), vec!["kanishk-k"]);
}

#[tokio::test]
async fn test_superseded_search_returns_none() {
    let gate = Arc::new(Notify::new());
    let merger = merger_with(
        GatedOracle {
            gate: gate.clone(),
            released: Arc::new(AtomicUsize::new(0)),
        },
        Duration::from_secs(5),
    );
    let session = SearchSession::new(merger, 2);

    let (stale, _) = tokio::join!(session.search("Har"), async {
        tokio::task::yield_now().await;
        session.submit_query("Kan").unwrap();
        gate.notify_one();
    });

    assert_eq!(stale, Ok(None));
}

#[tokio::test]
async fn test_session_moves_searching_then_presenting() {
    let merger = merger_with(SlowOracle(Duration::from_millis(50)), Duration::from_secs(1));
    let session = SearchSession::new(merger, 2);

    session.submit_query("hemanth").unwrap();
    let state = session.state();
    assert_eq!(state.status, SearchStatus::Searching);
    assert!(state.results.is_empty());

    let mut rx = session.subscribe();
    let presented = rx
        .wait_for(|s| s.status == SearchStatus::Presenting)
        .await
        .unwrap()
        .clone();

    // exact match first, then the oracle's suggestion
    assert_eq!(presented.results.ids(), vec!["hemanth-venkat", "shivani"]);
}

#[tokio::test]
async fn test_session_new_search_after_presenting() {
    let merger = merger_with(StaticOracle(vec![]), Duration::from_secs(1));
    let session = SearchSession::new(merger, 2);

    let first = session.search("rahul").await.unwrap().unwrap();
    let second = session.search("priya").await.unwrap().unwrap();

    assert_eq!(first.ids(), vec!["rahul-verma"]);
    assert_eq!(second.ids(), vec!["priya-sharma"]);
    assert_eq!(session.state().generation, 2);
}
