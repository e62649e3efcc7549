use crate::core::{
    merger::ResultMerger,
    query::{SearchQuery, ValidationError},
};
use crate::models::{MatchSet, SearchState, SearchStatus};
use std::sync::Arc;
use tokio::sync::watch;

/// One search widget's state machine
///
/// `Idle -> Searching -> Presenting`, and back to `Searching` on every new
/// query. Each submission bumps a generation token; a merge that completes
/// after a newer submission is discarded, so the presented results always
/// belong to the last submitted query.
pub struct SearchSession {
    merger: ResultMerger,
    min_query_length: usize,
    state: Arc<watch::Sender<SearchState>>,
}

impl SearchSession {
    pub fn new(merger: ResultMerger, min_query_length: usize) -> Self {
        let (state, _) = watch::channel(SearchState::default());

        Self {
            merger,
            min_query_length,
            state: Arc::new(state),
        }
    }

    /// Start a search without waiting for it
    ///
    /// Returns the generation assigned to this query. A query shorter than
    /// the minimum leaves the session untouched. Must be called from within
    /// a tokio runtime.
    pub fn submit_query(&self, raw: &str) -> Result<u64, ValidationError> {
        let query = SearchQuery::parse(raw, self.min_query_length)?;

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.status = SearchStatus::Searching;
            state.query = Some(query.raw().to_string());
            state.results = MatchSet::default();
            generation = state.generation;
        });

        tracing::debug!("Search generation {} started for {:?}", generation, query.raw());

        let merger = self.merger.clone();
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let results = merger.search(&query).await;
            let count = results.len();

            // compare and publish under the channel lock
            let published = state.send_if_modified(|current| {
                if current.generation != generation {
                    return false;
                }
                current.status = SearchStatus::Presenting;
                current.results = results;
                true
            });

            if published {
                tracing::debug!("Search generation {} presenting {} results", generation, count);
            } else {
                tracing::debug!("Discarded stale results for generation {}", generation);
            }
        });

        Ok(generation)
    }

    /// Submit and wait for this query's results
    ///
    /// Returns `None` if a newer query superseded this one first.
    pub async fn search(&self, raw: &str) -> Result<Option<MatchSet>, ValidationError> {
        let mut rx = self.state.subscribe();
        let generation = self.submit_query(raw)?;

        let results = match rx
            .wait_for(|s| s.generation != generation || s.status == SearchStatus::Presenting)
            .await
        {
            Ok(state) if state.generation == generation => Some(state.results.clone()),
            _ => None,
        };

        Ok(results)
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }
}
