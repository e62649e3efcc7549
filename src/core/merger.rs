use crate::core::{matcher::exact_matches, query::SearchQuery};
use crate::models::{MatchSet, Member};
use crate::services::{DirectoryStore, OracleError, SuggestionOracle};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Map free-text suggestions back to directory members
///
/// A suggestion resolves to every member whose name equals it ignoring case,
/// in directory order. Unknown names are dropped.
pub fn resolve_suggestions(suggestions: &[String], members: &[Member]) -> Vec<Member> {
    let names: Vec<String> = members.iter().map(|m| m.name.to_lowercase()).collect();

    suggestions
        .iter()
        .flat_map(|suggestion| {
            let wanted = suggestion.to_lowercase();
            names
                .iter()
                .zip(members)
                .filter(move |(name, _)| **name == wanted)
                .map(|(_, member)| member.clone())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Exact matches first, then oracle-only matches, each id kept once at its
/// first position
pub fn merge_matches(exact: Vec<Member>, suggested: Vec<Member>) -> MatchSet {
    let mut seen = HashSet::new();

    let merged = exact
        .into_iter()
        .chain(suggested)
        .filter(|member| seen.insert(member.id.clone()))
        .collect();

    MatchSet::from_deduplicated(merged)
}

/// Runs one member search end-to-end
///
/// # Pipeline Stages
/// 1. Case-insensitive substring match over the directory
/// 2. Oracle suggestions, bounded by `oracle_timeout`, resolved to members
/// 3. Concatenation and first-seen-wins deduplication by id
///
/// Oracle failure or timeout degrades stage 2 to no suggestions; a search
/// never fails.
#[derive(Clone)]
pub struct ResultMerger {
    directory: Arc<dyn DirectoryStore>,
    oracle: Arc<dyn SuggestionOracle>,
    oracle_timeout: Duration,
}

impl ResultMerger {
    pub fn new(
        directory: Arc<dyn DirectoryStore>,
        oracle: Arc<dyn SuggestionOracle>,
        oracle_timeout: Duration,
    ) -> Self {
        Self {
            directory,
            oracle,
            oracle_timeout,
        }
    }

    pub async fn search(&self, query: &SearchQuery) -> MatchSet {
        let members = self.directory.list_members();
        let exact = exact_matches(query, &members);

        let suggestions = self.suggestions(query).await;
        let suggested = resolve_suggestions(&suggestions, &members);

        tracing::debug!(
            "Query {:?}: {} exact, {} of {} suggestions resolved",
            query.raw(),
            exact.len(),
            suggested.len(),
            suggestions.len()
        );

        merge_matches(exact, suggested)
    }

    async fn suggestions(&self, query: &SearchQuery) -> Vec<String> {
        let result = match tokio::time::timeout(self.oracle_timeout, self.oracle.suggest(query.raw())).await {
            Ok(result) => result,
            Err(_) => Err(OracleError::Timeout(self.oracle_timeout)),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!("Suggestion oracle unavailable for {:?}, using exact matches only: {}", query.raw(), e);
            Vec::new()
        })
    }
}
