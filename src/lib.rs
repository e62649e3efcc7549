//! LGC Directory - member directory, project showcase and member search
//!
//! The core of this crate is the member search pipeline: a case-insensitive
//! substring match over the directory, merged with name suggestions from an
//! external language model into one deduplicated, ordered result set.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{exact_matches, merge_matches, resolve_suggestions, ResultMerger, SearchQuery, SearchSession, ValidationError};
pub use models::{MatchSet, Member, SearchState, SearchStatus};
pub use services::{DirectoryStore, InMemoryDirectory, SuggestionOracle};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let directory = InMemoryDirectory::seeded();
        let query = SearchQuery::new("priya").unwrap();
        assert_eq!(exact_matches(&query, &directory.list_members()).len(), 1);
    }
}
