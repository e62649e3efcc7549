// Core search pipeline exports
pub mod matcher;
pub mod merger;
pub mod query;
pub mod session;

pub use matcher::exact_matches;
pub use merger::{merge_matches, resolve_suggestions, ResultMerger};
pub use query::{SearchQuery, ValidationError};
pub use session::SearchSession;
