// Service exports
pub mod activity;
pub mod directory;
pub mod identity;
pub mod oracle;
pub mod sessions;
pub mod showcase;

pub use activity::{ActivityError, ActivityStore, LikeError};
pub use directory::{DirectoryError, DirectoryStore, InMemoryDirectory, ProfileStore};
pub use identity::{IdentityProvider, MockIdentity};
pub use oracle::{DisabledOracle, HttpSuggestionOracle, OracleError, SuggestionOracle};
pub use sessions::SessionRegistry;
pub use showcase::{ShowcaseError, ShowcaseStore};
