// Route exports
pub mod account;
pub mod members;
pub mod search;
pub mod showcase;

use crate::config::SearchSettings;
use crate::core::ResultMerger;
use crate::models::{ErrorResponse, Member};
use crate::services::{
    ActivityStore, DirectoryStore, IdentityProvider, InMemoryDirectory, MockIdentity,
    SessionRegistry, ShowcaseStore, SuggestionOracle,
};
use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<InMemoryDirectory>,
    pub identity: Arc<MockIdentity>,
    pub activity: Arc<ActivityStore>,
    pub showcase: Arc<ShowcaseStore>,
    pub merger: ResultMerger,
    pub sessions: SessionRegistry,
    pub min_query_length: usize,
}

impl AppState {
    pub fn new(
        directory: Arc<InMemoryDirectory>,
        showcase: Arc<ShowcaseStore>,
        oracle: Arc<dyn SuggestionOracle>,
        oracle_timeout: Duration,
        search: &SearchSettings,
        mock_user_id: &str,
    ) -> Self {
        let store: Arc<dyn DirectoryStore> = directory.clone();
        let merger = ResultMerger::new(Arc::clone(&store), oracle, oracle_timeout);
        let sessions = SessionRegistry::new(
            merger.clone(),
            search.min_query_length,
            search.max_sessions,
            Duration::from_secs(search.session_ttl_secs),
        );

        Self {
            identity: Arc::new(MockIdentity::new(store, mock_user_id)),
            directory,
            activity: Arc::new(ActivityStore::new()),
            showcase,
            merger,
            sessions,
            min_query_length: search.min_query_length,
        }
    }

    /// The signed-in member, or a 401 response
    pub(crate) fn require_user(&self) -> Result<Member, HttpResponse> {
        self.identity.current_user().ok_or_else(|| {
            error_response(
                StatusCode::UNAUTHORIZED,
                "Login required",
                "You must be logged in to perform this action",
            )
        })
    }
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(members::configure)
            .configure(search::configure)
            .configure(showcase::configure)
            .configure(account::configure),
    );
}
