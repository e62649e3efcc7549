use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchSet, Member, SearchState, SearchStatus};

/// Response for the one-shot member search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: MatchSet,
    pub total: usize,
}

/// Snapshot of a search session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStateResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub status: SearchStatus,
    pub query: Option<String>,
    pub results: MatchSet,
    pub generation: u64,
}

impl SessionStateResponse {
    pub fn new(session_id: impl Into<String>, state: SearchState) -> Self {
        Self {
            session_id: session_id.into(),
            status: state.status,
            query: state.query,
            results: state.results,
            generation: state.generation,
        }
    }
}

/// Acknowledgement of a fire-and-forget query submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQueryResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub generation: u64,
}

/// Result of a like toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    #[serde(rename = "likesCount")]
    pub likes_count: u32,
}

/// Result of a connection toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectResponse {
    pub connected: bool,
    #[serde(rename = "connectionsCount")]
    pub connections_count: usize,
}

/// Whether the current user has liked or connected with a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStatusResponse {
    pub liked: bool,
    pub connected: bool,
    #[serde(rename = "likesReceived")]
    pub likes_received: usize,
}

/// Current user's connections, resolved to members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionsResponse {
    pub connections: Vec<Member>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
