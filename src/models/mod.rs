// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Connection, ConnectionStatus, CountDelta, Experience, ExperienceType, Like, MatchSet, Member,
    Project, SearchState, SearchStatus,
};
pub use requests::{CreateExperienceRequest, CreateProjectRequest, SearchRequest};
pub use responses::{
    ConnectResponse, ConnectionsResponse, ErrorResponse, HealthResponse, LikeResponse,
    MemberStatusResponse, SearchResponse, SessionStateResponse, SubmitQueryResponse,
};
