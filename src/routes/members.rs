use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::core::SearchQuery;
use crate::models::{
    ConnectResponse, HealthResponse, LikeResponse, MemberStatusResponse, SearchRequest,
    SearchResponse,
};
use crate::routes::{error_response, AppState};
use crate::services::{DirectoryStore, LikeError};

/// Configure directory and social routes
///
/// Fixed paths are registered ahead of `/members/{id}` so they are not
/// captured by it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/members", web::get().to(list_members))
        .route("/members/core", web::get().to(core_members))
        .route("/members/search", web::post().to(search_members))
        .route("/members/{id}", web::get().to(get_member))
        .route("/members/{id}/projects", web::get().to(member_projects))
        .route("/members/{id}/experience", web::get().to(member_experience))
        .route("/members/{id}/status", web::get().to(member_status))
        .route("/members/{id}/like", web::post().to(like_member))
        .route("/members/{id}/connect", web::post().to(connect_member));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.directory.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn list_members(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.directory.list_members())
}

async fn core_members(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.directory.core_members())
}

async fn get_member(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.directory.get_member(&id) {
        Some(member) => HttpResponse::Ok().json(member),
        None => member_not_found(&id),
    }
}

async fn member_projects(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.directory.get_member(&id) {
        Some(member) => HttpResponse::Ok().json(state.showcase.projects_for_member(&member)),
        None => member_not_found(&id),
    }
}

async fn member_experience(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    if state.directory.get_member(&id).is_none() {
        return member_not_found(&id);
    }
    HttpResponse::Ok().json(state.showcase.experiences_for(&id))
}

/// One-shot member search
///
/// POST /api/v1/members/search
///
/// Request body:
/// ```json
/// { "query": "kani" }
/// ```
async fn search_members(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    let query = match SearchQuery::parse(&req.query, state.min_query_length) {
        Ok(query) => query,
        Err(e) => {
            tracing::info!("Rejected search query {:?}: {}", req.query, e);
            return error_response(StatusCode::BAD_REQUEST, "Validation failed", e);
        }
    };

    let results = state.merger.search(&query).await;

    tracing::info!("Search {:?} returned {} members", query.raw(), results.len());

    HttpResponse::Ok().json(SearchResponse {
        query: query.raw().to_string(),
        total: results.len(),
        results,
    })
}

/// The current user's like and connection state towards a member
///
/// GET /api/v1/members/{id}/status
async fn member_status(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user = match state.require_user() {
        Ok(user) => user,
        Err(response) => return response,
    };

    let target_id = path.into_inner();
    if state.directory.get_member(&target_id).is_none() {
        return member_not_found(&target_id);
    }

    HttpResponse::Ok().json(MemberStatusResponse {
        liked: state.activity.has_liked(&user.id, &target_id),
        connected: state.activity.is_connected(&user.id, &target_id),
        likes_received: state.activity.like_count(&target_id),
    })
}

/// Toggle the current user's like on a member
///
/// POST /api/v1/members/{id}/like
async fn like_member(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user = match state.require_user() {
        Ok(user) => user,
        Err(response) => return response,
    };

    let target_id = path.into_inner();
    if state.directory.get_member(&target_id).is_none() {
        return member_not_found(&target_id);
    }

    match state
        .activity
        .toggle_like_counted(state.directory.as_ref(), &user.id, &target_id)
    {
        Ok((liked, member)) => {
            tracing::info!("{} {} {}", user.id, if liked { "liked" } else { "unliked" }, target_id);
            HttpResponse::Ok().json(LikeResponse {
                liked,
                likes_count: member.likes_count,
            })
        }
        Err(LikeError::Activity(e)) => error_response(StatusCode::BAD_REQUEST, "Invalid action", e),
        Err(LikeError::Profile(e)) => {
            tracing::error!("Failed to update like count for {}: {}", target_id, e);
            error_response(StatusCode::NOT_FOUND, "Member not found", e)
        }
    }
}

/// Toggle the connection between the current user and a member
///
/// POST /api/v1/members/{id}/connect
async fn connect_member(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user = match state.require_user() {
        Ok(user) => user,
        Err(response) => return response,
    };

    let target_id = path.into_inner();
    if state.directory.get_member(&target_id).is_none() {
        return member_not_found(&target_id);
    }

    match state.activity.toggle_connection(&user.id, &target_id) {
        Ok(connected) => {
            tracing::info!(
                "{} {} {}",
                user.id,
                if connected { "connected with" } else { "disconnected from" },
                target_id
            );
            HttpResponse::Ok().json(ConnectResponse {
                connected,
                connections_count: state.activity.connection_count(&user.id),
            })
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, "Invalid action", e),
    }
}

fn member_not_found(id: &str) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        "Member not found",
        format!("No member with id {}", id),
    )
}
