use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::models::{SearchRequest, SessionStateResponse, SubmitQueryResponse};
use crate::routes::{error_response, AppState};

/// Configure search session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/search/sessions", web::post().to(create_session))
        .service(
            web::resource("/search/sessions/{id}")
                .route(web::get().to(get_session))
                .route(web::delete().to(close_session)),
        )
        .route("/search/sessions/{id}/query", web::post().to(submit_query));
}

/// Open a search session
///
/// POST /api/v1/search/sessions
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let (id, session) = state.sessions.create().await;
    HttpResponse::Created().json(SessionStateResponse::new(id, session.state()))
}

/// Submit a query to a session without waiting for results
///
/// POST /api/v1/search/sessions/{id}/query
///
/// Request body:
/// ```json
/// { "query": "Har" }
/// ```
///
/// Poll `GET /api/v1/search/sessions/{id}` for the outcome. Results of an
/// earlier query that finishes late are never presented.
async fn submit_query(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    let session_id = path.into_inner();
    let session = match state.sessions.get(&session_id).await {
        Some(session) => session,
        None => return session_not_found(&session_id),
    };

    match session.submit_query(&req.query) {
        Ok(generation) => {
            tracing::info!("Session {} query {:?} (generation {})", session_id, req.query, generation);
            HttpResponse::Accepted().json(SubmitQueryResponse {
                session_id,
                generation,
            })
        }
        Err(e) => {
            tracing::info!("Session {} rejected query {:?}: {}", session_id, req.query, e);
            error_response(StatusCode::BAD_REQUEST, "Validation failed", e)
        }
    }
}

async fn get_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let session_id = path.into_inner();
    match state.sessions.get(&session_id).await {
        Some(session) => {
            let snapshot = session.state();
            HttpResponse::Ok().json(SessionStateResponse::new(session_id, snapshot))
        }
        None => session_not_found(&session_id),
    }
}

async fn close_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let session_id = path.into_inner();
    if state.sessions.get(&session_id).await.is_none() {
        return session_not_found(&session_id);
    }
    state.sessions.close(&session_id).await;
    HttpResponse::NoContent().finish()
}

fn session_not_found(id: &str) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        "Session not found",
        format!("No search session with id {}", id),
    )
}
