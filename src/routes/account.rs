use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::models::ConnectionsResponse;
use crate::routes::{error_response, AppState};
use crate::services::DirectoryStore;

/// Configure mock authentication and current-user routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/login", web::post().to(login))
        .route("/auth/logout", web::post().to(logout))
        .route("/me", web::get().to(me))
        .route("/me/connections", web::get().to(my_connections))
        .route("/me/projects", web::get().to(my_projects))
        .route("/me/experience", web::get().to(my_experience));
}

async fn login(state: web::Data<AppState>) -> impl Responder {
    match state.identity.login() {
        Some(user) => HttpResponse::Ok().json(user),
        None => {
            tracing::error!("Configured mock user is not in the directory");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Login failed",
                "The configured mock user does not exist",
            )
        }
    }
}

async fn logout(state: web::Data<AppState>) -> impl Responder {
    state.identity.logout();
    HttpResponse::NoContent().finish()
}

async fn me(state: web::Data<AppState>) -> impl Responder {
    match state.require_user() {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(response) => response,
    }
}

async fn my_connections(state: web::Data<AppState>) -> impl Responder {
    let user = match state.require_user() {
        Ok(user) => user,
        Err(response) => return response,
    };

    let connections: Vec<_> = state
        .activity
        .connections_for(&user.id)
        .iter()
        .filter_map(|c| state.directory.get_member(c.counterpart(&user.id)))
        .collect();

    HttpResponse::Ok().json(ConnectionsResponse {
        count: connections.len(),
        connections,
    })
}

async fn my_projects(state: web::Data<AppState>) -> impl Responder {
    match state.require_user() {
        Ok(user) => HttpResponse::Ok().json(state.showcase.projects_created_by(&user.id)),
        Err(response) => response,
    }
}

async fn my_experience(state: web::Data<AppState>) -> impl Responder {
    match state.require_user() {
        Ok(user) => HttpResponse::Ok().json(state.showcase.experiences_for(&user.id)),
        Err(response) => response,
    }
}
