use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{CountDelta, CreateExperienceRequest, CreateProjectRequest};
use crate::routes::{error_response, AppState};
use crate::services::{ProfileStore, ShowcaseError};

/// Configure project and experience routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/projects")
                .route(web::get().to(list_projects))
                .route(web::post().to(create_project)),
        )
        .route("/projects/{id}", web::get().to(get_project))
        .route("/experience", web::post().to(create_experience));
}

async fn list_projects(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.showcase.list_projects())
}

async fn get_project(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.showcase.get_project(&path) {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(e) => error_response(StatusCode::NOT_FOUND, "Project not found", e),
    }
}

/// Create a project credited to the current user
///
/// POST /api/v1/projects
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "description": "string",
///   "sourceCode": "string",
///   "components": "ESP32, Relay Module",
///   "doneBy": ["KANISHK K"]
/// }
/// ```
async fn create_project(
    state: web::Data<AppState>,
    req: web::Json<CreateProjectRequest>,
) -> impl Responder {
    let user = match state.require_user() {
        Ok(user) => user,
        Err(response) => return response,
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_project request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let project = match state.showcase.create_project(&req, &user.id) {
        Ok(project) => project,
        Err(e @ ShowcaseError::EmptySlug(_)) => {
            return error_response(StatusCode::BAD_REQUEST, "Validation failed", e)
        }
        Err(e) => {
            tracing::error!("Failed to create project for {}: {}", user.id, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create project", e);
        }
    };

    // project is already stored; a failed count update is only logged
    if let Err(e) = state.directory.mutate_counts(&user.id, CountDelta::projects(1)) {
        tracing::warn!("Project {} created but count update failed: {}", project.id, e);
    }

    HttpResponse::Created().json(project)
}

/// Add an experience entry for the current user
///
/// POST /api/v1/experience
async fn create_experience(
    state: web::Data<AppState>,
    req: web::Json<CreateExperienceRequest>,
) -> impl Responder {
    let user = match state.require_user() {
        Ok(user) => user,
        Err(response) => return response,
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_experience request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    HttpResponse::Created().json(state.showcase.add_experience(&req, &user.id))
}
