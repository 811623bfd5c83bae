use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{CreateProfileRequest, UpdateProfileRequest};
use crate::routes::{ApiError, AppState};

/// Configure profile CRUD routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::post().to(create_profile))
        .route("/profiles", web::get().to(list_profiles))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::patch().to(update_profile))
        .route("/profiles/{id}", web::delete().to(delete_profile));
}

/// POST /api/v1/profiles
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_profile request: {:?}", errors);
        return Err(errors.into());
    }

    let new_profile = req.into_inner().into_new_profile(state.default_max_distance_km);
    let profile = state.store.create(new_profile)?;

    tracing::info!("Created profile {} in {}", profile.id, profile.current_district);
    Ok(HttpResponse::Created().json(profile))
}

/// GET /api/v1/profiles
async fn list_profiles(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.store.list()?))
}

/// GET /api/v1/profiles/{id}
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.store.get(path.into_inner())?))
}

/// PATCH /api/v1/profiles/{id}
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for update_profile request on {}: {:?}", id, errors);
        return Err(errors.into());
    }

    let profile = state.store.update(id, req.into_inner().into())?;

    tracing::info!("Updated profile {}", id);
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/v1/profiles/{id}
async fn delete_profile(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    state.store.delete(id)?;

    tracing::info!("Deleted profile {}", id);
    Ok(HttpResponse::NoContent().finish())
}
