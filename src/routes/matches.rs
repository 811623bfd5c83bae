use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::{known_districts, MatchFilters, Matcher};
use crate::models::{DistrictsResponse, HealthResponse, MatchEntry, MatchQuery, MatchesResponse};
use crate::routes::ApiError;
use crate::services::ProfileRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileRepository>,
    pub matcher: Matcher,
    /// Filled in for profiles created without a maximum transfer distance
    pub default_max_distance_km: f64,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/districts", web::get().to(list_districts))
        .route("/profiles/{id}/matches", web::get().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, profiles) = match state.store.len() {
        Ok(count) => ("healthy", count),
        Err(e) => {
            tracing::warn!("Store unavailable during health check: {}", e);
            ("degraded", 0)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        profiles,
    })
}

/// Known district keys usable for location fallback
async fn list_districts() -> HttpResponse {
    HttpResponse::Ok().json(DistrictsResponse {
        districts: known_districts().map(str::to_string).collect(),
    })
}

/// Find matches endpoint
///
/// GET /api/v1/profiles/{id}/matches?type=perfect|nearby&maxDistance=50&subject=math
///
/// Runs the matcher over the whole roster, then applies the optional
/// query filters to the ranked list.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    query: web::Query<MatchQuery>,
) -> Result<HttpResponse, ApiError> {
    let profile_id = path.into_inner();
    let subject = state.store.get(profile_id)?;
    let roster = state.store.list()?;

    tracing::info!("Finding matches for profile {} among {} profiles", profile_id, roster.len());

    let ranked = state.matcher.find_matches(&subject, &roster);
    let filters = MatchFilters::from(query.into_inner());
    let matches: Vec<MatchEntry> = filters
        .apply(ranked)
        .into_iter()
        .map(MatchEntry::from)
        .collect();

    tracing::info!("Returning {} matches for profile {}", matches.len(), profile_id);

    Ok(HttpResponse::Ok().json(MatchesResponse {
        total: matches.len(),
        matches,
    }))
}
