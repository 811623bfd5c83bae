// HTTP API tests for Transfer Match

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use transfer_match::models::{ErrorResponse, HealthResponse, MatchesResponse, Profile};
use transfer_match::routes::{configure_routes, AppState};
use transfer_match::{InMemoryStore, Matcher};

fn app_state() -> AppState {
    AppState {
        store: Arc::new(InMemoryStore::new()),
        matcher: Matcher::new(),
        default_max_distance_km: 100.0,
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

fn teacher(name: &str, current: &str, home: &str, preferred: &[&str]) -> Value {
    json!({
        "name": name,
        "subject": "Mathematics",
        "gradeLevel": "primary",
        "currentDistrict": current,
        "homeDistrict": home,
        "preferredDistricts": preferred,
    })
}

#[actix_web::test]
async fn test_health() {
    let state = app_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, "healthy");
    assert_eq!(body.profiles, 0);
}

#[actix_web::test]
async fn test_districts() {
    let state = app_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/v1/districts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let districts = body["districts"].as_array().unwrap();
    assert_eq!(districts.len(), 38);
    assert!(districts.contains(&json!("patna")));
}

#[actix_web::test]
async fn test_create_and_get_profile() {
    let state = app_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(teacher("Asha", "patna", "gaya", &["gaya"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Profile = test::read_body_json(resp).await;
    assert_eq!(created.id, 1);
    assert!(created.is_active);
    assert_eq!(created.max_distance, 100.0);

    let req = test::TestRequest::get().uri("/api/v1/profiles/1").to_request();
    let fetched: Profile = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.name, "Asha");
    assert_eq!(fetched.preferred_districts, vec!["gaya"]);
}

#[actix_web::test]
async fn test_create_rejects_invalid_profile() {
    let state = app_state();
    let app = init_app!(state);

    let mut body = teacher("Asha", "patna", "gaya", &["gaya"]);
    body["currentLatitude"] = json!(25.6);

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.error, "validation_failed");
    assert_eq!(state.store.len().unwrap(), 0);
}

#[actix_web::test]
async fn test_create_rejects_malformed_json() {
    let state = app_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.error, "invalid_json");
}

#[actix_web::test]
async fn test_unknown_profile_is_404() {
    let state = app_state();
    let app = init_app!(state);

    for uri in ["/api/v1/profiles/42", "/api/v1/profiles/42/matches"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    let req = test::TestRequest::delete().uri("/api/v1/profiles/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_and_delete_profile() {
    let state = app_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(teacher("Asha", "patna", "gaya", &["gaya"]))
        .to_request();
    let created: Profile = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .set_json(json!({ "maxDistance": 40.0, "isActive": false }))
        .to_request();
    let updated: Profile = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.max_distance, 40.0);
    assert!(!updated.is_active);
    assert_eq!(updated.name, "Asha");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(state.store.len().unwrap(), 0);
}

#[actix_web::test]
async fn test_update_rejects_invalid_profile() {
    let state = app_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(teacher("Asha", "patna", "gaya", &["gaya"]))
        .to_request();
    let created: Profile = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .set_json(json!({ "homeLatitude": 24.8, "maxDistance": -5.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.error, "validation_failed");
    assert_eq!(error.status_code, 400);

    // Nothing was written
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .to_request();
    let fetched: Profile = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.max_distance, 100.0);
    assert!(fetched.home_latitude.is_none());
}

#[actix_web::test]
async fn test_find_matches_with_filters() {
    let state = app_state();
    let app = init_app!(state);

    for body in [
        teacher("Subject", "patna", "gaya", &["gaya"]),
        teacher("Mutual", "gaya", "patna", &["patna"]),
        teacher("Near Home", "jehanabad", "patna", &[]),
        teacher("Unrelated", "kishanganj", "patna", &[]),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/profiles")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/v1/profiles/1/matches").to_request();
    let body: MatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 2);
    assert_eq!(body.matches[0].profile.name, "Mutual");
    assert_eq!(body.matches[0].score, 100);
    assert_eq!(body.matches[1].profile.name, "Near Home");

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/1/matches?type=nearby")
        .to_request();
    let body: MatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 1);
    assert_eq!(body.matches[0].profile.name, "Near Home");

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/1/matches?maxDistance=10")
        .to_request();
    let body: MatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 0);

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/1/matches?subject=physics")
        .to_request();
    let body: MatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert!(body.matches.is_empty());
}

#[actix_web::test]
async fn test_find_matches_rejects_bad_query() {
    let state = app_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(teacher("Subject", "patna", "gaya", &["gaya"]))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/1/matches?type=excellent")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.error, "invalid_query");
}
