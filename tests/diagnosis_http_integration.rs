//! Integration tests for the diagnosis HTTP API.
//!
//! Drives the full router over embedded content and in-memory storage.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use leadership_diagnosis::adapters::http::{diagnosis_router, DiagnosisAppState};
use leadership_diagnosis::adapters::{InMemoryDiagnosisRepository, StaticContentReader};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    diagnosis_router(DiagnosisAppState {
        content: Arc::new(StaticContentReader::embedded()),
        repository: Arc::new(InMemoryDiagnosisRepository::new()),
        max_selected_concerns: 3,
        verbose_errors: false,
    })
}

/// Answers for the 23 questions: growth 1-8, sharing 9-16, interaction 17-23.
fn answers(growth: u8, sharing: u8, interaction: u8) -> Value {
    let mut map = serde_json::Map::new();
    for id in 1..=23u32 {
        let score = match id {
            1..=8 => growth,
            9..=16 => sharing,
            _ => interaction,
        };
        map.insert(id.to_string(), json!(score));
    }
    Value::Object(map)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

// =============================================================================
// Catalogs
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(&app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn questions_are_listed_in_order() {
    let (status, body) = get(&app(), "/api/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 23);
    assert_eq!(body["questions"][0]["id"], 1);
    assert_eq!(body["questions"][0]["dimension"], "growth");
    assert_eq!(body["questions"][0]["dimension_label"], "Growth");
    assert_eq!(body["questions"][22]["dimension"], "interaction");
}

#[tokio::test]
async fn concerns_are_listed_with_selection_limit() {
    let (status, body) = get(&app(), "/api/concerns").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_selected"], 3);
    let concerns = body["concerns"].as_array().unwrap();
    assert_eq!(concerns.len(), 15);
    assert_eq!(concerns[14]["id"], "k15");
    assert_eq!(concerns[14]["categories"], json!(["C", "L"]));
    assert_eq!(
        concerns[14]["category_labels"],
        json!(["Collaboration & Culture", "Leadership Direction"])
    );
}

// =============================================================================
// Scoring
// =============================================================================

#[tokio::test]
async fn high_growth_and_sharing_classify_as_first_type() {
    let (status, body) = post(
        &app(),
        "/api/diagnosis/leadership",
        json!({ "answers": answers(5, 5, 3) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leadership_type"], "L01");
    assert_eq!(body["scores"]["growth"], 5.0);
    assert_eq!(body["scores"]["interaction"], 3.0);
    assert_eq!(body["profile"]["code"], "L01");
}

#[tokio::test]
async fn all_low_answers_classify_as_last_type() {
    let (status, body) = post(
        &app(),
        "/api/diagnosis/leadership",
        json!({ "answers": answers(2, 2, 2) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leadership_type"], "L08");
}

#[tokio::test]
async fn out_of_range_score_is_rejected() {
    let (status, body) = post(
        &app(),
        "/api/diagnosis/leadership",
        json!({ "answers": { "1": 7 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn float_scores_are_validated_not_rejected_by_decoder() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/diagnosis/leadership",
        json!({ "answers": { "1": 5.0 } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scores"]["growth"], 5.0);

    let (status, body) = post(
        &app,
        "/api/diagnosis/leadership",
        json!({ "answers": { "1": 4.5 } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
    assert_eq!(body["details"]["field"], "answers[1]");
}

#[tokio::test]
async fn direction_and_growth_concerns_match_combination() {
    let (status, body) = post(
        &app(),
        "/api/diagnosis/concerns",
        json!({ "concern_ids": ["k13", "k05"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tally"], json!({"E": 0, "G": 1, "C": 0, "L": 1}));
    assert_eq!(body["z_scores"]["L"], 0.5);
    assert_eq!(body["primary_a"], "L");
    assert_eq!(body["primary_b"], "G");
    assert_eq!(body["combination_id"], "P02");
    assert_eq!(body["solution"]["id"], "P02");
}

#[tokio::test]
async fn empty_concern_selection_falls_back() {
    let (status, body) = post(&app(), "/api/diagnosis/concerns", json!({ "concern_ids": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primary_a"], Value::Null);
    assert_eq!(body["combination_id"], "P08");
}

// =============================================================================
// Recorded diagnoses
// =============================================================================

#[tokio::test]
async fn submitted_diagnosis_can_be_fetched() {
    let app = app();
    let (status, created) = post(
        &app,
        "/api/diagnoses",
        json!({
            "respondent_name": "  Alex ",
            "answers": answers(5, 5, 3),
            "concern_ids": ["k13", "k05"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["respondent_name"], "Alex");
    assert_eq!(created["leadership"]["leadership_type"], "L01");
    assert_eq!(created["concerns"]["combination_id"], "P02");

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/diagnoses/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["concerns"]["selected"], json!(["k13", "k05"]));

    let (_, stats) = get(&app, "/api/stats").await;
    assert_eq!(stats["total_recorded"], 1);
}

#[tokio::test]
async fn submission_over_selection_limit_is_rejected() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/diagnoses",
        json!({
            "answers": answers(4, 4, 4),
            "concern_ids": ["k01", "k05", "k10", "k13"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "SELECTION_LIMIT_REACHED");

    let (_, stats) = get(&app, "/api/stats").await;
    assert_eq!(stats["total_recorded"], 0);
}

#[tokio::test]
async fn submission_ignores_concerns_missing_from_catalog() {
    let (status, body) = post(
        &app(),
        "/api/diagnoses",
        json!({
            "answers": answers(5, 5, 3),
            "concern_ids": ["retired-concern", "k13", "k05", "k10"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["concerns"]["selected"], json!(["k13", "k05", "k10"]));
    assert_eq!(body["concerns"]["primary_a"], "L");
    assert_eq!(body["concerns"]["primary_b"], "C");
    assert_eq!(body["concerns"]["combination_id"], "P03");
}

#[tokio::test]
async fn unknown_diagnosis_is_not_found() {
    let (status, body) = get(
        &app(),
        "/api/diagnoses/00000000-0000-4000-8000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "DIAGNOSIS_NOT_FOUND");
}

#[tokio::test]
async fn malformed_diagnosis_id_is_bad_request() {
    let (status, body) = get(&app(), "/api/diagnoses/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Content
// =============================================================================

#[tokio::test]
async fn leadership_type_content_is_served() {
    let (status, body) = get(&app(), "/api/leadership-types/L07").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "L07");
    assert_eq!(body["name"], "Growth Coach");
}

#[tokio::test]
async fn unknown_content_codes_are_not_found() {
    let app = app();

    let (status, body) = get(&app, "/api/leadership-types/L09").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "LEADERSHIP_TYPE_NOT_FOUND");

    let (status, body) = get(&app, "/api/solutions/P12").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SOLUTION_NOT_FOUND");
}

#[tokio::test]
async fn every_solution_is_served() {
    let app = app();
    for n in 1..=11 {
        let code = format!("P{:02}", n);
        let (status, body) = get(&app, &format!("/api/solutions/{}", code)).await;
        assert_eq!(status, StatusCode::OK, "{}", code);
        assert_eq!(body["id"], code);
    }
}
