use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::{assessment_router, SurgicalAssessmentService};

fn json_request(uri: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn scores_route_returns_neutral_scores_for_empty_record() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "/api/v1/surgical/scores",
            &json!({ "user_id": "patient-r1", "assessment_date": "2024-09-01" }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["cardiac_score"], json!(0.5));
    assert_eq!(body["metabolic_score"], json!(0.5));
    assert_eq!(body["overall_band"], json!("critical"));
    assert_eq!(body["domain_bands"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn risk_route_scores_unscored_records() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "/api/v1/surgical/risk",
            &json!({
                "user_id": "patient-r2",
                "assessment_date": "2024-09-02",
                "asa_score": 1,
                "rcri_score": 1,
                "hemoglobin": 8.0
            }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["asa_description"], json!("Healthy person"));
    assert_eq!(
        body["rcri_risk"],
        json!("Low Risk (0.9% risk of cardiac complications)")
    );
    let recommendations = body["recommendations"]
        .as_array()
        .expect("recommendations array");
    assert!(recommendations
        .iter()
        .any(|rec| rec == "Anemia workup and possible treatment recommended"));
}

#[tokio::test]
async fn record_then_fetch_latest_report() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let payload = serde_json::to_value(frail_markers("patient-r3", 8)).expect("serializes");
    let response = router
        .clone()
        .oneshot(json_request("/api/v1/surgical/assessments", &payload))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::CREATED);
    let stored = read_json_body(response).await;
    assert!(stored["overall_surgical_score"].is_number());

    let response = router
        .oneshot(
            Request::get("/api/v1/surgical/assessments/patient-r3/latest")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    let report = read_json_body(response).await;
    assert_eq!(report["assessment"]["user_id"], json!("patient-r3"));
    assert_eq!(
        report["risk"]["surgical_risk"],
        json!("High Risk - Requires medical optimization before surgery")
    );
}

#[tokio::test]
async fn latest_route_returns_not_found_without_history() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/surgical/assessments/patient-none/latest")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["user_id"], json!("patient-none"));
}

#[tokio::test]
async fn history_route_lists_assessments() {
    let (service, _) = build_service();
    service
        .record(optimal_markers("patient-r4", 2))
        .expect("stored");
    service
        .record(frail_markers("patient-r4", 6))
        .expect("stored");
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/surgical/assessments/patient-r4")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let records = body.as_array().expect("array body");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["assessment_date"], json!("2024-09-06"));
}

#[tokio::test]
async fn record_route_maps_outage_to_service_unavailable() {
    let service = SurgicalAssessmentService::new(Arc::new(UnavailableRepository));
    let router = assessment_router(Arc::new(service));

    let payload = serde_json::to_value(optimal_markers("patient-r5", 1)).expect("serializes");
    let response = router
        .oneshot(json_request("/api/v1/surgical/assessments", &payload))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn health_score_route_blends_risk_and_cbc() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "/api/v1/profile/health-score",
            &json!({
                "smoking": { "is_smoker": true, "cigarettes_per_day": 20 },
                "cbc_values": { "haemoglobin": 15.0 }
            }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let overall = body["overall_health_score"].as_f64().expect("numeric score");
    assert!((overall - (0.85 * 0.9 * 0.6 + 0.4)).abs() < 1e-9);
    assert_eq!(body["conditions"], json!(["smoker", "heavy_smoker"]));
}
