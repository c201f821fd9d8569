//! HTTP behavior of the shared envelopes: status codes and wire bodies.

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use pronas_models::api::{ApiResponse, Created, NoContent, Paginated, PaginationParams};
use pronas_models::ApiError;

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_not_found_maps_to_404_with_error_envelope() {
    let resp = ApiError::NotFound("project 17 not found".into()).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json = body_json(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "project 17 not found");
    assert_eq!(json["error_code"], "NOT_FOUND");
    assert_eq!(json["error_type"], "client_error");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_validation_error_carries_details() {
    let resp = ApiError::Validation(vec![
        "justification must have at least 500 characters".into(),
        "at least 3 specific objectives are required".into(),
    ])
    .into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(resp).await;
    assert_eq!(json["error_code"], "VALIDATION_ERROR");
    assert_eq!(json["details"]["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_internal_error_does_not_leak_cause() {
    let resp = ApiError::Internal(anyhow::anyhow!("pool timeout on pg-primary")).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(resp).await;
    assert_eq!(json["message"], "An internal error occurred");
    assert!(!json["message"].as_str().unwrap().contains("pg-primary"));
}

#[tokio::test]
async fn test_created_wraps_payload_in_success_envelope() {
    let resp = Created(serde_json::json!({ "id": 9 })).into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], 9);
}

#[tokio::test]
async fn test_no_content_has_empty_body() {
    let resp = NoContent.into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_paginated_response_shape() {
    let params = PaginationParams {
        page: Some(1),
        per_page: Some(2),
    };
    let resp = Paginated::new(vec!["a", "b"], &params, 5).into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["total"], 5);
    assert_eq!(json["pages"], 3);
    assert_eq!(json["has_next"], true);
    assert_eq!(json["has_prev"], false);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_message_envelope() {
    let resp = ApiResponse::message("Project submitted for review").into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Project submitted for review");
    assert!(json.get("data").is_none());
}
