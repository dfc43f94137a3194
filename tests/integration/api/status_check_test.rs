// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, spawn_target_site, unused_local_addr};
use axum::http::StatusCode;
use radarweb::domain::repositories::website_repository::WebsiteRepository;
use serde_json::{json, Value};

fn assert_two_decimals(value: &Value) {
    let seconds = value.as_f64().unwrap();
    assert!(seconds >= 0.0);
    assert!(((seconds * 100.0).round() - seconds * 100.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_check_status_by_url_online() {
    let app = create_test_app().await;
    let addr = spawn_target_site().await;
    let url = format!("http://{}/", addr);

    let response = app
        .server
        .get("/websites/check-status")
        .add_query_param("url", &url)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "online");
    assert_eq!(body["http_status"], 200);
    assert_eq!(body["page_title"], "Target Site");
    assert_eq!(
        body["favicon"],
        json!(format!("http://{}/static/favicon.ico", addr))
    );
    assert_eq!(body["url"], json!(url));
    assert_two_decimals(&body["response_time_seconds"]);
    assert!(body.get("error").is_none());
    assert!(body.get("website_name").is_none());
}

#[tokio::test]
async fn test_check_status_by_url_unstable() {
    let app = create_test_app().await;
    let addr = spawn_target_site().await;

    let body: Value = app
        .server
        .get("/websites/check-status")
        .add_query_param("url", format!("http://{}/broken", addr))
        .await
        .json();

    assert_eq!(body["status"], "unstable");
    assert_eq!(body["http_status"], 503);
    assert!(body["page_title"].is_null());
    assert!(body["favicon"].is_null());
}

/// 目标不可达时仍返回 200，结果描述为 offline
#[tokio::test]
async fn test_check_status_by_url_offline_is_still_ok() {
    let app = create_test_app().await;
    let addr = unused_local_addr().await;

    let response = app
        .server
        .get("/websites/check-status")
        .add_query_param("url", format!("http://{}/", addr))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "offline");
    assert!(body["http_status"].is_null());
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_two_decimals(&body["response_time_seconds"]);
}

#[tokio::test]
async fn test_check_status_by_url_malformed_is_offline() {
    let app = create_test_app().await;

    let body: Value = app
        .server
        .get("/websites/check-status")
        .add_query_param("url", "not a url")
        .await
        .json();

    assert_eq!(body["status"], "offline");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_check_status_by_id() {
    let app = create_test_app().await;
    let addr = spawn_target_site().await;
    let website = app
        .website_repo
        .create("Target", &format!("http://{}/", addr))
        .await
        .unwrap();

    let response = app
        .server
        .get(&format!("/websites/{}/check-status", website.id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "online");
    assert_eq!(body["website_name"], "Target");
    assert_eq!(body["url"], json!(website.url));
}

#[tokio::test]
async fn test_check_status_by_unknown_id_is_not_found() {
    let app = create_test_app().await;

    let response = app.server.get("/websites/999/check-status").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Website not found");
}
