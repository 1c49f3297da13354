//! HTTP API end-to-end tests

use redirect_audit::config::Config;
use redirect_audit::server::{router, AppState};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts the API on an ephemeral port and returns its base URL
async fn spawn_api() -> String {
    let state = AppState::from_config(&Config::default()).expect("Failed to build state");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let address = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, router(state))
            .await
            .expect("API server failed");
    });

    format!("http://{}", address)
}

async fn post_check(api: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/check-redirects", api))
        .json(&body)
        .send()
        .await
        .expect("Request failed");

    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("Body is not JSON");
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let api = spawn_api().await;

    let response = reqwest::get(format!("{}/health", api)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    let api = spawn_api().await;

    let (status, body) = post_check(&api, json!({ "userAgent": "BingBot" })).await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());

    let (status, _) = post_check(&api, json!({ "url": "   " })).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_invalid_url_is_bad_request() {
    let api = spawn_api().await;

    let (status, body) = post_check(&api, json!({ "url": "ftp://example.com/" })).await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let api = spawn_api().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/check-redirects", api))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unreachable_site_returns_gate_row() {
    let api = spawn_api().await;
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&site)
        .await;

    let (status, body) = post_check(&api, json!({ "url": format!("{}/", site.uri()) })).await;

    assert_eq!(status, 200);
    let results = body["results"].as_array().expect("results missing");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["number"], 0);
    assert_eq!(results[0]["checkName"], "Основной URL");
    assert_eq!(results[0]["status"], "fail");
    assert_eq!(results[0]["statusCode"], 503);
}

#[tokio::test]
async fn test_default_user_agent_is_sent() {
    let api = spawn_api().await;
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Googlebot Smartphone"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&site)
        .await;

    let (status, body) = post_check(&api, json!({ "url": format!("{}/", site.uri()) })).await;

    assert_eq!(status, 200);
    assert_eq!(body["results"][0]["statusCode"], 500);
}

#[tokio::test]
async fn test_requested_user_agent_is_sent() {
    let api = spawn_api().await;
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "YandexBot"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&site)
        .await;

    let (status, _) = post_check(
        &api,
        json!({ "url": format!("{}/", site.uri()), "userAgent": "YandexBot" }),
    )
    .await;

    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_full_check_response_shape() {
    let api = spawn_api().await;
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<a href="/shop/">Shop</a>"#),
        )
        .mount(&site)
        .await;

    let (status, body) = post_check(&api, json!({ "url": format!("{}/", site.uri()) })).await;

    assert_eq!(status, 200);
    let results = body["results"].as_array().unwrap();
    assert!(!results.is_empty());

    for row in results {
        for field in [
            "number",
            "checkName",
            "url",
            "expected",
            "statusCode",
            "redirectChain",
            "redirectSteps",
            "fact",
            "recommendation",
            "status",
            "statusText",
        ] {
            assert!(row.get(field).is_some(), "missing {}", field);
        }
    }

    assert!(results[0]["url"]
        .as_str()
        .unwrap()
        .ends_with("/shop///"));
}
