//! HTTP probe and redirect walker against a mock server

use redirect_audit::config::ProbeConfig;
use redirect_audit::probe::{walk_redirects, HttpProbe, Probe};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn probe() -> HttpProbe {
    let config = ProbeConfig {
        timeout_secs: 5,
        ..ProbeConfig::default()
    };
    HttpProbe::from_config(&config).expect("Failed to build probe")
}

#[tokio::test]
async fn test_probe_does_not_follow_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;

    let result = probe()
        .fetch(&format!("{}/old", mock_server.uri()), "TestBot")
        .await;

    assert_eq!(result.status, Some(301));
    assert_eq!(result.location.as_deref(), Some("/new"));
    assert!(result.error.is_none());

    // Only the redirect itself was requested
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_walk_single_redirect() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>new</html>"))
        .mount(&mock_server)
        .await;

    let result = walk_redirects(&probe(), &format!("{}/old", base), "TestBot", 10).await;

    assert_eq!(
        result.chain,
        vec![format!("{}/old", base), format!("{}/new", base)]
    );
    assert_eq!(result.statuses().collect::<Vec<_>>(), vec![Some(301), Some(200)]);
    assert_eq!(result.first_status, Some(301));
    assert_eq!(result.final_status, Some(200));
    assert_eq!(result.redirect_count, 1);
    assert_eq!(result.final_url, format!("{}/new", base));
    assert_eq!(result.html, "<html>new</html>");
    assert!(!result.hop_limit_reached);
}

#[tokio::test]
async fn test_walk_multi_hop_chain() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/b"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(
            ResponseTemplate::new(308).insert_header("location", format!("{}/c", base).as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let result = walk_redirects(&probe(), &format!("{}/a", base), "TestBot", 10).await;

    assert_eq!(result.redirect_count, 2);
    assert_eq!(result.chain.len(), 3);
    assert_eq!(result.steps.len(), 3);
    assert_eq!(
        result.statuses().collect::<Vec<_>>(),
        vec![Some(302), Some(308), Some(200)]
    );
}

#[tokio::test]
async fn test_walk_keeps_404_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&mock_server)
        .await;

    let result = walk_redirects(
        &probe(),
        &format!("{}/missing", mock_server.uri()),
        "TestBot",
        10,
    )
    .await;

    assert_eq!(result.first_status, Some(404));
    assert_eq!(result.final_status, Some(404));
    assert_eq!(result.redirect_count, 0);
    assert_eq!(result.html, "not here");
}

#[tokio::test]
async fn test_walk_stops_at_hop_cap() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/loop"))
        .mount(&mock_server)
        .await;

    let result = walk_redirects(
        &probe(),
        &format!("{}/loop", mock_server.uri()),
        "TestBot",
        3,
    )
    .await;

    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.chain.len(), 4);
    assert!(result.hop_limit_reached);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_redirect_without_location_is_terminal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(301).set_body_string("moved"))
        .mount(&mock_server)
        .await;

    let result = walk_redirects(
        &probe(),
        &format!("{}/broken", mock_server.uri()),
        "TestBot",
        10,
    )
    .await;

    assert_eq!(result.final_status, Some(301));
    assert_eq!(result.redirect_count, 0);
    assert_eq!(result.chain.len(), 1);
    assert_eq!(result.html, "moved");
}

#[tokio::test]
async fn test_user_agent_is_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "YandexBot"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = probe()
        .fetch(&format!("{}/", mock_server.uri()), "YandexBot")
        .await;

    assert_eq!(result.status, Some(200));
}

#[tokio::test]
async fn test_server_errors_are_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let result = probe()
        .fetch(&format!("{}/", mock_server.uri()), "TestBot")
        .await;

    assert_eq!(result.status, Some(503));
    assert_eq!(result.body, "maintenance");
    assert!(result.error.is_none());
}
