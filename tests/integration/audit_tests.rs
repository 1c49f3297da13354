//! Full check runs against a mock site

use redirect_audit::checks::{AuditSettings, Auditor, Verdict};
use redirect_audit::config::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auditor() -> Auditor<redirect_audit::HttpProbe> {
    Auditor::from_config(&Config::default()).expect("Failed to build auditor")
}

async fn redirect(mock_server: &MockServer, from: &str, to: &str) {
    Mock::given(method("GET"))
        .and(path(from))
        .respond_with(ResponseTemplate::new(301).insert_header("location", to))
        .mount(mock_server)
        .await;
}

async fn page(mock_server: &MockServer, at: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(mock_server)
        .await;
}

/// A site that handles everything but `index.htm` correctly
async fn well_behaved_site() -> MockServer {
    let mock_server = MockServer::start().await;

    page(
        &mock_server,
        "/",
        200,
        r#"<html><body><a href="/">Home</a><a href="/catalog/">Catalog</a></body></html>"#,
    )
    .await;
    page(
        &mock_server,
        "/catalog/",
        200,
        r#"<html><head><link rel="canonical" href="/catalog/"></head></html>"#,
    )
    .await;

    redirect(&mock_server, "/catalog///", "/catalog/").await;
    redirect(&mock_server, "/CATALOG/", "/catalog/").await;
    redirect(&mock_server, "/index.html", "/").await;
    page(&mock_server, "/index.php", 404, "").await;
    page(&mock_server, "/index.htm", 200, "<html>home</html>").await;
    redirect(&mock_server, "/catalog", "/catalog/").await;
    page(&mock_server, "/catalog.html", 404, "").await;
    page(
        &mock_server,
        "/this-page-should-not-exist-404-check",
        404,
        "not found",
    )
    .await;

    mock_server
}

#[tokio::test]
async fn test_full_run_against_mock_site() {
    let mock_server = well_behaved_site().await;
    let base = format!("{}/", mock_server.uri());

    let report = auditor().run(&base, "Googlebot Smartphone").await.unwrap();

    assert_eq!(
        report.test_link.as_deref(),
        Some(format!("{}catalog/", base).as_str())
    );

    // Plain HTTP on an IP host: no HTTPS, WWW or chain rows
    let rows: Vec<(u32, Verdict)> = report
        .results
        .iter()
        .map(|r| (r.number, r.status))
        .collect();
    assert_eq!(
        rows,
        vec![
            (3, Verdict::Pass),
            (4, Verdict::Pass),
            (5, Verdict::Pass),
            (6, Verdict::Pass),
            (7, Verdict::Warn),
            (8, Verdict::Pass),
            (9, Verdict::Pass),
            (11, Verdict::Pass),
            (12, Verdict::Pass),
        ]
    );

    let slashes = &report.results[0];
    assert_eq!(slashes.url, format!("{}catalog///", base));
    assert_eq!(slashes.fact, format!("301 → 200 → {}catalog/", base));
}

#[tokio::test]
async fn test_gate_failure_probes_once() {
    let mock_server = MockServer::start().await;
    page(&mock_server, "/", 500, "boom").await;

    let report = auditor()
        .run(&format!("{}/", mock_server.uri()), "Googlebot Smartphone")
        .await
        .unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].number, 0);
    assert_eq!(report.results[0].check_name, "Основной URL");
    assert_eq!(report.results[0].status, Verdict::Fail);
    assert_eq!(report.results[0].status_code, Some(500));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_soft_404_site() {
    let mock_server = MockServer::start().await;

    // Every path answers 200
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let report = auditor()
        .run(&format!("{}/", mock_server.uri()), "Googlebot Smartphone")
        .await
        .unwrap();

    let not_found = report
        .results
        .iter()
        .find(|r| r.number == 12)
        .expect("404 check missing");
    assert_eq!(not_found.status, Verdict::Fail);

    let canonical = report
        .results
        .iter()
        .find(|r| r.number == 11)
        .expect("canonical check missing");
    assert_eq!(canonical.status, Verdict::Fail);
    assert_eq!(canonical.status_text, "Canonical не найден");

    // No links on the home page, so the fallback path is used
    assert!(report
        .test_link
        .as_deref()
        .is_some_and(|link| link.ends_with("/catalog/")));
}

#[tokio::test]
async fn test_custom_missing_page_path() {
    let mock_server = well_behaved_site().await;
    page(&mock_server, "/nope-404", 200, "soft").await;

    let settings = AuditSettings {
        missing_page_path: "nope-404".to_string(),
        ..AuditSettings::default()
    };
    let probe = redirect_audit::HttpProbe::from_config(&Config::default().probe).unwrap();
    let auditor = Auditor::new(probe, settings);

    let report = auditor
        .run(&format!("{}/", mock_server.uri()), "Googlebot Smartphone")
        .await
        .unwrap();

    let not_found = report.results.iter().find(|r| r.number == 12).unwrap();
    assert!(not_found.url.ends_with("/nope-404"));
    assert_eq!(not_found.status, Verdict::Fail);
}
