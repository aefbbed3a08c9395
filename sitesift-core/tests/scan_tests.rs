// Tests for the sequential scan-and-report loop

use sitesift_core::report::ReportWriter;
use sitesift_core::scan::{execute_scan, ScanOptions, ScanResultCallback, ScanSummary};
use sitesift_scanner::{ScanResult, ScanStatus};
use std::sync::{Arc, Mutex};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const HEADER_LINE: &str = "Website,Title,Status,Suspicious Links,Suspicious Scripts";

async fn serve(mock_server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_bytes(body.as_bytes().to_vec()),
        )
        .mount(mock_server)
        .await;
}

fn options(targets: Vec<String>) -> ScanOptions {
    ScanOptions {
        targets,
        timeout_secs: 5,
        show_progress: false,
    }
}

async fn run(targets: Vec<String>) -> (ScanSummary, Vec<String>) {
    let mut report = ReportWriter::from_writer(Vec::new()).unwrap();
    let summary = execute_scan(options(targets), &mut report, None, None)
        .await
        .unwrap();
    let bytes = report.finish().unwrap();
    let lines = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    (summary, lines)
}

#[tokio::test]
async fn test_empty_target_list_writes_header_only() {
    let (summary, lines) = run(vec![]).await;

    assert_eq!(summary, ScanSummary::default());
    assert_eq!(lines, vec![HEADER_LINE.to_string()]);
}

#[tokio::test]
async fn test_plain_page_is_safe() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/", "<html><body><p>nothing here</p></body></html>").await;

    let url = format!("{}/", mock_server.uri());
    let (summary, lines) = run(vec![url.clone()]).await;

    assert_eq!(summary.safe, 1);
    assert_eq!(lines[1], format!("{},N/A,Safe,,", url));
}

#[tokio::test]
async fn test_javascript_link_is_suspicious() {
    let mock_server = MockServer::start().await;
    serve(
        &mock_server,
        "/",
        r#"<html><head><title>Evil</title></head><body><a href="javascript:alert(1)">x</a></body></html>"#,
    )
    .await;

    let url = format!("{}/", mock_server.uri());
    let (summary, lines) = run(vec![url.clone()]).await;

    assert_eq!(summary.suspicious, 1);
    assert_eq!(lines[1], format!("{},Evil,Suspicious,javascript:alert(1),", url));
}

#[tokio::test]
async fn test_eval_script_snippet_is_recorded() {
    let mock_server = MockServer::start().await;
    serve(
        &mock_server,
        "/",
        r#"<html><body><script type="text/javascript">var payload = eval(atob("ZG9jdW1lbnQ="));</script></body></html>"#,
    )
    .await;

    let mut report = ReportWriter::from_writer(Vec::new()).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let callback: ScanResultCallback = Arc::new(move |result: &ScanResult| {
        seen_clone.lock().unwrap().push(result.clone());
    });

    execute_scan(
        options(vec![mock_server.uri()]),
        &mut report,
        None,
        Some(callback),
    )
    .await
    .unwrap();

    let results = seen.lock().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, ScanStatus::Suspicious);
    assert_eq!(
        results[0].matched_scripts,
        vec![r#"<script type="text/javascript">var payload = eval(..."#.to_string()]
    );
}

#[tokio::test]
async fn test_unreachable_site_becomes_error_row_and_run_continues() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/", "<html><head><title>Up</title></head></html>").await;

    let good = format!("{}/", mock_server.uri());
    let (summary, lines) = run(vec!["http://127.0.0.1:1".to_string(), good.clone()]).await;

    assert_eq!(summary.errors, 1);
    assert_eq!(summary.safe, 1);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "http://127.0.0.1:1,N/A,Error,N/A,N/A");
    assert_eq!(lines[2], format!("{},Up,Safe,,", good));
}

#[tokio::test]
async fn test_rows_follow_input_order() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, "/a", "<html><head><title>A</title></head></html>").await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"<html><head><title>B</title></head></html>".to_vec())
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .mount(&mock_server)
        .await;

    let b = format!("{}/b", mock_server.uri());
    let a = format!("{}/a", mock_server.uri());

    let order = Arc::new(Mutex::new(Vec::new()));
    let order_clone = order.clone();
    let progress: sitesift_core::scan::ScanProgressCallback = Arc::new(move |url: &str| {
        order_clone.lock().unwrap().push(url.to_string());
    });

    let mut report = ReportWriter::from_writer(Vec::new()).unwrap();
    let summary = execute_scan(
        options(vec![b.clone(), a.clone()]),
        &mut report,
        Some(progress),
        None,
    )
    .await
    .unwrap();

    let output = String::from_utf8(report.finish().unwrap()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(summary.scanned, 2);
    assert!(lines[1].starts_with(&format!("{},B,", b)));
    assert!(lines[2].starts_with(&format!("{},A,", a)));
    assert_eq!(*order.lock().unwrap(), vec![b, a]);
}

#[tokio::test]
async fn test_repeated_runs_produce_identical_reports() {
    let mock_server = MockServer::start().await;
    serve(
        &mock_server,
        "/",
        r#"<html><head><title>Same</title></head><body><a href="data:text/html;base64,PGgxPg==">x</a><script>eval(1)</script></body></html>"#,
    )
    .await;

    let targets = vec![mock_server.uri(), "http://127.0.0.1:1".to_string()];
    let (_, first) = run(targets.clone()).await;
    let (_, second) = run(targets).await;

    assert_eq!(first, second);
}
