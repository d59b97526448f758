use std::net::TcpListener;

use collector::{CollectError, Collector, CollectorSettings, HttpPageSource, PageSource};
use common::JobPosting;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing_page(count: usize, title: &str) -> String {
    let items: String = (0..count)
        .map(|i| {
            format!(
                r#"<li role="listitem"><h3 class="text-size-4"><a href="https://jobs.test/{i}"> {title} </a></h3></li>"#
            )
        })
        .collect();
    format!(r#"<html><body><ul class="job-list" role="list">{items}</ul></body></html>"#)
}

async fn mount_page(server: &MockServer, page: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/positions/"))
        .and(query_param("_paged", page))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"))
        .expect(1)
        .mount(server)
        .await;
}

fn base_url(server: &MockServer) -> String {
    format!("{}/positions/?_departments=engineering&_paged=", server.uri())
}

// The blocking client runs its own runtime, so it is driven from a
// blocking thread rather than the test's async context.

#[tokio::test(flavor = "multi_thread")]
async fn http_source_returns_page_html() {
    let server = MockServer::start().await;
    mount_page(&server, "1", "<html>ok</html>".to_string()).await;
    let url = format!("{}1", base_url(&server));

    let html = tokio::task::spawn_blocking(move || HttpPageSource::new()?.fetch(1, &url))
        .await
        .expect("join")
        .expect("fetch ok");

    assert_eq!(html, "<html>ok</html>");
}

#[tokio::test(flavor = "multi_thread")]
async fn http_source_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let url = format!("{}/missing", server.uri());

    let err = tokio::task::spawn_blocking(move || HttpPageSource::new()?.fetch(3, &url))
        .await
        .expect("join")
        .unwrap_err();

    match err {
        CollectError::Status { page, status } => {
            assert_eq!(page, 3);
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn http_source_reports_connection_failure() {
    // Reserve a free port, then release it so nothing is listening there.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let url = format!("http://127.0.0.1:{port}/gone");

    let err = tokio::task::spawn_blocking(move || HttpPageSource::new()?.fetch(1, &url))
        .await
        .expect("join")
        .unwrap_err();

    assert!(matches!(err, CollectError::Request { page: 1, .. }));
    assert!(err.is_transient());
}

#[tokio::test(flavor = "multi_thread")]
async fn collector_walks_pages_over_http() {
    let server = MockServer::start().await;
    mount_page(&server, "1", listing_page(10, "Software Engineer, Payments")).await;
    mount_page(&server, "2", listing_page(3, "Senior Software Engineer")).await;
    let settings = CollectorSettings::new(base_url(&server));

    let postings = tokio::task::spawn_blocking(move || {
        Collector::new(settings, HttpPageSource::new()?)?.collect()
    })
    .await
    .expect("join")
    .expect("collect ok");

    assert_eq!(postings.len(), 10);
    assert_eq!(
        postings[0],
        JobPosting::new("Software Engineer, Payments", "https://jobs.test/0")
    );
    // `expect(1)` on each mock is verified when the server drops.
}
