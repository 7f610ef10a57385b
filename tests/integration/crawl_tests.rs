//! Integration tests for the scraper
//!
//! These tests use wiremock to serve a small alphabetical index and walk it
//! end-to-end, from the root index through letter pages to the archive.

use keyword_scraper::config::{parse_config, Config};
use keyword_scraper::crawler::{run_scrape, CrawlSession, REQUEST_DELAY};
use keyword_scraper::output::{read_archive, write_archive};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at the given route
async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Builds a session that does not pause between requests
fn fast_session() -> CrawlSession {
    CrawlSession::new(&Config::default())
        .expect("Failed to build session")
        .with_request_delay(Duration::ZERO)
}

fn index_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/section4/", server.uri())).expect("Failed to parse index URL")
}

#[tokio::test]
async fn test_duplicate_keyword_links_produce_one_record() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/section4/",
        r#"<html><head><title>Index</title></head><body>
            <a href="/index.html">Home</a>
            <a href="/section4/a.html">A</a>
            <a href="/section4/at.html">@</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/section4/a.html",
        r#"<html><body>
            <a href="/section4/abc.html">ABC</a>
            <a href="/section4/abc.html?from=a#usage">ABC usage</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/section4/at.html",
        r#"<html><body>
            <a href="abc.html">ABC again</a>
            <a href="/section4/at_sign.html">@</a>
        </body></html>"#,
    )
    .await;

    // The keyword page must be fetched exactly once
    Mock::given(method("GET"))
        .and(path("/section4/abc.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>ABC</title></head><body><p>Alphabet soup.</p></body></html>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    mount_page(
        &server,
        "/section4/at_sign.html",
        "<html><head><title>@ Command</title></head><body><pre>@ 1,1 SAY 'x'</pre></body></html>",
    )
    .await;

    let index = index_url(&server);
    let mut session = fast_session();
    let records = session.walk(&index).await;

    let abc_records = records
        .iter()
        .filter(|r| r.url.ends_with("/section4/abc.html"))
        .count();
    assert_eq!(abc_records, 1);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "ABC");
    assert_eq!(records[1].title, "@ Command");
    assert_eq!(records[1].code_blocks, vec!["@ 1,1 SAY 'x'"]);

    let stats = session.stats();
    assert_eq!(stats.letter_links, 2);
    assert_eq!(stats.keyword_links, 2);
    assert_eq!(stats.duplicate_links, 2);

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("keywords.json");
    let archive =
        write_archive(index.as_str(), records.clone(), &output).expect("Failed to write archive");
    assert_eq!(archive.total_keywords, 2);

    let reread = read_archive(&output).expect("Failed to read archive");
    assert_eq!(reread.total_keywords, reread.results.len());
    assert_eq!(reread.results, records);
}

#[tokio::test]
async fn test_keyword_page_extraction() {
    let server = MockServer::start().await;

    mount_page(&server, "/section4/", r#"<a href="/section4/a.html">A</a>"#).await;
    mount_page(&server, "/section4/a.html", r#"<a href="s4g001.html">ABS()</a>"#).await;
    mount_page(
        &server,
        "/section4/s4g001.html",
        r#"<html>
        <head><title>ABS()</title></head>
        <body>
            <h2>Returns absolute value</h2>
            <footer><p>Copyright notice</p></footer>
            <pre>? ABS(-5)</pre>
        </body>
        </html>"#,
    )
    .await;

    let mut session = fast_session();
    let records = session.walk(&index_url(&server)).await;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.url, format!("{}/section4/s4g001.html", server.uri()));
    assert_eq!(record.title, "ABS()");
    assert_eq!(record.text_content, vec!["Returns absolute value"]);
    assert_eq!(record.code_blocks, vec!["? ABS(-5)"]);
}

#[tokio::test]
async fn test_failed_keyword_pages_do_not_halt_walk() {
    let server = MockServer::start().await;

    mount_page(&server, "/section4/", r#"<a href="/section4/a.html">A</a>"#).await;
    mount_page(
        &server,
        "/section4/a.html",
        r#"
        <a href="/section4/missing.html">MISSING</a>
        <a href="/section4/slow.html">SLOW</a>
        <a href="/section4/acos.html">ACOS()</a>
        "#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/section4/missing.html"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/section4/slow.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>SLOW</title>")
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    mount_page(&server, "/section4/acos.html", "<title>ACOS()</title><p>Arc cosine.</p>").await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(300))
        .build()
        .expect("Failed to build client");
    let mut session = CrawlSession::with_client(client).with_request_delay(Duration::ZERO);
    let records = session.walk(&index_url(&server)).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "ACOS()");
    assert_eq!(session.stats().keyword_pages_failed, 2);
}

#[tokio::test]
async fn test_run_scrape_writes_archive() {
    let server = MockServer::start().await;

    mount_page(&server, "/section4/", r#"<a href="/section4/z.html">Z</a>"#).await;
    mount_page(&server, "/section4/z.html", r#"<a href="/section4/zap.html">ZAP</a>"#).await;
    mount_page(
        &server,
        "/section4/zap.html",
        "<title>ZAP</title><li>Deletes all records</li>",
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("out").join("keywords.json");
    let config = parse_config(&format!(
        r#"
[scraper]
index-url = "{}/section4/"
output-path = "{}"
"#,
        server.uri(),
        output.display()
    ))
    .expect("Failed to parse config");

    let archive = run_scrape(&config).await.expect("Scrape failed");
    assert_eq!(archive.total_keywords, 1);

    let reread = read_archive(&output).expect("Failed to read archive");
    assert_eq!(reread.base_url, format!("{}/section4/", server.uri()));
    assert_eq!(reread.results[0].title, "ZAP");
    assert_eq!(reread.results[0].text_content, vec!["Deletes all records"]);
}

#[tokio::test]
async fn test_default_pause_follows_every_page_fetch() {
    let server = MockServer::start().await;

    mount_page(&server, "/section4/", r#"<a href="/section4/s.html">S</a>"#).await;
    mount_page(
        &server,
        "/section4/s.html",
        r#"<a href="/section4/seek.html">SEEK</a><a href="/section4/skip.html">SKIP</a>"#,
    )
    .await;
    mount_page(&server, "/section4/seek.html", "<title>SEEK</title>").await;
    mount_page(&server, "/section4/skip.html", "<title>SKIP</title>").await;

    let mut session = CrawlSession::new(&Config::default()).expect("Failed to build session");
    assert_eq!(session.request_delay(), REQUEST_DELAY);

    let started = Instant::now();
    let records = session.walk(&index_url(&server)).await;
    let elapsed = started.elapsed();

    assert_eq!(records.len(), 2);
    // One pause after the letter page and one after each keyword page,
    // none after the root index
    assert!(
        elapsed >= REQUEST_DELAY * 3,
        "Expected at least 3 pauses, walk took {:?}",
        elapsed
    );
    assert!(
        elapsed < REQUEST_DELAY * 4,
        "Expected exactly 3 pauses, walk took {:?}",
        elapsed
    );
}
