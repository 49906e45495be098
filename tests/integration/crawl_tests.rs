//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock sites and run full crawls in
//! both modes end-to-end.

use sitescribe::crawler::{run_document_crawl_to, run_listing_crawl, run_listing_crawl_to};
use sitescribe::output::{
    DocElement, OCR_SECTION_HEADING, OCR_UNAVAILABLE_NOTE, PDF_SECTION_HEADING,
};
use sitescribe::{CrawlConfig, Crawler, NoProgress, ProgressState, RunStatus, ScribeError};
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration rooted at the mock server, without courtesy delays
fn test_config(server: &MockServer) -> CrawlConfig {
    CrawlConfig::new(format!("{}/", server.uri())).with_page_delay(Duration::ZERO)
}

async fn mount_page(server: &MockServer, route: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_never(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

fn heading(level: u8, text: &str) -> DocElement {
    DocElement::Heading {
        level,
        text: text.to_string(),
    }
}

fn paragraph(text: &str) -> DocElement {
    DocElement::Paragraph(text.to_string())
}

#[tokio::test]
async fn test_document_crawl_single_site() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><head><title>Home</title><meta name="description" content="Welcome page"></head>
        <body><nav><a href="/menu">Menu</a></nav>
        <main><h1>Welcome</h1><ul><li>First</li></ul><p>Body text</p><a href="/about">About</a></main>
        </body></html>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/about",
        r#"<html><head><title>About</title></head><body><main><p>About us</p></main></body></html>"#,
        1,
    )
    .await;
    mount_never(&server, "/menu").await;

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert_eq!(crawler.status(), RunStatus::Completed);
    assert_eq!(writer.page_count(), 2);
    assert_eq!(
        writer.elements(),
        &[
            heading(1, "Home"),
            paragraph("[Description]\nWelcome page"),
            heading(1, "Welcome"),
            paragraph("Welcome"),
            DocElement::Bullet("First".to_string()),
            paragraph("First"),
            paragraph("Body text"),
            paragraph("About"),
            DocElement::PageBreak,
            heading(1, "About"),
            paragraph("About us"),
        ]
    );
}

#[tokio::test]
async fn test_document_artifact_written() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        "<html><head><title>Only</title></head><body><p>Hello</p></body></html>",
        1,
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("exports").join("site.docx");

    let written = run_document_crawl_to(test_config(&server), &target, &NoProgress)
        .await
        .unwrap();

    assert_eq!(written, target);
    let bytes = std::fs::read(&target).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_listing_crawl_csv_report() {
    let server = MockServer::start().await;
    let root = server.uri();

    mount_page(
        &server,
        "/",
        r#"<html><body><nav><a href="/nav-only">Nav</a></nav>
        <a href="/a">A</a><a href="/b/c">C</a><a href="/docs/x.pdf">PDF</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&server, "/a", "<html><body>A</body></html>", 1).await;
    mount_page(&server, "/b/c", "<html><body>C</body></html>", 1).await;
    mount_page(&server, "/nav-only", "<html><body>Nav</body></html>", 1).await;
    mount_never(&server, "/docs/x.pdf").await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("inventory.csv");
    run_listing_crawl_to(test_config(&server), &target, &NoProgress)
        .await
        .unwrap();

    let text = std::fs::read_to_string(&target).unwrap();
    let lines: Vec<_> = text.lines().collect();

    let expected = vec![
        "url,directory,is_pdf".to_string(),
        format!("{},/,0", root),
        format!("{}/docs/x.pdf,/docs/,1", root),
        format!("{}/b/c,/b/,0", root),
        format!("{}/a,/a/,0", root),
        format!("{}/nav-only,/nav-only/,0", root),
        String::new(),
        "directory,page_count,pdf_count".to_string(),
        "/,1,0".to_string(),
        "/docs/,1,1".to_string(),
        "/b/,1,0".to_string(),
        "/a/,1,0".to_string(),
        "/nav-only/,1,0".to_string(),
        String::new(),
        "total_pages,total_pdfs".to_string(),
        "5,1".to_string(),
    ];
    assert_eq!(lines, expected);
}

#[tokio::test]
async fn test_listing_artifact_is_timestamped() {
    let server = MockServer::start().await;
    mount_page(&server, "/", "<html><body>Root</body></html>", 1).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server).with_output_directory(dir.path());

    let written = run_listing_crawl(config, &NoProgress).await.unwrap();

    assert_eq!(written.parent(), Some(dir.path()));
    let name = written.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("all_urls_"));
    assert!(name.ends_with(".csv"));
    assert!(written.exists());
}

#[tokio::test]
async fn test_each_page_fetched_once() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>
        <a href="/a">a</a><a href="/a/">a slash</a><a href="/a?x=1">a query</a>
        <a href="/a#top">a fragment</a><a href="/b">b</a><a href="/">self</a>
        </body></html>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/a",
        r#"<html><body><a href="/">home</a><a href="/b/">b</a></body></html>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/b",
        r#"<html><body><a href="/a">a</a><a href="/b?page=2">again</a></body></html>"#,
        1,
    )
    .await;

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert_eq!(writer.page_count(), 3);
}

#[tokio::test]
async fn test_excluded_paths_not_fetched() {
    let server = MockServer::start().await;
    let root = server.uri();

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/private/x">x</a><a href="/privateer">p</a><a href="/public">ok</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&server, "/public", "<html><body>Public</body></html>", 1).await;
    mount_never(&server, "/private/x").await;
    mount_never(&server, "/privateer").await;

    let config = test_config(&server).with_exclude_paths(vec!["/private".to_string()]);
    let mut crawler = Crawler::new(config).unwrap();
    let urls = crawler.collect_urls().await.unwrap();

    let urls: Vec<_> = urls.iter().map(|u| u.as_str().to_string()).collect();
    assert_eq!(urls, vec![root.clone(), format!("{}/public", root)]);
}

#[tokio::test]
async fn test_include_prefixes_limit_scope() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/products",
        r#"<html><body><a href="/products/a">a</a><a href="/about">about</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&server, "/products/a", "<html><body>A</body></html>", 1).await;
    mount_never(&server, "/about").await;

    let config = CrawlConfig::new(format!("{}/products", server.uri()))
        .with_page_delay(Duration::ZERO)
        .with_include_only_prefixes(vec!["/products".to_string()]);
    let mut crawler = Crawler::new(config).unwrap();
    let urls = crawler.collect_urls().await.unwrap();

    assert_eq!(urls.len(), 2);
}

#[tokio::test]
async fn test_off_site_links_not_fetched() {
    let server = MockServer::start().await;
    let other = MockServer::start().await;

    mount_page(
        &server,
        "/",
        &format!(
            r#"<html><body><a href="{}/page">elsewhere</a><a href="{}/same">same</a></body></html>"#,
            other.uri(),
            server.uri()
        ),
        1,
    )
    .await;
    mount_page(&server, "/same", "<html><body>Same</body></html>", 1).await;
    mount_never(&other, "/page").await;

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    let urls = crawler.collect_urls().await.unwrap();

    assert_eq!(urls.len(), 2);
}

#[tokio::test]
async fn test_failed_fetch_skipped_in_document_mode() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/missing">gone</a><a href="/ok">ok</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&server, "/ok", "<html><head><title>OK</title></head></html>", 1).await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let reports = Mutex::new(Vec::new());
    let sink = |p: ProgressState| reports.lock().unwrap().push(p);

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    let writer = crawler.crawl_document(&sink).await.unwrap();

    assert_eq!(writer.page_count(), 2);
    assert_eq!(
        *reports.lock().unwrap(),
        vec![
            ProgressState { done: 1, total: 3 },
            ProgressState { done: 2, total: 3 },
        ]
    );
}

#[tokio::test]
async fn test_failed_fetch_counted_in_listing_mode() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/missing">gone</a><a href="/ok">ok</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&server, "/ok", "<html><body>OK</body></html>", 1).await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let reports = Mutex::new(Vec::new());
    let sink = |p: ProgressState| reports.lock().unwrap().push(p);

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("inventory.csv");
    run_listing_crawl_to(test_config(&server), &target, &sink)
        .await
        .unwrap();

    assert_eq!(
        *reports.lock().unwrap(),
        vec![
            ProgressState { done: 1, total: 1 },
            ProgressState { done: 2, total: 3 },
            ProgressState { done: 3, total: 3 },
        ]
    );

    let text = std::fs::read_to_string(&target).unwrap();
    assert!(text.contains("/missing,/missing/,0"));
}

#[tokio::test]
async fn test_progress_is_monotonic() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/a">a</a><a href="/b">b</a><a href="/c">c</a></body></html>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/a",
        r#"<html><body><a href="/a/1">1</a><a href="/a/2">2</a><a href="/b">b</a></body></html>"#,
        1,
    )
    .await;
    for route in ["/b", "/c", "/a/1", "/a/2"] {
        mount_page(&server, route, r#"<html><body><a href="/">home</a></body></html>"#, 1).await;
    }

    let reports = Mutex::new(Vec::new());
    let sink = |p: ProgressState| reports.lock().unwrap().push(p);

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    crawler.crawl_document(&sink).await.unwrap();

    let reports = reports.into_inner().unwrap();
    assert_eq!(reports.len(), 6);
    for (index, report) in reports.iter().enumerate() {
        assert_eq!(report.done, index as u64 + 1);
        assert!(report.total >= report.done);
    }
    assert_eq!(reports.last().unwrap().total, 6);
}

#[tokio::test]
async fn test_cancellation_stops_run_without_artifact() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/a">a</a><a href="/b">b</a></body></html>"#,
        1,
    )
    .await;
    mount_never(&server, "/a").await;
    mount_never(&server, "/b").await;

    let token = CancellationToken::new();
    let cancel = token.clone();
    let sink = move |p: ProgressState| {
        if p.done == 1 {
            cancel.cancel();
        }
    };

    let mut crawler = Crawler::new(test_config(&server))
        .unwrap()
        .with_cancellation(token);

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("cancelled.docx");
    let result = crawler.run_document(&target, &sink).await;

    assert!(matches!(result, Err(ScribeError::Cancelled { pages: 1 })));
    assert_eq!(crawler.status(), RunStatus::Cancelled);
    assert!(!target.exists());
}

#[tokio::test]
async fn test_cancellation_interrupts_page_delay() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/a">a</a></body></html>"#,
        1,
    )
    .await;
    mount_never(&server, "/a").await;

    let token = CancellationToken::new();
    let cancel = token.clone();
    let sink = move |_: ProgressState| cancel.cancel();

    let config = test_config(&server).with_page_delay(Duration::from_secs(600));
    let mut crawler = Crawler::new(config).unwrap().with_cancellation(token);

    let result = tokio::time::timeout(Duration::from_secs(10), crawler.crawl_document(&sink))
        .await
        .expect("cancellation should cut the delay short");

    assert!(matches!(result, Err(ScribeError::Cancelled { pages: 1 })));
}

#[tokio::test]
async fn test_pdf_links_not_crawled_in_document_mode() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/files/report.PDF">report</a><a href="/next">next</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&server, "/next", "<html><body>Next</body></html>", 1).await;
    mount_never(&server, "/files/report.PDF").await;

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert_eq!(writer.page_count(), 2);
}

#[tokio::test]
async fn test_broken_pdf_is_skipped() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><head><title>Docs</title></head><body><a href="/files/report.pdf">report</a></body></html>"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/files/report.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not really a pdf".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server).with_pdf(true);
    let mut crawler = Crawler::new(config).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert_eq!(writer.page_count(), 1);
    assert!(!writer
        .elements()
        .iter()
        .any(|e| matches!(e, DocElement::Heading { level: 2, .. })));
}

#[tokio::test]
async fn test_ocr_unavailable_note() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><head><title>Gallery</title></head><body><img src="/banner.png"></body></html>"#,
        1,
    )
    .await;
    mount_never(&server, "/banner.png").await;

    let config = test_config(&server).with_ocr(true);
    let mut crawler = Crawler::new(config).unwrap().with_ocr_backend(None);
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert!(writer
        .elements()
        .contains(&paragraph(OCR_UNAVAILABLE_NOTE)));
}

#[tokio::test]
async fn test_cross_host_redirect_keeps_crawl_on_origin() {
    let server = MockServer::start().await;
    let other = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/", other.uri()).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/about", "<html><body>About</body></html>", 1).await;
    mount_page(
        &other,
        "/",
        r#"<html><body><a href="/about">about</a></body></html>"#,
        1,
    )
    .await;
    mount_never(&other, "/about").await;

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert_eq!(writer.page_count(), 2);
}

#[tokio::test]
async fn test_start_url_with_trailing_slash_fetched_as_given() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/",
        r#"<html><head><title>Docs</title></head><body><a href="guide">guide</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&server, "/docs/guide", "<html><body>Guide</body></html>", 1).await;
    mount_never(&server, "/docs").await;
    mount_never(&server, "/guide").await;

    let config =
        CrawlConfig::new(format!("{}/docs/", server.uri())).with_page_delay(Duration::ZERO);
    let mut crawler = Crawler::new(config).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert_eq!(writer.page_count(), 2);
    assert_eq!(writer.elements()[0], heading(1, "Docs"));
}

#[tokio::test]
async fn test_start_url_query_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/index.php"))
        .and(query_param("page", "about"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>About</title></head><body>Us</body></html>")
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = CrawlConfig::new(format!("{}/index.php?page=about", server.uri()))
        .with_page_delay(Duration::ZERO);
    let mut crawler = Crawler::new(config).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert_eq!(writer.page_count(), 1);
    assert_eq!(writer.elements()[0], heading(1, "About"));
}

#[tokio::test]
async fn test_collected_urls_leave_out_pdfs() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/files/report.pdf">report</a><a href="/next">next</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&server, "/next", "<html><body>Next</body></html>", 1).await;
    mount_never(&server, "/files/report.pdf").await;

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    let urls = crawler.collect_urls().await.unwrap();

    let root = server.uri();
    let urls: Vec<_> = urls.iter().map(|u| u.as_str().to_string()).collect();
    assert_eq!(urls, vec![root.clone(), format!("{}/next", root)]);
}

/// Smallest PDF with one page of Helvetica text that a parser accepts
fn pdf_with_text(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 24 Tf 72 720 Td ({}) Tj ET", text);
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (index, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, object).as_bytes());
    }

    let xref = pdf.len();
    let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        tail.push_str(&format!("{:010} 00000 n \n", offset));
    }
    tail.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref
    ));
    pdf.extend_from_slice(tail.as_bytes());
    pdf
}

#[tokio::test]
async fn test_pdf_text_added_after_page() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><head><title>Docs</title></head><body><a href="/files/guide.pdf">guide</a></body></html>"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/files/guide.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(pdf_with_text("Hello PDF"))
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server).with_pdf(true);
    let mut crawler = Crawler::new(config).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    let elements = writer.elements();
    let section = elements
        .iter()
        .position(|e| *e == heading(2, PDF_SECTION_HEADING))
        .expect("PDF section heading");
    match &elements[section + 1] {
        DocElement::Paragraph(text) => assert!(text.contains("Hello"), "got {:?}", text),
        other => panic!("unexpected element after PDF heading: {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_image_text_recognized() {
    use sitescribe::crawler::TesseractOcr;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("fake-tesseract");
    std::fs::write(&script, "#!/bin/sh\ncat > /dev/null\necho \"Sale 50% off\"\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    let ocr = TesseractOcr::locate(script.to_str().unwrap(), Duration::from_secs(5)).unwrap();

    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><head><title>Gallery</title></head><body><img src="/banner.png"><img src="/logo.svg"></body></html>"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/banner.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"\x89PNG\r\n\x1a\n".to_vec()))
        .expect(1)
        .mount(&server)
        .await;
    mount_never(&server, "/logo.svg").await;

    let config = test_config(&server).with_ocr(true);
    let mut crawler = Crawler::new(config).unwrap().with_ocr_backend(Some(ocr));
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    let elements = writer.elements();
    let section = elements
        .iter()
        .position(|e| *e == heading(2, OCR_SECTION_HEADING))
        .expect("image text section heading");
    assert_eq!(elements[section + 1], paragraph("Sale 50% off"));
    assert!(!elements.contains(&paragraph(OCR_UNAVAILABLE_NOTE)));
}

#[tokio::test]
async fn test_shift_jis_page_decoded() {
    let server = MockServer::start().await;

    let html = "<html><head><title>会社概要</title></head><body><main><p>これは日本語で書かれた会社概要のページです。お問い合わせはこちら。</p></main></body></html>";
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(html);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(bytes.into_owned())
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut crawler = Crawler::new(test_config(&server)).unwrap();
    let writer = crawler.crawl_document(&NoProgress).await.unwrap();

    assert_eq!(writer.elements()[0], heading(1, "会社概要"));
}
