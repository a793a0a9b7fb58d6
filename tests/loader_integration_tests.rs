use ddeum::core::state::Page;
use ddeum::core::transform::TransformSettings;
use ddeum::core::view::{Target, View};
use ddeum::html;
use ddeum::sheets::{self, FetchError, HttpSheetSource, SheetSource};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// A page whose three containers point at `base`.
fn page_for(base: &str) -> Page {
    Page::new(
        format!("{base}/metrics.csv"),
        format!("{base}/names.csv"),
        format!("{base}/universities.csv"),
        TransformSettings::default(),
        40,
    )
}

async fn mount_csv(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/csv; charset=utf-8")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

/// Nothing listens on port 1, so connecting fails immediately.
const UNREACHABLE: &str = "http://127.0.0.1:1";

// ============================================================================
// HttpSheetSource
// ============================================================================

#[tokio::test]
async fn test_fetch_sends_no_store_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/names.csv"))
        .and(header("cache-control", "no-store"))
        .and(header("pragma", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_string("이름\n김민지\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = HttpSheetSource::new();
    let body = assert_ok!(
        source
            .fetch_csv(&format!("{}/names.csv", mock_server.uri()))
            .await
    );
    assert_eq!(body, "이름\n김민지\n");
}

#[tokio::test]
async fn test_fetch_non_success_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics.csv"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let source = HttpSheetSource::new();
    let err = assert_err!(
        source
            .fetch_csv(&format!("{}/metrics.csv", mock_server.uri()))
            .await
    );
    assert_eq!(
        err,
        FetchError::Status {
            status: 500,
            body: "boom".to_string()
        }
    );
    assert_eq!(err.to_string(), "Network response was not ok: 500");
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() {
    let source = HttpSheetSource::new();
    let result = source.fetch_csv(&format!("{UNREACHABLE}/names.csv")).await;
    assert!(matches!(result, Err(FetchError::Network(_))));
}

// ============================================================================
// End-to-end load cycle
// ============================================================================

#[tokio::test]
async fn test_load_all_renders_three_containers() {
    let mock_server = MockServer::start().await;
    mount_csv(
        &mock_server,
        "/metrics.csv",
        "항목,값\r\n응시자 수,320\r\n합격자,41\r\n",
    )
    .await;
    mount_csv(
        &mock_server,
        "/names.csv",
        "이름\n김민지\n이서준\n박하은\n최도윤\n정우진\n",
    )
    .await;
    mount_csv(
        &mock_server,
        "/universities.csv",
        "대학명\n\"한국예술종합학교, 연극원\"\n서울대\n서울대\n",
    )
    .await;

    let mut page = page_for(&mock_server.uri());
    sheets::load_all(&mut page, &HttpSheetSource::new()).await;

    let View::Metrics(cards) = &page.metrics.view else {
        panic!("expected metrics, got {:?}", page.metrics.view);
    };
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].label, "응시자 수");

    let View::Names(names) = &page.names.view else {
        panic!("expected names, got {:?}", page.names.view);
    };
    let half = names.len() / 2;
    assert_eq!(names[..half], names[half..]);
    assert_eq!(names[0], "김민지");
    assert!(page.names.shift.is_some());

    assert_eq!(
        page.universities.view,
        View::Universities(vec![
            "한국예술종합학교, 연극원".to_string(),
            "서울대".to_string(),
            "서울대".to_string(),
        ])
    );

    let rendered = html::render_page(&page);
    assert!(rendered.contains(r#"<div id="dtmMetricsGrid""#));
    assert!(rendered.contains("--shift:"));
    assert!(rendered.contains("<li>한국예술종합학교, 연극원</li>"));
}

#[tokio::test]
async fn test_network_failure_renders_failure_for_every_container() {
    let mut page = page_for(UNREACHABLE);
    sheets::load_all(&mut page, &HttpSheetSource::new()).await;

    for target in Target::ALL {
        let view = &page.container(target).view;
        let text = view
            .placeholder()
            .unwrap_or_else(|| panic!("{target} should show a placeholder"));
        assert!(text.contains("실패"), "{target}: {text}");
        assert!(text.contains("network error"), "{target}: {text}");
    }
}

#[tokio::test]
async fn test_empty_sheets_render_no_data() {
    let mock_server = MockServer::start().await;
    mount_csv(&mock_server, "/metrics.csv", "Label,Value\n").await;
    mount_csv(&mock_server, "/names.csv", "이름\n").await;
    mount_csv(&mock_server, "/universities.csv", "").await;

    let mut page = page_for(&mock_server.uri());
    sheets::load_all(&mut page, &HttpSheetSource::new()).await;

    for target in Target::ALL {
        assert_eq!(page.container(target).view, View::Empty, "{target}");
    }
    assert!(html::render_page(&page).contains("데이터가 없습니다."));
}

#[tokio::test]
async fn test_reload_replaces_previous_content() {
    let mock_server = MockServer::start().await;
    mount_csv(&mock_server, "/metrics.csv", "합격자,41\n").await;
    mount_csv(&mock_server, "/names.csv", "이름\n김민지\n").await;

    // First cycle: universities sheet has content.
    Mock::given(method("GET"))
        .and(path("/universities.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("서울대\n"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    // Second cycle: it has been emptied.
    mount_csv(&mock_server, "/universities.csv", "대학\n").await;

    let mut page = page_for(&mock_server.uri());
    let source = HttpSheetSource::new();

    sheets::load_all(&mut page, &source).await;
    assert_eq!(
        page.universities.view,
        View::Universities(vec!["서울대".to_string()])
    );
    assert_eq!(page.universities.latest_token(), 1);

    sheets::load_all(&mut page, &source).await;
    assert_eq!(page.universities.view, View::Empty);
    assert_eq!(page.universities.latest_token(), 2);
}
