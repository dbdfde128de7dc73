use std::time::Duration;

use pretty_assertions::assert_eq;
use tct_catalog::{CatalogPage, ErrorKind, FeatureCatalogClient, LoadState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEATURES_PATH: &str = "/team-comm-tools-features/team-comm-tools";

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEATURES_PATH))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), FEATURES_PATH)
}

#[tokio::test]
async fn single_feature_renders_one_row() {
    let server = serve(ResponseTemplate::new(200).set_body_raw(
        r#"{"feature_x": {"description": "desc", "columns": ["c1","c2"], "level": "utterance"}}"#,
        "application/json",
    ))
    .await;

    let mut page = CatalogPage::new(FeatureCatalogClient::with_endpoint(endpoint(&server)));
    page.load().await;

    let table = page.render();
    assert_eq!(table.len(), 1);
    let row = &table.rows()[0];
    assert_eq!(
        row.cells(),
        ["feature_x", "desc", "c1, c2", "", "utterance", "", "", ""]
    );
    assert!(row.wiki_link.is_inert());
}

#[tokio::test]
async fn empty_object_renders_header_only() {
    let server = serve(ResponseTemplate::new(200).set_body_raw("{}", "application/json")).await;

    let mut page = CatalogPage::new(FeatureCatalogClient::with_endpoint(endpoint(&server)));
    let state = page.load().await;
    assert!(matches!(state, LoadState::Loaded(catalog) if catalog.is_empty()));

    let html = page.render().to_html();
    assert!(html.contains("<th>Wiki Link</th>"));
    assert!(!html.contains("<td"));
}

#[tokio::test]
async fn timeout_renders_header_only() {
    let server = serve(
        ResponseTemplate::new(200)
            .set_body_raw("{}", "application/json")
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let http = tct_common::create_client_with_timeout(Duration::from_millis(200)).unwrap();
    let client = FeatureCatalogClient::with_client(http, endpoint(&server));
    let mut page = CatalogPage::new(client);
    page.load().await;

    let failure = page.state().failure().expect("timeout should fail the load");
    assert_eq!(failure.kind, ErrorKind::Transport);
    assert!(page.render().is_empty());
}

#[tokio::test]
async fn malformed_body_renders_header_only() {
    let server =
        serve(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>")).await;

    let mut page = CatalogPage::new(FeatureCatalogClient::with_endpoint(endpoint(&server)));
    page.load().await;

    assert_eq!(page.state().failure().map(|f| f.kind), Some(ErrorKind::Parse));
    assert!(page.render().is_empty());
}

#[tokio::test]
async fn exactly_one_request_per_mount() {
    let server = serve(ResponseTemplate::new(200).set_body_raw("{}", "application/json")).await;

    let mut page = CatalogPage::new(FeatureCatalogClient::with_endpoint(endpoint(&server)));
    page.load().await;
    page.load().await;
    let _ = page.render();
    let _ = page.render();

    // `expect(1)` is verified when the server drops.
    drop(server);
}
