mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::util::ServiceExt;

use playlist_insights::{web, PlaylistAnalyzer};

use common::{FixtureCatalog, PLAYLIST_ID};

fn app(catalog: FixtureCatalog) -> axum::Router {
    let analyzer = PlaylistAnalyzer::new(Arc::new(catalog), 4);
    web::build_router(web::AppState::new(analyzer))
}

fn analyze_request(playlist_url: &str) -> Request<Body> {
    let body = format!("playlist_url={}", url::form_urlencoded::byte_serialize(playlist_url.as_bytes()).collect::<String>());
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_serves_form() {
    let response = app(FixtureCatalog::default())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("name=\"playlist_url\""));
}

#[tokio::test]
async fn test_analyze_returns_report_page() {
    let url = format!("https://open.spotify.com/playlist/{}?si=xyz", PLAYLIST_ID);
    let response = app(FixtureCatalog::three_tracks())
        .oneshot(analyze_request(&url))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Neon Nights"));
    assert!(html.contains("Plotly.newPlot"));
    assert!(html.contains("<h2>Genre Distribution</h2>"));
    assert!(html.contains(PLAYLIST_ID));
}

#[tokio::test]
async fn test_malformed_url_is_bad_request() {
    let response = app(FixtureCatalog::three_tracks())
        .oneshot(analyze_request("https://open.spotify.com/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Could not analyze playlist"));
}

#[tokio::test]
async fn test_empty_form_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::empty())
        .unwrap();

    let response = app(FixtureCatalog::three_tracks()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let mut catalog = FixtureCatalog::three_tracks();
    catalog.fail_playlist = true;

    let response = app(catalog).oneshot(analyze_request(PLAYLIST_ID)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_missing_features_is_unprocessable() {
    let mut catalog = FixtureCatalog::three_tracks();
    catalog.features.clear();

    let response = app(catalog).oneshot(analyze_request(PLAYLIST_ID)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_check() {
    let response = app(FixtureCatalog::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "playlist-insights");
}
