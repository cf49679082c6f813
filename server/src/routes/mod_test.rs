use axum::http::header;
use leptos::config::LeptosOptions;
use tower::ServiceExt;

use super::*;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = with_layers(base_routes(), &ServerConfig::default());
    let res = app.oneshot(get_request("/healthz")).await.expect("response");
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn base_routes_do_not_answer_other_paths() {
    let res = base_routes::<()>().oneshot(get_request("/careers")).await.expect("response");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn disabled_compression_leaves_body_unencoded() {
    let config = ServerConfig { compression: false, ..ServerConfig::default() };
    let req = Request::builder()
        .uri("/healthz")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .expect("request");
    let res = with_layers(base_routes(), &config).oneshot(req).await.expect("response");
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::CONTENT_ENCODING).is_none());
}

// =============================================================================
// Site routes
// =============================================================================

fn test_site() -> Router {
    let options = LeptosOptions::builder().output_name("callcenter-site").build();
    site_routes(options)
}

async fn body_text(res: Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.expect("body");
    String::from_utf8_lossy(&bytes).into_owned()
}

#[tokio::test]
async fn root_renders_site_shell() {
    let res = test_site().oneshot(get_request("/")).await.expect("response");
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("CallCenter Pro"), "shell missing company name");
}

#[tokio::test]
async fn unknown_page_paths_render_site_with_ok() {
    for path in ["/careers", "/blog/x"] {
        let res = test_site().oneshot(get_request(path)).await.expect("response");
        assert_eq!(res.status(), StatusCode::OK, "status for {path}");
        let html = body_text(res).await;
        assert!(html.contains("CallCenter Pro"), "shell missing for {path}");
    }
}

#[tokio::test]
async fn missing_asset_stays_not_found() {
    let res = test_site().oneshot(get_request("/missing-logo.png")).await.expect("response");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn site_routes_keep_healthz() {
    let res = test_site().oneshot(get_request("/healthz")).await.expect("response");
    assert_eq!(res.status(), StatusCode::OK);
}

#[test]
fn page_paths_have_no_extension() {
    assert!(is_page_path("/"));
    assert!(is_page_path("/careers"));
    assert!(is_page_path("/blog/x"));
    assert!(!is_page_path("/favicon.svg"));
    assert!(!is_page_path("/img/logo.png"));
}
