//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the site for `/` and, through the fallback handler,
//! for every unknown path. The hydration bundle is served from `/pkg`, and
//! `/healthz` answers load balancer probes.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use axum::response::Response;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Routes that do not depend on the Leptos build output.
pub fn base_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthz", get(healthz))
}

/// Full site: SSR pages, static bundle, health check, request tracing.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(with_layers(site_routes(conf.leptos_options), config))
}

/// SSR routes, the page fallback, `/pkg`, and `/healthz` for `leptos_options`.
pub fn site_routes(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(site_fallback)
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
}

/// Serve a file from the site root, or render the site.
///
/// The site answers every page-like path with Home, so a rendered shell for
/// a path without a file extension is a normal page and gets `200`. Missing
/// assets keep their `404`.
async fn site_fallback(uri: Uri, State(options): State<LeptosOptions>, req: Request<Body>) -> Response {
    let is_page = is_page_path(uri.path());
    let handler = file_and_error_handler(client::app::shell);
    let mut res = handler(uri, State(options), req).await;
    if is_page && res.status() == StatusCode::NOT_FOUND {
        *res.status_mut() = StatusCode::OK;
    }
    res
}

/// `true` when the last path segment has no file extension.
fn is_page_path(path: &str) -> bool {
    path.rsplit('/').next().is_none_or(|segment| !segment.contains('.'))
}

/// Apply compression (when enabled) and request tracing.
pub fn with_layers(app: Router, config: &ServerConfig) -> Router {
    let app = if config.compression { app.layer(CompressionLayer::new()) } else { app };
    app.layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
