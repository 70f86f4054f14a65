use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::SharedRegistry;
use crate::web::routes::{activities, health};

pub const INDEX_PATH: &str = "/static/index.html";

/// Builds the full application: JSON API, static page and layers.
pub fn build_router(registry: SharedRegistry, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(INDEX_PATH) }))
        .route("/health", get(health::health_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name",
            get(activities::activity_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}
