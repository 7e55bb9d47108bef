mod handlers;

pub use handlers::{DashboardBody, DashboardQuery, LaunchPage, LaunchesQuery, YearBounds};

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::dataset::Dataset;

pub fn create_router(dataset: Dataset, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/dataset", get(handlers::get_dataset_info))
        .route("/options", get(handlers::get_options))
        .route(
            "/dashboard",
            get(handlers::get_dashboard).post(handlers::post_dashboard),
        )
        .route("/kpis", get(handlers::get_kpis))
        .route("/charts/{chart}", get(handlers::get_chart))
        .route("/launches", get(handlers::list_launches))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config.cors_origins.as_deref())),
        )
        .with_state(dataset)
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
