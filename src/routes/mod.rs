use std::{sync::Arc, time::Duration};

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorError,
    GovernorLayer,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    config::CorsOrigin,
    consts::rsvp_const::{MAX_BODY_BYTES, RATE_LIMIT_BURST, RATE_LIMIT_REPLENISH_SECS},
    models::response::ApiResponse,
    routes::{health::healthz, rsvp::submit_rsvp},
    state::AppState,
};

pub mod health;
pub mod rsvp;

pub fn rsvp_router(state: AppState) -> Router<AppState> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(RATE_LIMIT_REPLENISH_SECS)
            .burst_size(RATE_LIMIT_BURST)
            .key_extractor(SmartIpKeyExtractor)
            .error_handler(rate_limit_error)
            .finish()
            .unwrap(),
    );
    let governor_limiter = governor_conf.limiter().clone();
    let interval = Duration::from_secs(60);
    // a separate background task to clean up idle per-IP entries
    std::thread::spawn(move || loop {
        std::thread::sleep(interval);
        tracing::debug!("rate limiting storage size: {}", governor_limiter.len());
        governor_limiter.retain_recent();
    });

    Router::new()
        .route("/api/rsvp", post(submit_rsvp))
        .route_layer(GovernorLayer {
            config: governor_conf,
        })
        .route("/healthz", get(healthz))
        .layer(cors_layer(&state.config.cors_origin))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

fn rate_limit_error(err: GovernorError) -> Response {
    match err {
        GovernorError::TooManyRequests { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ApiResponse::error("Rate limit exceeded")),
        )
            .into_response(),
        GovernorError::UnableToExtractKey | GovernorError::Other { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Internal server error")),
        )
            .into_response(),
    }
}

fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    match origin {
        CorsOrigin::Any => cors.allow_origin(Any),
        CorsOrigin::List(origins) => cors.allow_origin(
            origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ),
    }
}
