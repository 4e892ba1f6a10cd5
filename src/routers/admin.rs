use axum::error_handling::HandleErrorLayer;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::BoxError;
use axum::{
    routing::{get, put},
    Json, Router,
};

use crate::controllers::settings::{get_settings, update_settings};
use crate::server::AppState;
use crate::types::incoming_requests::UpdateAffiliateSettings;
use std::{sync::Arc, time::Duration};

use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

// /api/admin
pub async fn get_admin_router(app_state: Arc<AppState>) -> Router<Arc<AppState>> {
    return Router::new()
        .route(
            "/settings",
            get({
                let app_state = Arc::clone(&app_state);
                move |headers| get_settings(headers, app_state)
            }),
        )
        .route(
            "/settings",
            put({
                let app_state = Arc::clone(&app_state);
                move |(headers, payload): (
                    HeaderMap,
                    Result<Json<UpdateAffiliateSettings>, JsonRejection>,
                )| { update_settings(headers, payload, app_state) }
            }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unhandled error: {}", err),
                    )
                }))
                .layer(BufferLayer::new(32))
                .layer(RateLimitLayer::new(15, Duration::from_secs(60))),
        );
}
