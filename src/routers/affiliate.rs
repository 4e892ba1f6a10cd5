use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::BoxError;
use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::affiliate::{create_affiliate_account, refer_and_earn};
use crate::server::AppState;
use std::{sync::Arc, time::Duration};

use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

// /api/affiliate
pub async fn get_affiliate_router(app_state: Arc<AppState>) -> Router<Arc<AppState>> {
    return Router::new()
        .route(
            "/account",
            post({
                let app_state = Arc::clone(&app_state);
                move |headers| create_affiliate_account(headers, app_state)
            }),
        )
        .route(
            "/refer-and-earn",
            get({
                let app_state = Arc::clone(&app_state);
                move |headers| refer_and_earn(headers, app_state)
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
