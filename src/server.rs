use crate::routers::admin::get_admin_router;
use crate::routers::affiliate::get_affiliate_router;
use crate::routers::customers::get_customers_router;
use crate::routers::identity::get_identity_router;
use crate::utilities::helpers::fallback;

use axum::{http::Method, Router};
use log::{error, info};
use mongodb::{Client as MongoClient, Database};
use redis::Client as RedisClient;
use std::{env, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

#[derive(Clone)]
pub struct AppState {
    pub mongodb_client: MongoClient,
    pub redis_connection: RedisClient,
    pub mongo_db: Database,
}

pub async fn init(mongodb_client: MongoClient, redis_client: RedisClient) {
    let mongo_db_name = match env::var("MONGO_DB_NAME") {
        Ok(db) => db,
        Err(_) => panic!("MONGO_DB_NAME not found"),
    };

    let mongo_db = mongodb_client.database(&mongo_db_name);

    let app_state = Arc::new(AppState {
        mongodb_client: mongodb_client.clone(),
        redis_connection: redis_client.clone(),
        mongo_db,
    });

    let api = Router::new()
        .nest(
            "/customers",
            get_customers_router(Arc::clone(&app_state)).await,
        )
        .nest(
            "/identity",
            get_identity_router(Arc::clone(&app_state)).await,
        )
        .nest(
            "/affiliate",
            get_affiliate_router(Arc::clone(&app_state)).await,
        )
        .nest("/admin", get_admin_router(Arc::clone(&app_state)).await);

    let cors = CorsLayer::new()
        .allow_credentials(false)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_origin(Any);

    let app = Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(CompressionLayer::new())
        .fallback(fallback)
        .with_state(app_state);

    let host = env::var("HOST").unwrap_or_else(|_| String::from("0.0.0.0"));
    let port = env::var("PORT").unwrap_or_else(|_| String::from("3000"));
    let address = format!("{}:{}", host, port);

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => panic!("Error binding {}: {}", address, e),
    };

    info!("Server running on {}", address);
    match axum::serve(listener, app).await {
        Ok(_) => (),
        Err(e) => error!("Error running server: {}", e),
    };
}
