mod controllers;
mod goaffpro;
mod routers;
mod server;
mod storage;
mod types;
mod utilities;

use log::info;
use std::env;
use storage::{mongo, redis};

fn setup_logger() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] [{}] {}",
                chrono::Utc::now().to_rfc3339(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    match setup_logger() {
        Ok(_) => (),
        Err(e) => panic!("Error initializing logger: {}", e),
    };

    env::var("HOST").expect("HOST must be set");
    let port = env::var("PORT").expect("PORT must be set");
    match port.parse::<u16>() {
        Ok(_) => (),
        Err(_) => panic!("PORT must be a number"),
    };

    env::var("MONGO_URI").expect("MONGO_URI must be set");
    env::var("MONGO_DB_NAME").expect("MONGO_DB_NAME must be set");
    env::var("REDIS_URI").expect("REDIS_URI must be set");

    env::var("API_TOKENS_SIGNING_KEY").expect("API_TOKENS_SIGNING_KEY must be set");
    env::var("ADMIN_API_KEY").expect("ADMIN_API_KEY must be set");

    let expiration_time = match env::var("API_TOKENS_EXPIRATION_TIME") {
        Ok(expiration_time) => expiration_time,
        Err(_) => panic!("API_TOKENS_EXPIRATION_TIME not found"),
    };

    match expiration_time.parse::<usize>() {
        Ok(_) => (),
        Err(_) => panic!("API_TOKENS_EXPIRATION_TIME must be a number"),
    };

    let mongo_client = match mongo::init_connection().await {
        Ok(client) => client,
        Err(e) => panic!("Error connecting to MongoDB: {}", e),
    };

    let redis_connection = match redis::init_connection() {
        Ok(redis_connection) => redis_connection,
        Err(e) => panic!("Error connecting to Redis: {}", e),
    };

    info!("Connected to MongoDB");

    server::init(mongo_client, redis_connection).await;
}
