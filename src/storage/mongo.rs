use axum::{http::StatusCode, Json};
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};
use serde_json::json;
use std::env;

use crate::types::customer::{Customer, GenericResponse};
use crate::utilities::api_messages::{APIMessages, MongoMessages};

pub async fn init_connection() -> mongodb::error::Result<Client> {
    let uri = match env::var("MONGO_URI") {
        Ok(uri) => uri,
        Err(_) => String::from("mongo_uri not found"),
    };

    let mut client_options = ClientOptions::parse(&uri).await?;

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    client
        .database("admin")
        .run_command(doc! {"ping": 1}, None)
        .await?;

    Ok(client)
}

pub async fn build_customer_filter(id: &str, email: &str) -> Document {
    doc! {"$or": [
        {"id": id},
        {"email": email},
    ]}
}

pub async fn find_customer(
    db: &Database,
    filter: Document,
) -> Result<(bool, Option<Customer>), (StatusCode, Json<GenericResponse>)> {
    let collection: Collection<Customer> = db.collection("customers");
    match collection.find_one(filter, None).await {
        Ok(Some(customer)) => Ok((true, Some(customer))),
        Ok(None) => Ok((false, None)),
        Err(_) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(GenericResponse {
                message: APIMessages::Mongo(MongoMessages::ErrorFinding).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        )),
    }
}

pub async fn update_customer(
    db: &Database,
    filter: Document,
    update: Document,
) -> Result<(), (StatusCode, Json<GenericResponse>)> {
    let collection: Collection<Customer> = db.collection("customers");
    match collection.update_one(filter, update, None).await {
        Ok(_) => Ok(()),
        Err(_) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(GenericResponse {
                message: APIMessages::Mongo(MongoMessages::ErrorUpdating).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        )),
    }
}
