use crate::goaffpro::sync::{
    sync_affiliate_account, AffiliateNameSource, AffiliateSyncRequest,
};
use crate::server::AppState;
use crate::storage::mongo::{build_customer_filter, find_customer};
use crate::storage::options::load_affiliate_settings;
use crate::types::customer::{Customer, GenericResponse};
use crate::types::incoming_requests::CreateCustomerRecord;
use crate::types::settings::AffiliateSettings;
use crate::utilities::api_messages::{
    APIMessages, CustomerMessages, EmailMessages, InputMessages, MongoMessages,
};
use crate::utilities::helpers::{payload_analyzer, random_string, valid_email, valid_password};

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use chrono::Utc;
use log::error;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use bcrypt::{hash, DEFAULT_COST};

use mongodb::Collection;

pub async fn create_customer_record(
    payload_result: Result<Json<CreateCustomerRecord>, JsonRejection>,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    let payload = match payload_analyzer(payload_result) {
        Ok(payload) => payload,
        Err((status_code, json)) => return (status_code, json),
    };

    if !payload.accepted_terms {
        return (
            StatusCode::BAD_REQUEST,
            Json(GenericResponse {
                message: APIMessages::Customer(CustomerMessages::NotAcceptedTerms).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        );
    }

    match valid_email(&payload.email).await {
        Ok(_) => (),
        Err((status_code, json)) => return (status_code, json),
    };

    match valid_password(&payload.password).await {
        Ok(_) => (),
        Err((status_code, json)) => return (status_code, json),
    };

    if payload.password != payload.password_confirmation {
        return (
            StatusCode::BAD_REQUEST,
            Json(GenericResponse {
                message: APIMessages::Input(InputMessages::PasswordConfirmationMustMatch)
                    .to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        );
    }

    if payload.email.to_lowercase() == payload.password.to_lowercase() {
        return (
            StatusCode::BAD_REQUEST,
            Json(GenericResponse {
                message: APIMessages::Email(EmailMessages::EmailAndPasswordMustBeDifferent)
                    .to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        );
    }

    let filter = build_customer_filter("", payload.email.to_lowercase().as_str()).await;
    let (found, _) = match find_customer(&state.mongo_db, filter).await {
        Ok(customer) => customer,
        Err((status_code, json)) => return (status_code, json),
    };

    if found {
        return (
            StatusCode::BAD_REQUEST,
            Json(GenericResponse {
                message: APIMessages::Email(EmailMessages::Taken).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        );
    }

    let hashed_password = match hash(&payload.password, DEFAULT_COST) {
        Ok(hashed_password) => hashed_password,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: APIMessages::Customer(CustomerMessages::ErrorHashingPassword)
                        .to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            )
        }
    };

    // a broken options store must not block registration
    let settings = match load_affiliate_settings(&state.mongo_db).await {
        Ok(settings) => settings,
        Err(err) => {
            error!("error loading affiliate settings during registration: {}", err);
            AffiliateSettings::default()
        }
    };

    let first_name = payload.first_name.clone().unwrap_or_default();
    let last_name = payload.last_name.clone().unwrap_or_default();

    let mut meta: HashMap<String, String> = HashMap::new();
    if settings.add_name_fields_to_registration {
        meta.insert(String::from("goaffpro_first_name"), first_name.clone());
        meta.insert(String::from("goaffpro_last_name"), last_name.clone());
    }

    let current_datetime = Utc::now();
    let iso8601_string = current_datetime.to_rfc3339();

    let id = random_string(30).await;
    let customer = Customer {
        id: id.clone(),
        email: payload.email.to_lowercase(),
        first_name,
        last_name,
        password: hashed_password,
        meta,
        created_at: iso8601_string.clone(),
        updated_at: iso8601_string,
        deleted: false,
    };

    let collection: Collection<Customer> = state.mongo_db.collection("customers");
    match collection.insert_one(customer, None).await {
        Ok(_) => (),
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: APIMessages::Mongo(MongoMessages::ErrorInserting).to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            )
        }
    }

    let sync_request = if settings.add_name_fields_to_registration {
        AffiliateSyncRequest {
            customer_id: id.clone(),
            name_source: AffiliateNameSource::Meta,
            submitted_password: Some(payload.password.clone()),
        }
    } else {
        AffiliateSyncRequest {
            customer_id: id.clone(),
            name_source: AffiliateNameSource::Profile,
            submitted_password: None,
        }
    };

    // best-effort: the affiliate sync never blocks or fails the registration
    let task_state = Arc::clone(&state);
    let task_customer_id = id.clone();
    tokio::spawn(async move {
        match sync_affiliate_account(&task_state, sync_request).await {
            Ok(_) => (),
            Err(err) => error!(
                "goaffpro account creation failed for customer {}: {}",
                task_customer_id,
                err.to_string()
            ),
        }
    });

    (
        StatusCode::CREATED,
        Json(GenericResponse {
            message: APIMessages::Customer(CustomerMessages::Created).to_string(),
            data: json!({"id": id}),
            exit_code: 0,
        }),
    )
}
