use crate::server::AppState;
use crate::storage::mongo::{build_customer_filter, find_customer};
use crate::types::customer::GenericResponse;
use crate::types::incoming_requests::SignIn;
use crate::utilities::api_messages::{APIMessages, CustomerMessages, TokenMessages};
use crate::utilities::helpers::{payload_analyzer, valid_email};
use crate::utilities::token::{create_token, validate_token};

use axum::http::HeaderMap;
use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use std::sync::Arc;

use bcrypt::verify;
use redis::{Client, Commands, RedisError};
use serde_json::json;

// util to verify identity before access to a private resource
pub async fn get_user_id_from_req(
    headers: HeaderMap,
    redis_connection: Client,
) -> Result<String, (StatusCode, Json<GenericResponse>)> {
    let token = match headers.get("Authorization") {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(GenericResponse {
                    message: APIMessages::Unauthorized.to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            ))
        }
    };

    let token_string = match token.to_str() {
        Ok(token) => token,
        Err(_) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: APIMessages::Token(TokenMessages::ErrorParsingToken).to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            ))
        }
    };

    match validate_token(token_string) {
        Ok(_) => (),
        Err(_) => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(GenericResponse {
                    message: APIMessages::Unauthorized.to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            ))
        }
    };

    let result = redis_connection
        .clone()
        .get::<String, String>(token_string.to_string());

    let id: String = match result {
        Ok(id) => id,
        Err(err) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: format!("error getting session: {}", err),
                    data: json!({}),
                    exit_code: 1,
                }),
            ))
        }
    };

    if id.is_empty() {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(GenericResponse {
                message: APIMessages::Unauthorized.to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        ));
    }

    Ok(id)
}

pub async fn get_session(
    headers: HeaderMap,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    let customer_id = match get_user_id_from_req(headers, state.redis_connection.clone()).await {
        Ok(customer_id) => customer_id,
        Err((status_code, json)) => return (status_code, json),
    };

    (
        StatusCode::OK,
        Json(GenericResponse {
            message: String::from("authorized"),
            data: json!({
                "customer_id": customer_id,
            }),
            exit_code: 0,
        }),
    )
}

pub async fn request_credentials(
    payload_result: Result<Json<SignIn>, JsonRejection>,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    let payload = match payload_analyzer(payload_result) {
        Ok(payload) => payload,
        Err((status_code, json)) => return (status_code, json),
    };

    match valid_email(&payload.email).await {
        Ok(_) => (),
        Err((status_code, json)) => return (status_code, json),
    };

    let filter = build_customer_filter("", payload.email.to_lowercase().as_str()).await;
    let (found, customer) = match find_customer(&state.mongo_db, filter).await {
        Ok(customer) => customer,
        Err((status_code, json)) => return (status_code, json),
    };

    if !found {
        return (
            StatusCode::NOT_FOUND,
            Json(GenericResponse {
                message: APIMessages::Customer(CustomerMessages::NotFound).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        );
    }

    let customer = customer.unwrap();
    if customer.deleted {
        return (
            StatusCode::UNAUTHORIZED,
            Json(GenericResponse {
                message: APIMessages::Unauthorized.to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        );
    }

    let is_valid = match verify(&payload.password, &customer.password) {
        Ok(is_valid) => is_valid,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: APIMessages::Customer(CustomerMessages::ErrorVerifyingPassword)
                        .to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            )
        }
    };

    if !is_valid {
        return (
            StatusCode::UNAUTHORIZED,
            Json(GenericResponse {
                message: APIMessages::Customer(CustomerMessages::IncorrectPassword).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        );
    }

    let token = match create_token(&customer.id) {
        Ok(token) => token,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: APIMessages::Token(TokenMessages::ErrorCreating).to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            )
        }
    };

    let result: Result<bool, RedisError> =
        state
            .redis_connection
            .clone()
            .set_ex(token.clone(), &customer.id, 86400);

    match result {
        Ok(_) => (),
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: format!("error caching session: {}", err),
                    data: json!({}),
                    exit_code: 1,
                }),
            )
        }
    };

    (
        StatusCode::OK,
        Json(GenericResponse {
            message: String::from("authorized"),
            data: json!({
                "token": token,
            }),
            exit_code: 0,
        }),
    )
}
