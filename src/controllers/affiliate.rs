use crate::goaffpro::sync::{
    sync_affiliate_account, sync_error_user_message, AffiliateNameSource, AffiliateSyncError,
    AffiliateSyncRequest,
};
use crate::server::AppState;
use crate::storage::mongo::{build_customer_filter, find_customer};
use crate::storage::options::load_affiliate_settings;
use crate::types::customer::GenericResponse;
use crate::types::goaffpro::{AffiliateActionData, AffiliateActionResponse, AffiliateApiError};
use crate::utilities::api_messages::{APIMessages, AffiliateMessages, CustomerMessages};

use super::identity::get_user_id_from_req;

use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

fn affiliate_action_error(
    status_code: StatusCode,
    message: String,
) -> (StatusCode, Json<AffiliateActionResponse>) {
    (
        status_code,
        Json(AffiliateActionResponse {
            success: false,
            data: AffiliateActionData { message },
        }),
    )
}

pub async fn create_affiliate_account(
    headers: HeaderMap,
    state: Arc<AppState>,
) -> (StatusCode, Json<AffiliateActionResponse>) {
    // the target customer always comes from the session, never from the request
    let customer_id = match get_user_id_from_req(headers, state.redis_connection.clone()).await {
        Ok(customer_id) => customer_id,
        Err((status_code, json)) => return affiliate_action_error(status_code, json.0.message),
    };

    let sync_request = AffiliateSyncRequest {
        customer_id,
        name_source: AffiliateNameSource::Meta,
        submitted_password: None,
    };

    // detached task: a dropped connection must not cancel the upstream call
    let task_state = Arc::clone(&state);
    let sync_task =
        tokio::spawn(async move { sync_affiliate_account(&task_state, sync_request).await });

    let sync_result = match sync_task.await {
        Ok(sync_result) => sync_result,
        Err(_) => {
            return affiliate_action_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                APIMessages::InternalServerError.to_string(),
            )
        }
    };

    match sync_result {
        Ok(_affiliate_id) => (
            StatusCode::OK,
            Json(AffiliateActionResponse {
                success: true,
                data: AffiliateActionData {
                    message: APIMessages::Affiliate(AffiliateMessages::AccountCreated).to_string(),
                },
            }),
        ),
        Err(error) => {
            let status_code = match &error {
                AffiliateSyncError::CustomerNotFound => StatusCode::NOT_FOUND,
                AffiliateSyncError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                AffiliateSyncError::Api(AffiliateApiError::Rejected(_)) => StatusCode::BAD_REQUEST,
                AffiliateSyncError::Api(_) => StatusCode::BAD_GATEWAY,
            };

            affiliate_action_error(status_code, sync_error_user_message(&error))
        }
    }
}

pub async fn refer_and_earn(
    headers: HeaderMap,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    let settings = match load_affiliate_settings(&state.mongo_db).await {
        Ok(settings) => settings,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: APIMessages::InternalServerError.to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            )
        }
    };

    // the tab does not exist unless the admin enabled it
    if !settings.show_refer_and_earn {
        return (
            StatusCode::NOT_FOUND,
            Json(GenericResponse {
                message: APIMessages::Affiliate(AffiliateMessages::ReferAndEarnDisabled)
                    .to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        );
    }

    let customer_id = match get_user_id_from_req(headers, state.redis_connection.clone()).await {
        Ok(customer_id) => customer_id,
        Err((status_code, json)) => return (status_code, json),
    };

    let filter = build_customer_filter(customer_id.as_str(), "").await;
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
    match customer.meta.get("goaffpro_affiliate_id") {
        Some(affiliate_id) if !affiliate_id.is_empty() => {
            let referral_link = format!("{}?ref={}", settings.referral_base, affiliate_id);
            (
                StatusCode::OK,
                Json(GenericResponse {
                    message: APIMessages::Affiliate(AffiliateMessages::ReferralLink).to_string(),
                    data: json!({
                        "affiliate_id": affiliate_id,
                        "referral_link": referral_link,
                    }),
                    exit_code: 0,
                }),
            )
        }
        _ => (
            StatusCode::OK,
            Json(GenericResponse {
                message: APIMessages::Affiliate(AffiliateMessages::NoAccountYet).to_string(),
                data: json!({}),
                exit_code: 0,
            }),
        ),
    }
}
