use crate::server::AppState;
use crate::storage::options::{load_affiliate_settings, set_option};
use crate::types::customer::GenericResponse;
use crate::types::incoming_requests::UpdateAffiliateSettings;
use crate::utilities::api_messages::{APIMessages, AffiliateMessages, MongoMessages};
use crate::utilities::helpers::payload_analyzer;

use axum::http::{HeaderMap, StatusCode};
use axum::{extract::rejection::JsonRejection, Json};
use mongodb::Database;
use serde_json::json;
use std::env;
use std::sync::Arc;

fn require_admin_key(headers: &HeaderMap) -> Result<(), (StatusCode, Json<GenericResponse>)> {
    let admin_api_key = match env::var("ADMIN_API_KEY") {
        Ok(admin_api_key) => admin_api_key,
        Err(_) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: APIMessages::InternalServerError.to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            ))
        }
    };

    let provided = match headers.get("x-admin-api-key") {
        Some(value) => match value.to_str() {
            Ok(value) => value,
            Err(_) => "",
        },
        None => "",
    };

    if provided.is_empty() || provided != admin_api_key {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(GenericResponse {
                message: APIMessages::Unauthorized.to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        ));
    }

    Ok(())
}

async fn write_option(
    db: &Database,
    name: &str,
    value: &str,
) -> Result<(), (StatusCode, Json<GenericResponse>)> {
    match set_option(db, name, value).await {
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

fn flag_value(enabled: bool) -> &'static str {
    if enabled {
        "1"
    } else {
        "0"
    }
}

pub async fn get_settings(
    headers: HeaderMap,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    match require_admin_key(&headers) {
        Ok(_) => (),
        Err((status_code, json)) => return (status_code, json),
    };

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

    (
        StatusCode::OK,
        Json(GenericResponse {
            message: APIMessages::Affiliate(AffiliateMessages::Settings).to_string(),
            data: json!(settings),
            exit_code: 0,
        }),
    )
}

pub async fn update_settings(
    headers: HeaderMap,
    payload_result: Result<Json<UpdateAffiliateSettings>, JsonRejection>,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    match require_admin_key(&headers) {
        Ok(_) => (),
        Err((status_code, json)) => return (status_code, json),
    };

    let payload = match payload_analyzer(payload_result) {
        Ok(payload) => payload,
        Err((status_code, json)) => return (status_code, json),
    };

    if let Some(api_key) = &payload.api_key {
        match write_option(&state.mongo_db, "goaffpro_api_key", api_key).await {
            Ok(_) => (),
            Err((status_code, json)) => return (status_code, json),
        };
    }

    if let Some(api_secret) = &payload.api_secret {
        match write_option(&state.mongo_db, "goaffpro_api_secret", api_secret).await {
            Ok(_) => (),
            Err((status_code, json)) => return (status_code, json),
        };
    }

    if let Some(show_refer_and_earn) = payload.show_refer_and_earn {
        match write_option(
            &state.mongo_db,
            "goaffpro_show_refer_and_earn",
            flag_value(show_refer_and_earn),
        )
        .await
        {
            Ok(_) => (),
            Err((status_code, json)) => return (status_code, json),
        };
    }

    if let Some(add_name_fields) = payload.add_name_fields_to_registration {
        match write_option(
            &state.mongo_db,
            "goaffpro_add_name_fields_to_registration",
            flag_value(add_name_fields),
        )
        .await
        {
            Ok(_) => (),
            Err((status_code, json)) => return (status_code, json),
        };
    }

    if let Some(attach_api_credentials) = payload.attach_api_credentials {
        match write_option(
            &state.mongo_db,
            "goaffpro_attach_api_credentials",
            flag_value(attach_api_credentials),
        )
        .await
        {
            Ok(_) => (),
            Err((status_code, json)) => return (status_code, json),
        };
    }

    if let Some(skip_if_already_linked) = payload.skip_if_already_linked {
        match write_option(
            &state.mongo_db,
            "goaffpro_skip_if_already_linked",
            flag_value(skip_if_already_linked),
        )
        .await
        {
            Ok(_) => (),
            Err((status_code, json)) => return (status_code, json),
        };
    }

    if let Some(referral_base) = &payload.referral_base {
        match write_option(&state.mongo_db, "goaffpro_referral_base", referral_base).await {
            Ok(_) => (),
            Err((status_code, json)) => return (status_code, json),
        };
    }

    if let Some(api_base) = &payload.api_base {
        match write_option(&state.mongo_db, "goaffpro_api_base", api_base).await {
            Ok(_) => (),
            Err((status_code, json)) => return (status_code, json),
        };
    }

    (
        StatusCode::OK,
        Json(GenericResponse {
            message: APIMessages::Affiliate(AffiliateMessages::SettingsUpdated).to_string(),
            data: json!({}),
            exit_code: 0,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_serialize_like_checkbox_options() {
        assert_eq!(flag_value(true), "1");
        assert_eq!(flag_value(false), "0");
    }
}
