use crate::types::customer::GenericResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    Json,
};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use regex::Regex;
use serde_json::json;

use super::api_messages::{APIMessages, EmailMessages, InputMessages};

pub fn payload_analyzer<T>(
    payload_result: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, (StatusCode, Json<GenericResponse>)> {
    let payload = match payload_result {
        Ok(payload) => payload,
        Err(err) => {
            let message = format!("invalid.payload: {}", err);
            let json = Json(GenericResponse {
                message,
                data: json!({}),
                exit_code: 1,
            });

            return Err((StatusCode::BAD_REQUEST, json));
        }
    };

    Ok(payload)
}

pub async fn fallback(uri: Uri) -> (StatusCode, Json<GenericResponse>) {
    let message = format!("invalid.endpoint.{}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(GenericResponse {
            message,
            data: json!({}),
            exit_code: 1,
        }),
    )
}

pub async fn random_string(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

pub async fn valid_email(email: &String) -> Result<bool, (StatusCode, Json<GenericResponse>)> {
    if email.len() < 5 || email.len() > 100 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(GenericResponse {
                message: APIMessages::Email(EmailMessages::Invalid).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        ));
    }

    let re = Regex::new(r"^([a-z0-9_+]([a-z0-9_+.]*[a-z0-9_+])?)@([a-z0-9]+([\-\.]{1}[a-z0-9]+)*\.[a-z]{2,6})").unwrap();
    if !re.is_match(email.as_str()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(GenericResponse {
                message: APIMessages::Email(EmailMessages::Invalid).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        ));
    };

    Ok(true)
}

pub async fn valid_password(password: &String) -> Result<bool, (StatusCode, Json<GenericResponse>)> {
    if password.len() < 8 || password.len() > 100 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(GenericResponse {
                message: APIMessages::Input(InputMessages::InvalidPasswordLength).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        ));
    }

    let re = Regex::new(r"^[a-zA-Z0-9_]{8,20}$").unwrap();
    if !re.is_match(password.as_str()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(GenericResponse {
                message: APIMessages::Input(InputMessages::PasswordMustHaveAtLeastOneLetterAndOneNumber).to_string(),
                data: json!({}),
                exit_code: 1,
            }),
        ));
    };

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn random_string_has_requested_length() {
        let value = random_string(24).await;
        assert_eq!(value.len(), 24);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn accepts_well_formed_email() {
        assert!(valid_email(&String::from("jane.doe@example.com")).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        assert!(valid_email(&String::from("not-an-email")).await.is_err());
        assert!(valid_email(&String::from("a@b")).await.is_err());
    }

    #[tokio::test]
    async fn rejects_short_password() {
        assert!(valid_password(&String::from("short")).await.is_err());
    }

    #[tokio::test]
    async fn accepts_simple_password() {
        assert!(valid_password(&String::from("hunter2_secret")).await.is_ok());
    }
}
