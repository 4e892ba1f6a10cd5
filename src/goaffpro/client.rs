use std::time::Duration;

use crate::types::goaffpro::{
    AffiliateApiError, RegisterAffiliateRequest, RegisterAffiliateResponse,
};
use crate::types::settings::AffiliateSettings;

const REGISTER_PATH: &str = "/v1/sdk/user/register";

// upstream imposes no timeout, so the request carries a bounded one
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct AffiliateClient {
    http_client: reqwest::Client,
    api_base: String,
    api_key: String,
    api_secret: String,
    attach_api_credentials: bool,
}

impl AffiliateClient {
    pub fn new(settings: &AffiliateSettings) -> Result<AffiliateClient, AffiliateApiError> {
        let http_client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(http_client) => http_client,
            Err(err) => return Err(AffiliateApiError::Transport(err.to_string())),
        };

        Ok(AffiliateClient {
            http_client,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            api_secret: settings.api_secret.clone(),
            attach_api_credentials: settings.attach_api_credentials,
        })
    }

    // one POST, no retries; retry policy belongs to the caller
    pub async fn register_affiliate(
        &self,
        name: &String,
        email: &String,
        password: &String,
    ) -> Result<String, AffiliateApiError> {
        let register_request = RegisterAffiliateRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };

        let json_body = match serde_json::to_value(&register_request) {
            Ok(json_body) => json_body,
            Err(err) => return Err(AffiliateApiError::Protocol(err.to_string())),
        };

        let mut request = self
            .http_client
            .post(format!("{}{}", self.api_base, REGISTER_PATH))
            .header("accept", "application/json")
            .header("content-type", "application/json");

        if self.attach_api_credentials {
            request = request
                .header("x-goaffpro-public-key", self.api_key.as_str())
                .header("x-goaffpro-secret-key", self.api_secret.as_str());
        }

        let response = match request.body(json_body.to_string()).send().await {
            Ok(response) => response,
            Err(err) => return Err(AffiliateApiError::Transport(err.to_string())),
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return Err(AffiliateApiError::Transport(err.to_string())),
        };

        let parsed: RegisterAffiliateResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(AffiliateApiError::Protocol(String::from(
                    "response body is not valid json",
                )))
            }
        };

        let success = match parsed.success {
            Some(success) => success,
            None => {
                return Err(AffiliateApiError::Protocol(String::from(
                    "response has no success field",
                )))
            }
        };

        if !success {
            let message = parsed
                .message
                .unwrap_or_else(|| String::from("affiliate registration rejected"));
            return Err(AffiliateApiError::Rejected(message));
        }

        match parsed.data.and_then(|data| data.affiliate_id) {
            Some(affiliate_id) if !affiliate_id.is_empty() => Ok(affiliate_id),
            _ => Err(AffiliateApiError::Protocol(String::from(
                "success response has no affiliate_id",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(uri: &str) -> AffiliateSettings {
        let mut settings = AffiliateSettings::default();
        settings.api_base = uri.to_string();
        settings
    }

    #[tokio::test]
    async fn registers_affiliate_and_returns_the_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sdk/user/register"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(body_json(json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "password": "hunter2_secret",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"affiliate_id": "af_1042"},
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AffiliateClient::new(&settings_for(&mock_server.uri())).unwrap();
        let affiliate_id = client
            .register_affiliate(
                &String::from("Jane Doe"),
                &String::from("jane@example.com"),
                &String::from("hunter2_secret"),
            )
            .await
            .unwrap();

        assert_eq!(affiliate_id, "af_1042");
    }

    #[tokio::test]
    async fn rejection_message_is_passed_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sdk/user/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "email already registered",
            })))
            .mount(&mock_server)
            .await;

        let client = AffiliateClient::new(&settings_for(&mock_server.uri())).unwrap();
        let error = client
            .register_affiliate(
                &String::from("Jane Doe"),
                &String::from("jane@example.com"),
                &String::from("hunter2_secret"),
            )
            .await
            .unwrap_err();

        assert_eq!(
            error,
            AffiliateApiError::Rejected(String::from("email already registered"))
        );
    }

    #[tokio::test]
    async fn truncated_body_is_a_protocol_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sdk/user/register"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"success\": tru"))
            .mount(&mock_server)
            .await;

        let client = AffiliateClient::new(&settings_for(&mock_server.uri())).unwrap();
        let error = client
            .register_affiliate(
                &String::from("Jane Doe"),
                &String::from("jane@example.com"),
                &String::from("hunter2_secret"),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, AffiliateApiError::Protocol(_)));
    }

    #[tokio::test]
    async fn missing_success_field_is_a_protocol_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sdk/user/register"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "no verdict"})),
            )
            .mount(&mock_server)
            .await;

        let client = AffiliateClient::new(&settings_for(&mock_server.uri())).unwrap();
        let error = client
            .register_affiliate(
                &String::from("Jane Doe"),
                &String::from("jane@example.com"),
                &String::from("hunter2_secret"),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, AffiliateApiError::Protocol(_)));
    }

    #[tokio::test]
    async fn success_without_affiliate_id_is_a_protocol_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sdk/user/register"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": {}})),
            )
            .mount(&mock_server)
            .await;

        let client = AffiliateClient::new(&settings_for(&mock_server.uri())).unwrap();
        let error = client
            .register_affiliate(
                &String::from("Jane Doe"),
                &String::from("jane@example.com"),
                &String::from("hunter2_secret"),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, AffiliateApiError::Protocol(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let client = AffiliateClient::new(&settings_for("http://127.0.0.1:1")).unwrap();
        let error = client
            .register_affiliate(
                &String::from("Jane Doe"),
                &String::from("jane@example.com"),
                &String::from("hunter2_secret"),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, AffiliateApiError::Transport(_)));
    }

    #[tokio::test]
    async fn credential_headers_are_attached_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sdk/user/register"))
            .and(header("x-goaffpro-public-key", "pk_123"))
            .and(header("x-goaffpro-secret-key", "sk_456"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"affiliate_id": "af_1"},
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut settings = settings_for(&mock_server.uri());
        settings.api_key = String::from("pk_123");
        settings.api_secret = String::from("sk_456");
        settings.attach_api_credentials = true;

        let client = AffiliateClient::new(&settings).unwrap();
        let affiliate_id = client
            .register_affiliate(
                &String::from("Jane Doe"),
                &String::from("jane@example.com"),
                &String::from("hunter2_secret"),
            )
            .await
            .unwrap();

        assert_eq!(affiliate_id, "af_1");
    }

    #[tokio::test]
    async fn credential_headers_are_absent_by_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sdk/user/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"affiliate_id": "af_1"},
            })))
            .mount(&mock_server)
            .await;

        let mut settings = settings_for(&mock_server.uri());
        settings.api_key = String::from("pk_123");
        settings.api_secret = String::from("sk_456");

        let client = AffiliateClient::new(&settings).unwrap();
        client
            .register_affiliate(
                &String::from("Jane Doe"),
                &String::from("jane@example.com"),
                &String::from("hunter2_secret"),
            )
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("x-goaffpro-public-key"));
        assert!(!requests[0].headers.contains_key("x-goaffpro-secret-key"));
    }
}
