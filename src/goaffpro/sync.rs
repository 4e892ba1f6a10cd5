use std::sync::Arc;

use chrono::Utc;
use log::info;
use mongodb::bson::doc;

use crate::goaffpro::client::AffiliateClient;
use crate::server::AppState;
use crate::storage::mongo::{build_customer_filter, find_customer, update_customer};
use crate::storage::options::load_affiliate_settings;
use crate::types::goaffpro::AffiliateApiError;
use crate::utilities::api_messages::{
    APIMessages, AffiliateMessages, CustomerMessages,
};
use crate::utilities::helpers::random_string;

// which profile variant supplies the first/last name for the affiliate call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliateNameSource {
    Profile,
    Meta,
}

#[derive(Debug, Clone)]
pub struct AffiliateSyncRequest {
    pub customer_id: String,
    pub name_source: AffiliateNameSource,
    pub submitted_password: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AffiliateSyncError {
    CustomerNotFound,
    Database(String),
    Api(AffiliateApiError),
}

impl ToString for AffiliateSyncError {
    fn to_string(&self) -> String {
        match self {
            AffiliateSyncError::CustomerNotFound => String::from("customer not found"),
            AffiliateSyncError::Database(message) => format!("database error: {}", message),
            AffiliateSyncError::Api(error) => error.to_string(),
        }
    }
}

// empty parts keep their joining space, the affiliate api sees " Doe"
pub fn build_affiliate_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}

pub async fn resolve_affiliate_password(submitted_password: Option<String>) -> String {
    match submitted_password {
        Some(password) if !password.is_empty() => password,
        _ => random_string(20).await,
    }
}

pub fn sync_error_user_message(error: &AffiliateSyncError) -> String {
    match error {
        AffiliateSyncError::Api(AffiliateApiError::Rejected(message)) => message.clone(),
        AffiliateSyncError::Api(_) => {
            APIMessages::Affiliate(AffiliateMessages::ErrorCreatingAccount).to_string()
        }
        AffiliateSyncError::CustomerNotFound => {
            APIMessages::Customer(CustomerMessages::NotFound).to_string()
        }
        AffiliateSyncError::Database(_) => APIMessages::InternalServerError.to_string(),
    }
}

// shared by the registration trigger and the on-demand endpoint; both issue
// an independent api call and the latest success overwrites the stored id
pub async fn sync_affiliate_account(
    state: &Arc<AppState>,
    request: AffiliateSyncRequest,
) -> Result<String, AffiliateSyncError> {
    let settings = match load_affiliate_settings(&state.mongo_db).await {
        Ok(settings) => settings,
        Err(err) => return Err(AffiliateSyncError::Database(err.to_string())),
    };

    let filter = build_customer_filter(request.customer_id.as_str(), "").await;
    let (found, customer) = match find_customer(&state.mongo_db, filter).await {
        Ok(customer) => customer,
        Err((_status_code, json)) => return Err(AffiliateSyncError::Database(json.0.message)),
    };

    if !found {
        return Err(AffiliateSyncError::CustomerNotFound);
    }

    let customer = customer.unwrap();

    if settings.skip_if_already_linked {
        if let Some(affiliate_id) = customer.meta.get("goaffpro_affiliate_id") {
            if !affiliate_id.is_empty() {
                info!(
                    "customer {} already linked to affiliate {}, skipping",
                    customer.id, affiliate_id
                );
                return Ok(affiliate_id.clone());
            }
        }
    }

    let (first_name, last_name) = match request.name_source {
        AffiliateNameSource::Profile => {
            (customer.first_name.clone(), customer.last_name.clone())
        }
        AffiliateNameSource::Meta => (
            customer
                .meta
                .get("goaffpro_first_name")
                .cloned()
                .unwrap_or_default(),
            customer
                .meta
                .get("goaffpro_last_name")
                .cloned()
                .unwrap_or_default(),
        ),
    };

    let name = build_affiliate_name(&first_name, &last_name);
    let password = resolve_affiliate_password(request.submitted_password).await;

    let client = match AffiliateClient::new(&settings) {
        Ok(client) => client,
        Err(err) => return Err(AffiliateSyncError::Api(err)),
    };

    let affiliate_id = match client
        .register_affiliate(&name, &customer.email, &password)
        .await
    {
        Ok(affiliate_id) => affiliate_id,
        Err(err) => return Err(AffiliateSyncError::Api(err)),
    };

    let current_datetime = Utc::now();
    let iso8601_string = current_datetime.to_rfc3339();

    let filter = build_customer_filter(request.customer_id.as_str(), "").await;
    let update = doc! {"$set": {
        "meta.goaffpro_affiliate_id": &affiliate_id,
        "updated_at": iso8601_string,
    }};

    match update_customer(&state.mongo_db, filter, update).await {
        Ok(_) => (),
        Err((_status_code, json)) => return Err(AffiliateSyncError::Database(json.0.message)),
    };

    info!(
        "linked customer {} to affiliate {}",
        request.customer_id, affiliate_id
    );

    Ok(affiliate_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_first_and_last_name_with_a_single_space() {
        assert_eq!(build_affiliate_name("Jane", "Doe"), "Jane Doe");
    }

    #[test]
    fn keeps_the_literal_space_when_first_name_is_empty() {
        assert_eq!(build_affiliate_name("", "Doe"), " Doe");
    }

    #[test]
    fn keeps_the_literal_space_when_last_name_is_empty() {
        assert_eq!(build_affiliate_name("Jane", ""), "Jane ");
    }

    #[tokio::test]
    async fn forwards_the_submitted_password() {
        let password = resolve_affiliate_password(Some(String::from("from_the_form"))).await;
        assert_eq!(password, "from_the_form");
    }

    #[tokio::test]
    async fn generates_a_password_when_none_was_submitted() {
        let password = resolve_affiliate_password(None).await;
        assert_eq!(password.len(), 20);
    }

    #[tokio::test]
    async fn generates_a_password_when_the_submitted_one_is_empty() {
        let password = resolve_affiliate_password(Some(String::new())).await;
        assert_eq!(password.len(), 20);
    }

    #[test]
    fn rejection_messages_reach_the_user_verbatim() {
        let error = AffiliateSyncError::Api(AffiliateApiError::Rejected(String::from(
            "email already registered",
        )));
        assert_eq!(sync_error_user_message(&error), "email already registered");
    }

    #[test]
    fn transport_failures_map_to_a_generic_message() {
        let error = AffiliateSyncError::Api(AffiliateApiError::Transport(String::from(
            "connection refused",
        )));
        let message = sync_error_user_message(&error);
        assert!(!message.is_empty());
        assert!(!message.contains("connection refused"));
    }

    #[test]
    fn protocol_failures_map_to_a_generic_message() {
        let error = AffiliateSyncError::Api(AffiliateApiError::Protocol(String::from(
            "response body is not valid json",
        )));
        let message = sync_error_user_message(&error);
        assert!(!message.is_empty());
        assert!(!message.contains("json"));
    }
}
