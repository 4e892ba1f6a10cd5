use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomerRecord {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub accepted_terms: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAffiliateSettings {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub show_refer_and_earn: Option<bool>,
    pub add_name_fields_to_registration: Option<bool>,
    pub attach_api_credentials: Option<bool>,
    pub skip_if_already_linked: Option<bool>,
    pub referral_base: Option<String>,
    pub api_base: Option<String>,
}
