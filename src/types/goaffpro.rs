use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAffiliateRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// the response is parsed defensively, every field may be missing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAffiliateResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<RegisterAffiliateData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAffiliateData {
    #[serde(default)]
    pub affiliate_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffiliateApiError {
    Transport(String),
    Protocol(String),
    Rejected(String),
}

impl ToString for AffiliateApiError {
    fn to_string(&self) -> String {
        match self {
            AffiliateApiError::Transport(message) => format!("transport error: {}", message),
            AffiliateApiError::Protocol(message) => format!("protocol error: {}", message),
            AffiliateApiError::Rejected(message) => format!("rejected: {}", message),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffiliateActionResponse {
    pub success: bool,
    pub data: AffiliateActionData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffiliateActionData {
    pub message: String,
}
