use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenericResponse {
    pub message: String,
    pub data: Value,
    pub exit_code: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    // security
    pub password: String, // store the hashed password

    // per-customer key-value metadata, holds the affiliate link among others
    #[serde(default)]
    pub meta: HashMap<String, String>,

    pub created_at: String,
    pub updated_at: String,
    pub deleted: bool,
}
