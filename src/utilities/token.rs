use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

use super::api_messages::{APIMessages, TokenMessages};

const DEFAULT_AUDIENCE: &str = "affiliate-bridge";
const DEFAULT_EXPIRATION_SECONDS: usize = 86400;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub aud: String,
    pub sub: String,
    pub exp: usize,
}

fn token_audience() -> String {
    env::var("API_TOKENS_AUDIENCE").unwrap_or(String::from(DEFAULT_AUDIENCE))
}

fn expiration_seconds() -> usize {
    match env::var("API_TOKENS_EXPIRATION_TIME") {
        Ok(value) => value.parse::<usize>().unwrap_or(DEFAULT_EXPIRATION_SECONDS),
        Err(_) => DEFAULT_EXPIRATION_SECONDS,
    }
}

pub fn create_token(customer_id: &String) -> Result<String, String> {
    let header = Header::new(Algorithm::HS512);
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = Claims {
        aud: token_audience(),
        sub: customer_id.to_string(),
        exp: now + expiration_seconds(),
    };

    let signing_key = match env::var("API_TOKENS_SIGNING_KEY") {
        Ok(key) => key,
        Err(_) => return Err(APIMessages::Token(TokenMessages::NotSigningKeyFound).to_string()),
    };

    match encode(
        &header,
        &claims,
        &EncodingKey::from_secret(signing_key.as_ref()),
    ) {
        Ok(token) => Ok(token),
        Err(_) => Err(APIMessages::Token(TokenMessages::ErrorCreating).to_string()),
    }
}

// expiry is checked by the library; the audience must match this service's
pub fn validate_token(token: &str) -> Result<TokenData<Claims>, String> {
    let mut validation = Validation::new(Algorithm::HS512);
    validation.set_audience(&[token_audience()]);

    let signing_key = match env::var("API_TOKENS_SIGNING_KEY") {
        Ok(key) => key,
        Err(_) => return Err(APIMessages::Token(TokenMessages::ErrorValidating).to_string()),
    };

    let token_data = match decode::<Claims>(
        token,
        &DecodingKey::from_secret(signing_key.as_ref()),
        &validation,
    ) {
        Ok(token_data) => token_data,
        Err(_) => return Err(APIMessages::Token(TokenMessages::ErrorValidating).to_string()),
    };

    Ok(token_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_customer_id() {
        env::set_var("API_TOKENS_SIGNING_KEY", "test_signing_key");

        let token = create_token(&String::from("cust_123")).unwrap();
        let token_data = validate_token(&token).unwrap();

        assert_eq!(token_data.claims.sub, "cust_123");
        assert_eq!(token_data.claims.aud, token_audience());
    }

    #[test]
    fn rejects_a_tampered_token() {
        env::set_var("API_TOKENS_SIGNING_KEY", "test_signing_key");

        let mut token = create_token(&String::from("cust_123")).unwrap();
        token.push('x');

        assert!(validate_token(&token).is_err());
    }
}
