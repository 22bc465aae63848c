use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::config;
use crate::types::token::Claims;

/// Issue a signed session token binding the subject and its roles, expiring
/// `token.ttl_secs` from now. Inputs are not validated here.
pub fn issue(subject: &str, roles: &[String]) -> Result<String, jsonwebtoken::errors::Error> {
    let token_config = &config().token;
    let expiry = Utc::now() + Duration::seconds(token_config.ttl_secs);

    let claims = Claims {
        sub: subject.to_owned(),
        roles: roles.to_vec(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(token_config.secret.as_bytes()),
    )
}

/// Check signature and expiry, returning the decoded claims.
pub fn verify(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_config = &config().token;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(token_config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
