use serde::{Deserialize, Serialize};

/// Claims carried by a session token. Validity is signature plus expiry;
/// nothing is looked up server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub roles: Vec<String>,
    pub exp: usize,
}
