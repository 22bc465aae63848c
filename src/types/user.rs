use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RJoin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}
