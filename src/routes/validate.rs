use actix_web::post;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};

use crate::types::error::{AppError, AuthFailure};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("")]
async fn validate(_req: actix_web::HttpRequest, auth: BearerAuth) -> ApiResult<Response> {
    if token::verify(auth.token()).is_err() {
        return Err(AppError::Authentication(AuthFailure::InvalidToken));
    }

    Ok(ApiResponse::EmptyOk)
}
