use crate::db::postgres_service::PostgresService;
use crate::types::error::{AppError, AuthFailure};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RLogin;
use crate::utils::{password, token};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> ApiResult<String> {
    let body = body.into_inner();
    if body.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    if body.password.is_empty() {
        return Err(AppError::Validation("password is required".into()));
    }

    let user = db
        .find_user_by_email(&body.email)
        .await?
        .ok_or(AppError::Authentication(AuthFailure::UnknownAccount))?;

    let matches = password::verify(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("stored hash unreadable: {}", e)))?;
    if !matches {
        return Err(AppError::Authentication(AuthFailure::BadCredentials));
    }

    let session_token = token::issue(&user.email, &user.roles.0).map_err(AppError::Signing)?;

    Ok(ApiResponse::Ok(session_token))
}
