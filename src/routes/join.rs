use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RJoin};
use crate::utils::password;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn join(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RJoin>,
) -> ApiResult<i32> {
    let body = body.into_inner();
    if body.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    if body.password.is_empty() {
        return Err(AppError::Validation("password is required".into()));
    }

    let password_hash = password::hash(&body.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;

    let user_id = db
        .create_user(DBUserCreate {
            email: body.email,
            password_hash,
            roles: config().default_roles.clone(),
        })
        .await?;

    Ok(ApiResponse::Ok(user_id))
}
