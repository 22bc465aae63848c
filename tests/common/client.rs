use actix_web::{web, App};
use signet_auth::{
    db::postgres_service::PostgresService,
    types::{error::AppError, user::DBUserCreate},
    utils::password,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(signet_auth::routes::configure_routes)
    }

    /// Seed a user directly through the store, bypassing the HTTP surface.
    #[allow(dead_code)]
    pub async fn create_test_user(
        &self,
        email: Option<String>,
        password: &str,
    ) -> Result<(i32, String), AppError> {
        let random_id = Uuid::new_v4();
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", random_id));
        let password_hash = password::hash(password).expect("Failed to hash password");

        let user_id = self
            .db
            .create_user(DBUserCreate {
                email: email.clone(),
                password_hash,
                roles: vec!["USER".to_string()],
            })
            .await?;

        Ok((user_id, email))
    }
}
