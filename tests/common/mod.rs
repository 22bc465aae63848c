use signet_auth::config::{EnvConfig, TokenConfig, CONFIG};
use signet_auth::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // the config global is per test binary; every test uses the same one
        let _ = CONFIG.set(get_test_config());

        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        token: TokenConfig {
            secret: "test-signing-secret".to_string(),
            ttl_secs: 3600,
        },
        default_roles: vec!["USER".to_string()],
    }
}

// Test data helpers
pub mod test_data {
    use signet_auth::types::user::RJoin;

    pub fn sample_credentials() -> RJoin {
        RJoin {
            email: "test@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    pub fn credentials_with_email(email: &str) -> RJoin {
        RJoin {
            email: email.to_string(),
            password: "secret".to_string(),
        }
    }
}
