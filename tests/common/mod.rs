// Common test utilities for integration tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::test::TestClient;
use poem::Route;
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use item_catalog_backend::api::{AuthApi, HealthApi, ItemsApi};
use item_catalog_backend::services::TokenService;
use item_catalog_backend::stores::{CredentialStore, ItemStore};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// A fully wired application backed by an in-memory database
///
/// The stores are shared with the HTTP layer, so tests can assert
/// directly against persisted state.
pub struct TestApp {
    pub client: TestClient<Route>,
    pub item_store: Arc<ItemStore>,
    pub credential_store: Arc<CredentialStore>,
    pub token_service: Arc<TokenService>,
}

/// Creates a TestApp with the full API surface mounted under /api
pub async fn setup_test_app() -> TestApp {
    let db = setup_test_db().await;

    let token_service = Arc::new(TokenService::new(TEST_JWT_SECRET.to_string()));
    let credential_store = Arc::new(CredentialStore::new(db.clone()));
    let item_store = Arc::new(ItemStore::new(db.clone()));

    let auth_api = AuthApi::new(credential_store.clone(), token_service.clone());
    let items_api = ItemsApi::new(item_store.clone(), token_service.clone());

    let api_service =
        OpenApiService::new((HealthApi, auth_api, items_api), "Item Catalog API", "test");

    let app = Route::new().nest("/api", api_service);

    TestApp {
        client: TestClient::new(app),
        item_store,
        credential_store,
        token_service,
    }
}

impl TestApp {
    /// Issue an Authorization header value the API accepts, without
    /// going through /auth/login
    pub fn bearer_token(&self) -> String {
        let token = self
            .token_service
            .generate_jwt(&Uuid::new_v4())
            .expect("Failed to generate test JWT");

        format!("Bearer {}", token)
    }
}
