use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};
use tracing::{info, warn};

use item_catalog_backend::api::{AuthApi, HealthApi, ItemsApi};
use item_catalog_backend::config;
use item_catalog_backend::errors::AuthError;
use item_catalog_backend::services::TokenService;
use item_catalog_backend::stores::{CredentialStore, ItemStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::init_logging().expect("Failed to initialize logging");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://items.db?mode=rwc".to_string());

    let db: DatabaseConnection = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    info!("Connected to database: {}", database_url);

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    info!("Database migrations completed");

    let jwt_secret =
        std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set");

    let token_service = Arc::new(TokenService::new(jwt_secret));
    let credential_store = Arc::new(CredentialStore::new(db.clone()));
    let item_store = Arc::new(ItemStore::new(db.clone()));

    // TODO: replace with a proper user-management CLI - seed test user for development
    // (username: "testuser", password: "testpass")
    match credential_store
        .add_user("testuser".to_string(), "testpass".to_string())
        .await
    {
        Ok(user_id) => info!("Test user created with ID: {}", user_id),
        Err(AuthError::DuplicateUsername(_)) => info!("Test user already exists, skipping creation"),
        Err(e) => warn!("Failed to create test user: {:?}", e),
    }

    let auth_api = AuthApi::new(credential_store, token_service.clone());
    let items_api = ItemsApi::new(item_store, token_service);

    let api_service = OpenApiService::new((HealthApi, auth_api, items_api), "Item Catalog API", "1.0.0")
        .server("http://localhost:3000/api");

    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    info!("Starting server on http://{}", bind_addr);
    info!("Swagger UI available at /swagger, API endpoints under /api");

    Server::new(TcpListener::bind(bind_addr)).run(app).await
}
