mod common;

use common::setup_test_app;
use poem::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_items() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    app.item_store
        .create("Test Item".to_string(), Some("description of item".to_string()))
        .await
        .expect("Failed to seed item");

    let resp = app
        .client
        .get("/api/items/")
        .header("Authorization", token.as_str())
        .send()
        .await;

    resp.assert_status(StatusCode::OK);
    let body = resp.json().await;
    let items = body.value().array();
    assert_eq!(items.len(), 1);
    items.get(0).object().get("name").assert_string("Test Item");
}

#[tokio::test]
async fn test_create_item() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    app.item_store
        .create("Test Item".to_string(), Some("description of item".to_string()))
        .await
        .expect("Failed to seed item");

    let resp = app
        .client
        .post("/api/items/")
        .header("Authorization", token.as_str())
        .body_json(&json!({"name": "mock item", "description": "mock description"}))
        .send()
        .await;

    resp.assert_status(StatusCode::CREATED);
    let body = resp.json().await;
    let item = body.value().object();
    item.get("name").assert_string("mock item");
    assert!(item.get("id").i64() > 0);

    // One from the seed, one from this request
    let stored = app.item_store.list().await.expect("Failed to list items");
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn test_create_item_missing_name_rejected() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    let resp = app
        .client
        .post("/api/items/")
        .header("Authorization", token.as_str())
        .body_json(&json!({"description": "no name given"}))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);

    let stored = app.item_store.list().await.expect("Failed to list items");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_create_item_empty_name_rejected() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    let resp = app
        .client
        .post("/api/items/")
        .header("Authorization", token.as_str())
        .body_json(&json!({"name": "", "description": "empty name"}))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);

    let stored = app.item_store.list().await.expect("Failed to list items");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_get_single_item() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    let seeded = app
        .item_store
        .create("Test Item".to_string(), Some("description of item".to_string()))
        .await
        .expect("Failed to seed item");

    let resp = app
        .client
        .get(format!("/api/items/{}/", seeded.id))
        .header("Authorization", token.as_str())
        .send()
        .await;

    resp.assert_status(StatusCode::OK);
    let body = resp.json().await;
    let item = body.value().object();
    item.get("name").assert_string("Test Item");
    item.get("description").assert_string("description of item");
    assert_eq!(item.get("id").i64(), seeded.id as i64);
}

#[tokio::test]
async fn test_get_unknown_item_returns_404() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    let seeded = app
        .item_store
        .create("Test Item".to_string(), None)
        .await
        .expect("Failed to seed item");

    let resp = app
        .client
        .get(format!("/api/items/{}/", seeded.id + 1000))
        .header("Authorization", token.as_str())
        .send()
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_item() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    let target = app
        .item_store
        .create("Test Item".to_string(), Some("description of item".to_string()))
        .await
        .expect("Failed to seed item");
    let other = app
        .item_store
        .create("Other Item".to_string(), Some("untouched".to_string()))
        .await
        .expect("Failed to seed item");

    let resp = app
        .client
        .put(format!("/api/items/{}/", target.id))
        .header("Authorization", token.as_str())
        .body_json(&json!({"name": "Updated item", "description": "Updated description"}))
        .send()
        .await;

    resp.assert_status(StatusCode::OK);
    let body = resp.json().await;
    body.value().object().get("name").assert_string("Updated item");

    let stored = app
        .item_store
        .get(target.id)
        .await
        .expect("Updated item missing");
    assert_eq!(stored.name, "Updated item");
    assert_eq!(stored.description.as_deref(), Some("Updated description"));

    // The other row must be unaffected
    let untouched = app.item_store.get(other.id).await.expect("Other item missing");
    assert_eq!(untouched.name, "Other Item");
    assert_eq!(untouched.description.as_deref(), Some("untouched"));
}

#[tokio::test]
async fn test_update_unknown_item_returns_404() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    let resp = app
        .client
        .put("/api/items/9999/")
        .header("Authorization", token.as_str())
        .body_json(&json!({"name": "ghost"}))
        .send()
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_item() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    let seeded = app
        .item_store
        .create("Test Item".to_string(), Some("description of item".to_string()))
        .await
        .expect("Failed to seed item");

    let resp = app
        .client
        .delete(format!("/api/items/{}/", seeded.id))
        .header("Authorization", token.as_str())
        .send()
        .await;

    resp.assert_status(StatusCode::NO_CONTENT);

    let stored = app.item_store.list().await.expect("Failed to list items");
    assert!(stored.is_empty());

    let resp = app
        .client
        .get(format!("/api/items/{}/", seeded.id))
        .header("Authorization", token.as_str())
        .send()
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_requests_without_token_rejected() {
    let app = setup_test_app().await;

    let resp = app.client.get("/api/items/").send().await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    let resp = app
        .client
        .post("/api/items/")
        .body_json(&json!({"name": "mock item"}))
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    let resp = app
        .client
        .get("/api/items/")
        .header("Authorization", "Bearer not-a-jwt")
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_item_crud_flow() {
    let app = setup_test_app().await;
    let token = app.bearer_token();

    let before = app.item_store.list().await.expect("Failed to list items").len();

    // Create
    let resp = app
        .client
        .post("/api/items/")
        .header("Authorization", token.as_str())
        .body_json(&json!({"name": "mock item", "description": "mock description"}))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let body = resp.json().await;
    let id = body.value().object().get("id").i64();

    // List grew by one
    let resp = app
        .client
        .get("/api/items/")
        .header("Authorization", token.as_str())
        .send()
        .await;
    resp.assert_status(StatusCode::OK);
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), before + 1);

    // Replace
    let resp = app
        .client
        .put(format!("/api/items/{}/", id))
        .header("Authorization", token.as_str())
        .body_json(&json!({"name": "Updated item", "description": "Updated description"}))
        .send()
        .await;
    resp.assert_status(StatusCode::OK);

    let resp = app
        .client
        .get(format!("/api/items/{}/", id))
        .header("Authorization", token.as_str())
        .send()
        .await;
    resp.assert_status(StatusCode::OK);
    let body = resp.json().await;
    body.value().object().get("name").assert_string("Updated item");

    // Delete, then the id is gone
    let resp = app
        .client
        .delete(format!("/api/items/{}/", id))
        .header("Authorization", token.as_str())
        .send()
        .await;
    resp.assert_status(StatusCode::NO_CONTENT);

    let resp = app
        .client
        .get(format!("/api/items/{}/", id))
        .header("Authorization", token.as_str())
        .send()
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
}
