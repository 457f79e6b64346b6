use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::auth::BearerAuth;
use crate::errors::items::ItemError;
use crate::services::TokenService;
use crate::stores::ItemStore;
use crate::types::dto::items::{
    CreateItemRequest, CreateItemResponse, DeleteItemResponse, Item, UpdateItemRequest,
};
use crate::types::internal::auth::Claims;

/// Items API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
    token_service: Arc<TokenService>,
}

impl ItemsApi {
    /// Create a new ItemsApi with the given ItemStore and TokenService
    pub fn new(item_store: Arc<ItemStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            item_store,
            token_service,
        }
    }

    fn authorize(&self, auth: &BearerAuth) -> Result<Claims, ItemError> {
        self.token_service
            .validate_jwt(&auth.0.token)
            .map_err(|e| ItemError::unauthorized(e.message()))
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi(prefix_path = "/items/")]
impl ItemsApi {
    /// List all items
    ///
    /// Returns every stored item in id order
    #[oai(path = "/", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self, auth: BearerAuth) -> Result<Json<Vec<Item>>, ItemError> {
        self.authorize(&auth)?;

        let items = self.item_store.list().await?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Create a new item
    ///
    /// Accepts item details and returns the created item with its generated id
    #[oai(path = "/", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        auth: BearerAuth,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemResponse, ItemError> {
        self.authorize(&auth)?;

        let body = body.0;
        let created = self.item_store.create(body.name, body.description).await?;

        Ok(CreateItemResponse::Created(Json(Item::from(created))))
    }

    /// Get a single item by id
    #[oai(path = "/:id/", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<Item>, ItemError> {
        self.authorize(&auth)?;

        let item = self.item_store.get(id.0).await?;

        Ok(Json(Item::from(item)))
    }

    /// Replace an existing item
    ///
    /// Overwrites all fields of the item with the request body
    #[oai(path = "/:id/", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<Item>, ItemError> {
        self.authorize(&auth)?;

        let body = body.0;
        let updated = self
            .item_store
            .replace(id.0, body.name, body.description)
            .await?;

        Ok(Json(Item::from(updated)))
    }

    /// Delete an item by id
    #[oai(path = "/:id/", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<DeleteItemResponse, ItemError> {
        self.authorize(&auth)?;

        self.item_store.delete(id.0).await?;

        Ok(DeleteItemResponse::Deleted)
    }
}
