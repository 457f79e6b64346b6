use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::types::db::item;

/// Request model for creating a new item
#[derive(Object, Debug)]
pub struct CreateItemRequest {
    /// Name of the item (1-100 characters)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,
}

/// Request model for replacing an existing item
///
/// PUT semantics: every field is overwritten, an omitted description
/// clears the stored one.
#[derive(Object, Debug)]
pub struct UpdateItemRequest {
    /// Name of the item (1-100 characters)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,
}

/// Response model representing an item
#[derive(Object, Debug)]
pub struct Item {
    /// Unique identifier for the item
    pub id: i32,

    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Response for item creation
#[derive(ApiResponse)]
pub enum CreateItemResponse {
    /// Item was created
    #[oai(status = 201)]
    Created(Json<Item>),
}

/// Response for item deletion
#[derive(ApiResponse)]
pub enum DeleteItemResponse {
    /// Item was deleted
    #[oai(status = 204)]
    Deleted,
}
