use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::errors::items::ItemError;
use crate::types::db::item::{self, Entity as Item};

/// ItemStore manages item rows in the database
///
/// One store call per request; consistency is left to the storage
/// engine's transaction guarantees.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create a new ItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all items in id order
    pub async fn list(&self) -> Result<Vec<item::Model>, ItemError> {
        Item::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))
    }

    /// Insert a new item and return the persisted row with its assigned id
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<item::Model, ItemError> {
        let new_item = item::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        };

        new_item
            .insert(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))
    }

    /// Fetch a single item by id
    pub async fn get(&self, id: i32) -> Result<item::Model, ItemError> {
        let item = Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))?;

        item.ok_or_else(|| ItemError::not_found(id))
    }

    /// Overwrite all fields of an existing item
    ///
    /// A single UPDATE keyed on the id; a row that vanished since the
    /// caller last saw it surfaces as NotFound, not as a failed update.
    pub async fn replace(
        &self,
        id: i32,
        name: String,
        description: Option<String>,
    ) -> Result<item::Model, ItemError> {
        let active = item::ActiveModel {
            id: Set(id),
            name: Set(name),
            description: Set(description),
        };

        active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ItemError::not_found(id),
            e => ItemError::internal_error(format!("Database error: {}", e)),
        })
    }

    /// Delete an item by id
    pub async fn delete(&self, id: i32) -> Result<(), ItemError> {
        let result = Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(ItemError::not_found(id));
        }

        Ok(())
    }
}
