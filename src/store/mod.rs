//! Cupcake store
//!
//! Explicit store handle wrapping the database connection. The process owns
//! the connection and hands a clone of the store to each handler; there is
//! no global database state. Each operation is a single statement (plus a
//! read for partial updates) and relies on the underlying store's
//! single-statement atomicity.

mod errors;

pub use errors::{StoreError, StoreResult};

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryOrder, Schema, Set,
};
use serde::Deserialize;

use crate::model::cupcake::{self, DEFAULT_IMAGE_URL};

/// Fields required to insert a cupcake.
///
/// `image_url` is optional; an absent, null, or empty value is stored as
/// unset. The default image is NOT applied at creation time.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCupcake {
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update: only fields present in the request body change.
///
/// Unrecognized keys are dropped during deserialization rather than
/// rejected. An explicitly empty `image_url` resets the field to
/// [`DEFAULT_IMAGE_URL`]; any non-empty string is stored verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CupcakeChanges {
    pub flavor: Option<String>,
    pub size: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

impl CupcakeChanges {
    /// True when no recognized field was supplied.
    pub fn is_empty(&self) -> bool {
        self.flavor.is_none()
            && self.size.is_none()
            && self.rating.is_none()
            && self.image_url.is_none()
    }
}

/// Store handle shared across request handlers.
#[derive(Clone)]
pub struct CupcakeStore {
    db: DatabaseConnection,
}

impl CupcakeStore {
    /// Connect to the database at `url`.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let db = Database::connect(url).await?;
        Ok(Self { db })
    }

    /// Wrap an existing connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The underlying connection (for seeding in tests and tooling).
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create the `cupcakes` table if it does not exist yet.
    pub async fn init_schema(&self) -> StoreResult<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);
        let mut stmt: TableCreateStatement = schema.create_table_from_entity(cupcake::Entity);
        stmt.if_not_exists();
        self.db.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    /// All cupcakes, best rated first. Ties keep id order.
    pub async fn list(&self) -> StoreResult<Vec<cupcake::Model>> {
        let rows = cupcake::Entity::find()
            .order_by_desc(cupcake::Column::Rating)
            .order_by_asc(cupcake::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Fetch one cupcake by id.
    pub async fn find(&self, id: i32) -> StoreResult<cupcake::Model> {
        cupcake::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Insert a new cupcake; the store assigns the id.
    pub async fn create(&self, new: NewCupcake) -> StoreResult<cupcake::Model> {
        let row = cupcake::ActiveModel {
            flavor: Set(new.flavor),
            size: Set(new.size),
            rating: Set(new.rating),
            image_url: Set(new.image_url.filter(|url| !url.is_empty())),
            ..Default::default()
        };
        Ok(row.insert(&self.db).await?)
    }

    /// Apply a partial update to an existing cupcake.
    ///
    /// Fields absent from `changes` are left untouched; either every
    /// supplied field is committed or, on failure, none are.
    pub async fn update(&self, id: i32, changes: CupcakeChanges) -> StoreResult<cupcake::Model> {
        let current = self.find(id).await?;
        if changes.is_empty() {
            return Ok(current);
        }

        let mut row = current.into_active_model();
        if let Some(flavor) = changes.flavor {
            row.flavor = Set(flavor);
        }
        if let Some(size) = changes.size {
            row.size = Set(size);
        }
        if let Some(rating) = changes.rating {
            row.rating = Set(rating);
        }
        if let Some(image_url) = changes.image_url {
            if image_url.is_empty() {
                row.image_url = Set(Some(DEFAULT_IMAGE_URL.to_string()));
            } else {
                row.image_url = Set(Some(image_url));
            }
        }

        Ok(row.update(&self.db).await?)
    }

    /// Delete a cupcake by id.
    ///
    /// Deleting an id with no row is NotFound, so repeating a delete does
    /// not report success twice.
    pub async fn delete(&self, id: i32) -> StoreResult<()> {
        let result = cupcake::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
