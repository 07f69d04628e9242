use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{CreateItemParams, ItemsRepo, RepoError};
use crate::domain::items::{ItemPatch, ItemRecord};

use super::{PostgresRepositories, map_sqlx_error};

const ITEM_COLUMNS: &str =
    "id, item_name, category, unit_price, quantity, supplier, location, expiration_date, \
     created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    item_name: String,
    category: String,
    unit_price: f64,
    quantity: f64,
    supplier: String,
    location: String,
    expiration_date: Option<String>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<ItemRow> for ItemRecord {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            item_name: row.item_name,
            category: row.category,
            unit_price: row.unit_price,
            quantity: row.quantity,
            supplier: row.supplier,
            location: row.location,
            expiration_date: row.expiration_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ItemsRepo for PostgresRepositories {
    async fn list_all(&self) -> Result<Vec<ItemRecord>, RepoError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY item_name");
        let rows = sqlx::query_as::<_, ItemRow>(&sql)
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ItemRecord::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ItemRecord>, RepoError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE item_name = $1");
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(ItemRecord::from))
    }

    async fn create(&self, params: CreateItemParams) -> Result<ItemRecord, RepoError> {
        let CreateItemParams {
            item_name,
            category,
            unit_price,
            quantity,
            supplier,
            location,
        } = params;

        let id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();

        let sql = format!(
            "INSERT INTO items ( \
                 id, item_name, category, unit_price, quantity, supplier, location, \
                 created_at, updated_at \
             ) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) \
             RETURNING {ITEM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(id)
            .bind(item_name)
            .bind(category)
            .bind(unit_price)
            .bind(quantity)
            .bind(supplier)
            .bind(location)
            .bind(now)
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(ItemRecord::from(row))
    }

    async fn update(&self, name: &str, patch: ItemPatch) -> Result<Option<ItemRecord>, RepoError> {
        let sql = format!(
            "UPDATE items SET \
                 item_name = COALESCE($2, item_name), \
                 category = COALESCE($3, category), \
                 unit_price = COALESCE($4, unit_price), \
                 quantity = COALESCE($5, quantity), \
                 supplier = COALESCE($6, supplier), \
                 location = COALESCE($7, location), \
                 expiration_date = COALESCE($8, expiration_date), \
                 updated_at = now() \
             WHERE item_name = $1 \
             RETURNING {ITEM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(name)
            .bind(patch.item_name)
            .bind(patch.category)
            .bind(patch.unit_price)
            .bind(patch.quantity)
            .bind(patch.supplier)
            .bind(patch.location)
            .bind(patch.expiration_date)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(ItemRecord::from))
    }

    async fn delete(&self, name: &str) -> Result<Option<ItemRecord>, RepoError> {
        let sql = format!("DELETE FROM items WHERE item_name = $1 RETURNING {ITEM_COLUMNS}");
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(ItemRecord::from))
    }
}
