//! Inventory item repository for database operations
//!
//! Every query is scoped to the owning account; an item belonging to a
//! different account is indistinguishable from one that does not exist.

use anyhow::Result;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::models::{Item, NewItem};

const ITEM_COLUMNS: &str =
    "id, item_name, category, quantity, location, qr_code, user_id, created_at, updated_at";

/// Item repository
#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new item for an owner and return it with its assigned id
    ///
    /// The QR artifact is attached in a second step once the id exists;
    /// see [`ItemRepository::attach_qr_code`].
    pub async fn create(&self, owner: Uuid, new_item: &NewItem) -> Result<Item> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO items (item_name, category, quantity, location, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ITEM_COLUMNS}
            "#,
        ))
        .bind(&new_item.item_name)
        .bind(&new_item.category)
        .bind(new_item.quantity)
        .bind(&new_item.location)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::map_row(&row))
    }

    /// Store the generated QR artifact on an item
    pub async fn attach_qr_code(&self, id: Uuid, qr_code: &str) -> Result<Item> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE items
            SET qr_code = $2, updated_at = now()
            WHERE id = $1
            RETURNING {ITEM_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(qr_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::map_row(&row))
    }

    /// All items belonging to an owner, newest-created first
    pub async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Item>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM items
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::map_row).collect())
    }

    /// Find one item by id, only if it belongs to the owner
    pub async fn find_by_id(&self, owner: Uuid, id: Uuid) -> Result<Option<Item>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM items
            WHERE id = $1 AND user_id = $2
            "#,
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Self::map_row(&row)))
    }

    /// Apply a signed quantity delta atomically
    ///
    /// The floor check runs inside the UPDATE itself, so two concurrent
    /// adjustments cannot produce a lost update or a negative quantity.
    /// Returns `None` when no row matched: either the owned item does not
    /// exist, or the delta would take the quantity below zero. The caller
    /// disambiguates with [`ItemRepository::find_by_id`].
    pub async fn adjust_quantity(&self, owner: Uuid, id: Uuid, delta: i32) -> Result<Option<Item>> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE items
            SET quantity = quantity + $3, updated_at = now()
            WHERE id = $1 AND user_id = $2 AND quantity + $3 >= 0
            RETURNING {ITEM_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(owner)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Self::map_row(&row)))
    }

    fn map_row(row: &PgRow) -> Item {
        Item {
            id: row.get("id"),
            item_name: row.get("item_name"),
            category: row.get("category"),
            quantity: row.get("quantity"),
            location: row.get("location"),
            qr_code: row.get("qr_code"),
            user_id: row.get("user_id"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
