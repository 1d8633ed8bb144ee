//! Contact message repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};

use crate::models::{ContactMessage, NewContactMessage};

/// Contact message repository, append-only
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a contact form submission
    pub async fn create(&self, new_message: &NewContactMessage) -> Result<ContactMessage> {
        let row = sqlx::query(
            r#"
            INSERT INTO contact_messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(&new_message.name)
        .bind(&new_message.email)
        .bind(&new_message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(ContactMessage {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            message: row.get("message"),
            created_at: row.get("created_at"),
        })
    }
}
