//! Inventory item model
//!
//! Serialized in camelCase to match the wire contract the client expects
//! (`itemName`, `qrCode`, ...).

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Inventory item entity
///
/// `qr_code` is `None` only between the initial insert and the artifact
/// attach; the create operation never returns the record in that state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub item_name: String,
    pub category: String,
    pub quantity: i32,
    pub location: String,
    pub qr_code: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item creation payload
#[derive(Debug, Clone)]
pub struct NewItem {
    pub item_name: String,
    pub category: String,
    pub quantity: i32,
    pub location: String,
}
