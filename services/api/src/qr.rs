//! QR code generation for item identifiers
//!
//! The payload is the item's id rendered as a string, nothing else. The
//! artifact is a PNG wrapped in a data URI so the client can drop it
//! straight into an `img` tag or print it.

use anyhow::Result;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::Luma;
use qrcode::QrCode;
use std::io::Cursor;

/// Data URI prefix of every generated artifact
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode an item id into a PNG data URI
pub fn encode_item_id(item_id: &str) -> Result<String> {
    let code = QrCode::new(item_id.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to build QR code: {}", e))?;

    let img = code.render::<Luma<u8>>().build();

    let mut png = Cursor::new(Vec::new());
    img.write_to(&mut png, image::ImageFormat::Png)
        .map_err(|e| anyhow::anyhow!("Failed to encode QR code as PNG: {}", e))?;

    Ok(format!(
        "{}{}",
        DATA_URI_PREFIX,
        STANDARD.encode(png.into_inner())
    ))
}
