// SPDX-License-Identifier: MPL-2.0
//! Asynchronous loading of preview images.
//!
//! An unreachable or undecodable URL is not an error condition for the app;
//! callers surface any failure here as the "Image not found" fallback box.

use crate::error::Result;
use iced::widget::image::Handle;

/// A fetched and decoded preview image.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Fetches `url` and decodes it into a displayable image.
///
/// `http(s)` URLs are downloaded; anything else is treated as a local path.
pub async fn fetch(url: String) -> Result<FetchedImage> {
    let bytes: Vec<u8> = if url.starts_with("http://") || url.starts_with("https://") {
        let response = reqwest::get(&url).await?.error_for_status()?;
        response.bytes().await?.to_vec()
    } else {
        tokio::fs::read(&url).await?
    };

    let decoded = image_rs::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(FetchedImage {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}
