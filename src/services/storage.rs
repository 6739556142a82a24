//! Image persistence for uploaded school pictures.
//!
//! Files land in the configured images directory under a unique, sanitised
//! name; the database stores only the public URL path.

use crate::error::AppError;
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs;

/// URL prefix under which the images directory is served.
pub const IMAGE_URL_PREFIX: &str = "/schoolImages";

/// Reduces a client-supplied filename to a safe basename.
///
/// Keeps ASCII alphanumerics, `.`, `_` and `-`; everything else (including
/// path separators) becomes `_`. A name with nothing left falls back to
/// `upload`.
pub fn sanitize_filename(name: &str) -> String {
    // Browsers send a bare filename, but never trust it: strip any path part.
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches(['.', '_']).is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// Prefixes the sanitised name with the current unix-millis timestamp so two
/// uploads of `logo.png` never collide.
pub fn unique_filename(original: &str) -> String {
    format!("{}_{}", Utc::now().timestamp_millis(), sanitize_filename(original))
}

/// Writes the image bytes to `{images_path}/{filename}` and returns the public
/// URL path to store in the database.
///
/// Creates the images directory on first use.
pub async fn save_image(
    images_path: &str,
    filename: &str,
    bytes: &[u8],
) -> Result<String, AppError> {
    fs::create_dir_all(images_path).await?;
    let full_path = PathBuf::from(images_path).join(filename);
    fs::write(&full_path, bytes).await?;
    tracing::debug!("Stored school image at {}", full_path.display());
    Ok(format!("{IMAGE_URL_PREFIX}/{filename}"))
}
