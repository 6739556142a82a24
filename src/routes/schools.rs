//! School registration and listing handlers.
//!
//! ## Endpoints
//! - `POST /api/schools` — register a school (multipart form with image)
//! - `GET  /api/schools` — list all schools, newest first
//!
//! The create handler walks the multipart stream once, collecting the text
//! fields and buffering the image, then validates everything before any disk
//! or database write happens.

use crate::{
    db,
    error::AppError,
    models::{NewSchool, School},
    services::{storage, validation},
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// Shared application state, injected into every handler by axum.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Directory that receives uploaded school images.
    pub images_path: String,
}

/// An uploaded image part, buffered before validation.
struct ImageUpload {
    file_name: String,
    content_type: String,
    bytes: axum::body::Bytes,
}

/// `GET /schools` — every registered school, newest first.
pub async fn list_schools(State(state): State<AppState>) -> Result<Json<Vec<School>>, AppError> {
    let schools = db::list_schools(&state.pool).await?;
    Ok(Json(schools))
}

/// `POST /schools` — validate the form, store the image, insert the row.
///
/// Returns `201` with `{ "message", "imageUrl" }` on success.
pub async fn create_school(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut name = None;
    let mut address = None;
    let mut city = None;
    let mut state_field = None;
    let mut contact = None;
    let mut email_id = None;
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };
        match field_name.as_str() {
            "name" => name = Some(field.text().await?),
            "address" => address = Some(field.text().await?),
            "city" => city = Some(field.text().await?),
            "state" => state_field = Some(field.text().await?),
            "contact" => contact = Some(field.text().await?),
            "email_id" => email_id = Some(field.text().await?),
            "image" => {
                image = Some(ImageUpload {
                    file_name: field.file_name().unwrap_or("upload").to_string(),
                    content_type: field.content_type().unwrap_or("").to_string(),
                    bytes: field.bytes().await?,
                });
            }
            // Unknown parts are ignored, matching lenient form handling.
            _ => {}
        }
    }

    let name = validation::required("name", name)?;
    let address = validation::required("address", address)?;
    let city = validation::required("city", city)?;
    let state_field = validation::required("state", state_field)?;
    let contact = validation::required("contact", contact)?;
    let email_id = validation::required("email_id", email_id)?;

    if !validation::is_valid_email(&email_id) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }
    if !validation::is_valid_contact(&contact) {
        return Err(AppError::BadRequest("Invalid contact number".to_string()));
    }

    let image = image.ok_or_else(|| AppError::BadRequest("field image is required".to_string()))?;
    if image.bytes.is_empty() {
        return Err(AppError::BadRequest("field image is required".to_string()));
    }
    if !image.content_type.starts_with("image/") {
        return Err(AppError::BadRequest(
            "uploaded file must be an image".to_string(),
        ));
    }

    // Validation passed: now touch disk, then the database.
    let filename = storage::unique_filename(&image.file_name);
    let image_url = storage::save_image(&state.images_path, &filename, &image.bytes).await?;

    let school = db::insert_school(
        &state.pool,
        &NewSchool {
            name,
            address,
            city,
            state: state_field,
            contact,
            image: image_url.clone(),
            email_id,
        },
    )
    .await?;
    tracing::info!("Registered school {} ({})", school.name, school.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "School added successfully",
            "imageUrl": image_url
        })),
    ))
}
