use serde::{Deserialize, Serialize};

/// A row of the `schools` table, as returned by `GET /api/schools`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    /// Public URL path of the uploaded image, e.g. `/schoolImages/17242_logo.png`.
    pub image: String,
    pub email_id: String,
    pub created_at: String,
}

/// Validated form input plus the stored image URL, ready for insertion.
#[derive(Debug, Clone)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub image: String,
    pub email_id: String,
}
