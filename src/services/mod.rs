//! Business logic shared by the route handlers: form validation and image
//! persistence.

pub mod storage;
pub mod validation;
