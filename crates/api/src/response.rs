//! Response envelope types for the fruit endpoints.
//!
//! Collections are wrapped as `{ "fruits": [...] }`, single records as
//! `{ "fruit": {...} }`, and every error as `{ "error": { name, message } }`.

use serde::Serialize;

/// `{ "fruits": T }` envelope for list and seed responses.
#[derive(Debug, Serialize)]
pub struct FruitsResponse<T: Serialize> {
    pub fruits: T,
}

/// `{ "fruit": T }` envelope for single-record responses.
#[derive(Debug, Serialize)]
pub struct FruitResponse<T: Serialize> {
    pub fruit: T,
}

/// `{ "error": { "name": ..., "message": ... } }` envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub name: &'static str,
    pub message: String,
}
