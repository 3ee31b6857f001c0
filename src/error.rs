// error.rs
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::ItemId;

/// Failures of [`crate::store::ItemStore`] operations. Both carry the id involved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item with this ID already exists")]
    AlreadyExists(ItemId),
    #[error("Item not found")]
    NotFound(ItemId),
}

/// Everything a route can answer with besides success.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The request body did not decode into an item.
    #[error("Invalid item payload: {0}")]
    MalformedRequest(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Store(StoreError::AlreadyExists(_)) => Status::Conflict,
            ApiError::Store(StoreError::NotFound(_)) => Status::NotFound,
            ApiError::MalformedRequest(_) => Status::BadRequest,
        }
    }
}

/// JSON body of every error response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        status::Custom(status, Json(ErrorMessage::new(self.to_string()))).respond_to(req)
    }
}
