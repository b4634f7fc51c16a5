// src/error.rs
// Error types shared across the catalog and session modules.

use thiserror::Error;

/// A catalog resource could not be turned into a usable collection.
///
/// Every variant names the resource so the caller can show which view
/// failed. Load failures are terminal for that view; an empty collection is
/// reserved for "zero results after filtering" and is never an error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {resource} failed: {source}")]
    Request {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource} returned HTTP status {status}")]
    Status { resource: String, status: u16 },

    #[error("{resource} is not valid JSON: {source}")]
    Json {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{resource} has an unexpected shape: {message}")]
    Shape { resource: String, message: String },
}

impl LoadError {
    /// The resource the failure belongs to.
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Request { resource, .. }
            | LoadError::Status { resource, .. }
            | LoadError::Json { resource, .. }
            | LoadError::Shape { resource, .. } => resource,
        }
    }
}

/// A lesson number or vocabulary scope outside the assembled course.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("lesson {number} is out of range (course has {available} lessons)")]
    Lesson { number: usize, available: usize },

    #[error("part {index} is out of range (course has {available} parts)")]
    Part { index: usize, available: usize },
}
