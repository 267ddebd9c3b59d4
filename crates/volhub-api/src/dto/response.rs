//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success response wrapper for list endpoints that also report a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Number of items returned.
    pub count: usize,
    /// The items.
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    /// Creates a successful list response; the count mirrors the data
    /// length.
    pub fn of(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Stored notification count.
    pub notifications: usize,
    /// Stored match count.
    pub matches: usize,
    /// Stored event count.
    pub events: usize,
    /// Stored volunteer count.
    pub volunteers: usize,
}
