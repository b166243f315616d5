//! Response DTOs for the API.

use serde::Serialize;

use planner_models::ScheduleEntry;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Acknowledgement returned by action endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Bulk replace response.
#[derive(Debug, Clone, Serialize)]
pub struct BulkCreateResponse {
    pub status: String,
    /// The entries now making up the grid.
    pub schedules: Vec<ScheduleEntry>,
}
