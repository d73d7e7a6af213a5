//! Data Transfer Objects
//!
//! Response types for the API endpoints. Filter requests deserialize
//! straight into [`crate::dataset::FilterParams`].

use serde::Serialize;

use crate::layout::FilterDefaults;

/// Values available to the filter controls
#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    /// Genres in order of first appearance
    pub genres: Vec<String>,
    /// ESRB ratings in order of first appearance
    pub ratings: Vec<String>,
    /// Year slider bounds and marks
    pub years: YearDomain,
    /// Initial selection of the controls
    pub defaults: FilterDefaults,
}

/// Year slider bounds and marks
#[derive(Debug, Serialize)]
pub struct YearDomain {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub marks: Vec<i32>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Number of records loaded
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
