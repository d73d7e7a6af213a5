//! # Games Dash
//!
//! An interactive dashboard over a video-game sales and ratings dataset.
//! Filter by genre, ESRB rating and release-year range; see a score scatter,
//! a stacked area of releases per platform and the number of matching games.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading, cleaning and filtering
//! - [`charts`]: plotly figures and the count label
//! - [`layout`]: the dashboard page
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use games_dash::charts::{games_count, scatter_figure};
//! use games_dash::dataset::*;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (dataset, _report) = DatasetLoader::new().load(Path::new("games.csv"))?;
//!
//!     let params = FilterParams::new(
//!         Selection::new(["Action", "Sports", "Racing"]),
//!         Selection::new(["E"]),
//!         YearRange::new(2002, 2010),
//!     );
//!     let view = dataset.filter(&params);
//!
//!     println!("{}", games_count(&view).text);
//!     println!("{}", scatter_figure(&view).to_json());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;

// Re-export top-level types for convenience
pub use dataset::{
    filter_records, Dataset, DatasetError, DatasetLoader, DatasetResult, Domains, FilterParams,
    GameRecord, LoadReport, Selection, YearRange,
};

pub use charts::{area_figure, games_count, release_counts, scatter_figure, GamesCount};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
