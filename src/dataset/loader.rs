//! CSV Loader
//!
//! Reads the games CSV, cleans it and builds the immutable `Dataset`.
//!
//! Cleaning rules, applied per row:
//! 1. a user score of `tbd` drops the row
//! 2. any blank or absent field among the nine used columns drops the row
//! 3. unparsable scores or years drop the row
//! 4. a release year before the minimum (2000 by default) drops the row
//!
//! None of these are errors; they are tallied in a [`LoadReport`].

use serde::Deserialize;
use std::fmt;
use std::io;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{Dataset, GameRecord};

/// Header names of the columns the dashboard needs
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Name",
    "Platform",
    "Year_of_Release",
    "Genre",
    "Publisher",
    "Critic_Score",
    "User_Score",
    "Developer",
    "Rating",
];

/// Placeholder used in the source data for a user score not yet assigned
const PENDING_USER_SCORE: &str = "tbd";

/// Default lower bound on the release year
pub const DEFAULT_MIN_YEAR: i32 = 2000;

/// A CSV row before cleaning
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Platform")]
    platform: Option<String>,
    #[serde(rename = "Year_of_Release")]
    year_of_release: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Publisher")]
    publisher: Option<String>,
    #[serde(rename = "Critic_Score")]
    critic_score: Option<String>,
    #[serde(rename = "User_Score")]
    user_score: Option<String>,
    #[serde(rename = "Developer")]
    developer: Option<String>,
    #[serde(rename = "Rating")]
    rating: Option<String>,
}

/// Why a row was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    PendingUserScore,
    MissingField,
    InvalidNumber,
    BeforeMinYear,
}

/// Row accounting for a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub malformed: usize,
    pub pending_user_score: usize,
    pub missing_field: usize,
    pub invalid_number: usize,
    pub before_min_year: usize,
}

impl LoadReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_kept
    }

    fn reject(&mut self, reason: Rejection) {
        match reason {
            Rejection::PendingUserScore => self.pending_user_score += 1,
            Rejection::MissingField => self.missing_field += 1,
            Rejection::InvalidNumber => self.invalid_number += 1,
            Rejection::BeforeMinYear => self.before_min_year += 1,
        }
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "read={}, kept={}, dropped={} (tbd={}, missing={}, invalid={}, too_old={}, malformed={})",
            self.rows_read,
            self.rows_kept,
            self.rows_dropped(),
            self.pending_user_score,
            self.missing_field,
            self.invalid_number,
            self.before_min_year,
            self.malformed,
        )
    }
}

/// Loads and cleans the games CSV
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    min_year: i32,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
        }
    }

    /// Set the earliest release year kept
    pub fn with_min_year(mut self, min_year: i32) -> Self {
        self.min_year = min_year;
        self
    }

    /// Load the dataset from a CSV file
    pub fn load(&self, path: &Path) -> DatasetResult<(Dataset, LoadReport)> {
        let file = std::fs::File::open(path).map_err(|e| DatasetError::Open {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        tracing::debug!("Reading dataset from {:?}", path);
        self.load_reader(io::BufReader::new(file))
    }

    /// Load the dataset from CSV text (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> DatasetResult<(Dataset, LoadReport)> {
        self.load_reader(csv_data.as_bytes())
    }

    /// Load the dataset from any reader producing CSV with a header row
    pub fn load_reader<R: io::Read>(&self, reader: R) -> DatasetResult<(Dataset, LoadReport)> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::Header(e.to_string()))?
            .clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h.trim() == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        let mut report = LoadReport::default();

        for (line_num, result) in reader.deserialize::<RawRecord>().enumerate() {
            report.rows_read += 1;

            let raw = match result {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::trace!("Line {}: {}", line_num + 2, e);
                    report.malformed += 1;
                    continue;
                }
            };

            match self.clean(raw) {
                Ok(record) => records.push(record),
                Err(reason) => report.reject(reason),
            }
        }

        report.rows_kept = records.len();
        Ok((Dataset::new(records), report))
    }

    fn clean(&self, raw: RawRecord) -> Result<GameRecord, Rejection> {
        if raw.user_score.as_deref().map(str::trim) == Some(PENDING_USER_SCORE) {
            return Err(Rejection::PendingUserScore);
        }

        let name = required(raw.name)?;
        let platform = required(raw.platform)?;
        let year = required(raw.year_of_release)?;
        let genre = required(raw.genre)?;
        let publisher = required(raw.publisher)?;
        let critic_score = required(raw.critic_score)?;
        let user_score = required(raw.user_score)?;
        let developer = required(raw.developer)?;
        let rating = required(raw.rating)?;

        let user_score = parse_score(&user_score)?;
        let critic_score = parse_score(&critic_score)?;
        let year_of_release = parse_year(&year)?;

        if year_of_release < self.min_year {
            return Err(Rejection::BeforeMinYear);
        }

        Ok(GameRecord {
            name,
            platform,
            year_of_release,
            genre,
            publisher,
            critic_score,
            user_score,
            developer,
            rating,
        })
    }
}

fn required(field: Option<String>) -> Result<String, Rejection> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Rejection::MissingField),
    }
}

fn parse_score(value: &str) -> Result<f64, Rejection> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(Rejection::InvalidNumber)
}

/// Years may be written as floats (`2006.0`) in the source data
fn parse_year(value: &str) -> Result<i32, Rejection> {
    if let Ok(year) = value.parse::<i32>() {
        return Ok(year);
    }

    match value.parse::<f64>() {
        Ok(year)
            if year.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year) =>
        {
            Ok(year as i32)
        }
        _ => Err(Rejection::InvalidNumber),
    }
}
