//! Core data types for the games table
//!
//! - `GameRecord`: one cleaned row of the dataset
//! - `Domains`: the distinct values used to populate the filter controls
//! - `Dataset`: the immutable table plus its domains

use serde::Serialize;

use super::filter::{filter_records, FilterParams};

/// A single game release
///
/// Every field is guaranteed present; rows with gaps never make it past the loader.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GameRecord {
    pub name: String,
    pub platform: String,
    pub year_of_release: i32,
    pub genre: String,
    pub publisher: String,
    /// Critics' score, 0-100
    pub critic_score: f64,
    /// Players' score, 0-10
    pub user_score: f64,
    pub developer: String,
    /// ESRB rating (E, T, M, E10+, ...)
    pub rating: String,
}

/// Distinct values present in the loaded table
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Domains {
    /// Genres in order of first appearance
    pub genres: Vec<String>,
    /// Ratings in order of first appearance
    pub ratings: Vec<String>,
    /// Years, ascending
    pub years: Vec<i32>,
}

impl Domains {
    /// Collect the domains of a set of records
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut domains = Domains::default();

        for record in records {
            if !domains.genres.contains(&record.genre) {
                domains.genres.push(record.genre.clone());
            }
            if !domains.ratings.contains(&record.rating) {
                domains.ratings.push(record.rating.clone());
            }
            if !domains.years.contains(&record.year_of_release) {
                domains.years.push(record.year_of_release);
            }
        }

        domains.years.sort_unstable();
        domains
    }

    /// Smallest year in the table
    pub fn min_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    /// Largest year in the table
    pub fn max_year(&self) -> Option<i32> {
        self.years.last().copied()
    }
}

/// The loaded games table
///
/// Built once at startup and shared read-only behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<GameRecord>,
    domains: Domains,
}

impl Dataset {
    /// Wrap cleaned records, computing their domains
    pub fn new(records: Vec<GameRecord>) -> Self {
        let domains = Domains::from_records(&records);
        Self { records, domains }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows matching all three filter predicates, in table order
    pub fn filter(&self, params: &FilterParams) -> Vec<&GameRecord> {
        filter_records(&self.records, params)
    }
}
