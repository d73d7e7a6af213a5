//! Games Dataset
//!
//! The read-only table behind the dashboard:
//!
//! - **types**: `GameRecord`, `Domains`, `Dataset`
//! - **loader**: CSV reading and row cleaning
//! - **filter**: genre / rating / year-range selection
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use games_dash::dataset::{DatasetLoader, FilterParams, Selection, YearRange};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (dataset, report) = DatasetLoader::new().load(Path::new("./games.csv"))?;
//!     println!("{}", report);
//!
//!     let params = FilterParams::new(
//!         Selection::new(["Action"]),
//!         Selection::new(["E"]),
//!         YearRange::new(2005, 2006),
//!     );
//!     println!("{} matching games", dataset.filter(&params).len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use filter::{filter_records, FilterParams, Selection, YearRange};
pub use loader::{DatasetLoader, LoadReport, DEFAULT_MIN_YEAR, REQUIRED_COLUMNS};
pub use types::{Dataset, Domains, GameRecord};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A small slice of the real dataset's shape, including rows the loader drops
    pub const SAMPLE_CSV: &str = "\
Name,Platform,Year_of_Release,Genre,Publisher,NA_sales,EU_sales,Critic_Score,User_Score,Developer,Rating
Grand Theft Auto: San Andreas,PS2,2004.0,Action,Take-Two Interactive,9.43,0.4,95,9,Rockstar North,M
Mario Kart Wii,Wii,2008.0,Racing,Nintendo,15.68,12.76,82,8.3,Nintendo,E
Wii Sports,Wii,2006.0,Sports,Nintendo,41.36,28.96,76,8,Nintendo,E
LEGO Star Wars,PS2,2005.0,Action,Eidos Interactive,1.9,0.5,78,8.1,Traveller's Tales,E
LEGO Star Wars,XB,2005.0,Action,Eidos Interactive,0.9,0.3,77,8.4,Traveller's Tales,E
Cars,PS2,2006.0,Racing,THQ,1.5,0.7,65,7.8,Rainbow Studios,E
Cars,DS,2006.0,Racing,THQ,0.8,0.1,68,tbd,Rainbow Studios,E
Shrek 2,PS2,2004.0,Action,Activision,1.2,0.8,69,8.2,Luxoflux,E
Madden NFL 06,PS2,2005.0,Sports,Electronic Arts,3.98,0.26,88,8,EA Tiburon,E
FIFA Soccer 06,PS2,2005.0,Sports,Electronic Arts,0.4,2.4,80,7.2,EA Canada,E
Halo 3,X360,2007.0,Shooter,Microsoft Game Studios,7.97,2.81,94,7.8,Bungie Studios,M
Gran Turismo 3: A-Spec,PS2,2001.0,Racing,Sony Computer Entertainment,6.85,5.09,95,8.4,Polyphony Digital,E
Gran Turismo 2,PS,1999.0,Racing,Sony Computer Entertainment,3.88,3.42,93,9,Polyphony Digital,E
Kingdom Hearts,PS2,2002.0,Role-Playing,Sony Computer Entertainment,3.64,1.2,85,9,Square,E
Ratchet & Clank,PS2,2002.0,Platform,Sony Computer Entertainment,1.8,1.3,88,8.8,Insomniac Games,T
Spider-Man: The Movie,PS2,2002.0,Action,Activision,2.5,0.9,76,6.8,Treyarch,T
Tony Hawk's Underground,PS2,2003.0,Sports,Activision,2.0,0.7,90,8.6,Neversoft,T
Need for Speed: Most Wanted,PS2,2005.0,Racing,Electronic Arts,2.0,1.9,82,9.1,EA Canada,T
Need for Speed: Most Wanted,X360,2005.0,Racing,Electronic Arts,1.0,0.1,83,8.5,EA Canada,T
God of War,PS2,2005.0,Action,Sony Computer Entertainment,2.2,1.4,94,9,SCE Santa Monica,M
Unrated Prototype,PC,2006.0,Action,Unknown,0.1,0.1,60,5,,E
Mystery Game,PS2,,Action,Unknown,0.1,0.1,60,5,Someone,E
The Sims 2,PC,2004.0,Simulation,Electronic Arts,0.1,5.0,90,8.6,Maxis,T
Wii Fit,Wii,2007.0,Sports,Nintendo,8.92,8.03,80,7.7,Nintendo EAD,E
LEGO Indiana Jones,Wii,2008.0,Action,LucasArts,1.9,0.9,78,7.9,Traveller's Tales,E
";

    pub fn sample_records() -> Vec<GameRecord> {
        let (dataset, _) = DatasetLoader::new()
            .load_str(SAMPLE_CSV)
            .expect("sample CSV loads");
        dataset.records().to_vec()
    }

    pub fn sample_dataset() -> Dataset {
        Dataset::new(sample_records())
    }

    pub fn record(name: &str, platform: &str, year: i32, genre: &str, rating: &str) -> GameRecord {
        GameRecord {
            name: name.to_string(),
            platform: platform.to_string(),
            year_of_release: year,
            genre: genre.to_string(),
            publisher: "Publisher".to_string(),
            critic_score: 75.0,
            user_score: 7.5,
            developer: "Developer".to_string(),
            rating: rating.to_string(),
        }
    }

    #[test]
    fn test_sample_csv_shape() {
        let (dataset, report) = DatasetLoader::new().load_str(SAMPLE_CSV).unwrap();

        assert_eq!(report.rows_read, 25);
        assert_eq!(report.pending_user_score, 1);
        assert_eq!(report.before_min_year, 1);
        assert_eq!(report.missing_field, 2);
        assert_eq!(dataset.len(), 21);
    }
}
