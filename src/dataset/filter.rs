//! Filtering
//!
//! The dashboard's one query: genre membership, rating membership and an
//! inclusive year range, all three required.

use serde::{Deserialize, Serialize};

use super::types::GameRecord;

/// A set of selected values from a multi-select control
///
/// Clients may send a list, a bare string (a single selection) or `null`
/// (nothing selected); all three normalise to a list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "SelectionRepr", into = "Vec<String>")]
pub struct Selection(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Many(Vec<String>),
    One(String),
    Nothing(()),
}

impl From<SelectionRepr> for Selection {
    fn from(repr: SelectionRepr) -> Self {
        match repr {
            SelectionRepr::Many(values) => Selection(values),
            SelectionRepr::One(value) => Selection(vec![value]),
            SelectionRepr::Nothing(()) => Selection(Vec::new()),
        }
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.0
    }
}

impl Selection {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection(values.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Inclusive release-year interval, sent as `[lo, hi]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl From<[i32; 2]> for YearRange {
    fn from([lo, hi]: [i32; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<YearRange> for [i32; 2] {
    fn from(range: YearRange) -> Self {
        [range.lo, range.hi]
    }
}

impl YearRange {
    pub fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }

    /// `lo <= year <= hi`; an inverted range contains nothing
    pub fn contains(&self, year: i32) -> bool {
        self.lo <= year && year <= self.hi
    }
}

/// The three filter inputs of the dashboard
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FilterParams {
    #[serde(default)]
    pub genres: Selection,
    #[serde(default)]
    pub ratings: Selection,
    pub years: YearRange,
}

impl FilterParams {
    pub fn new(genres: Selection, ratings: Selection, years: YearRange) -> Self {
        Self {
            genres,
            ratings,
            years,
        }
    }

    /// Whether a single record satisfies all three predicates
    pub fn matches(&self, record: &GameRecord) -> bool {
        self.genres.contains(&record.genre)
            && self.ratings.contains(&record.rating)
            && self.years.contains(record.year_of_release)
    }
}

/// Select the records matching `params`, preserving input order
///
/// Takes any iterator of borrowed records, so a previously filtered view can
/// be filtered again.
pub fn filter_records<'a, I>(records: I, params: &FilterParams) -> Vec<&'a GameRecord>
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    records
        .into_iter()
        .filter(|record| params.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{record, sample_records};

    fn params(genres: &[&str], ratings: &[&str], lo: i32, hi: i32) -> FilterParams {
        FilterParams::new(
            Selection::new(genres.iter().copied()),
            Selection::new(ratings.iter().copied()),
            YearRange::new(lo, hi),
        )
    }

    #[test]
    fn test_action_e_2005_2006() {
        let records = sample_records();
        let view = filter_records(&records, &params(&["Action"], &["E"], 2005, 2006));

        assert!(!view.is_empty());
        for r in &view {
            assert_eq!(r.genre, "Action");
            assert_eq!(r.rating, "E");
            assert!((2005..=2006).contains(&r.year_of_release));
        }
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let records = sample_records();
        let p = params(&["Action", "Sports"], &["E", "T"], 2003, 2008);
        let view = filter_records(&records, &p);

        assert!(view.iter().all(|r| p.matches(r)));
        let expected = records.iter().filter(|r| p.matches(r)).count();
        assert_eq!(view.len(), expected);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_records();
        let p = params(&["Action", "Racing"], &["E"], 2000, 2010);

        let first = filter_records(&records, &p);
        let second = filter_records(first.iter().copied(), &p);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_genres_yield_nothing() {
        let records = sample_records();
        let view = filter_records(&records, &params(&[], &["E", "T", "M"], 2000, 2020));
        assert!(view.is_empty());
    }

    #[test]
    fn test_year_bounds_inclusive() {
        let records = vec![
            record("A", "PS2", 2004, "Action", "E"),
            record("B", "PS2", 2005, "Action", "E"),
            record("C", "PS2", 2006, "Action", "E"),
            record("D", "PS2", 2007, "Action", "E"),
        ];
        let view = filter_records(&records, &params(&["Action"], &["E"], 2005, 2006));
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let records = sample_records();
        let view = filter_records(&records, &params(&["Action"], &["E"], 2008, 2002));
        assert!(view.is_empty());
    }

    #[test]
    fn test_selection_from_list() {
        let s: Selection = serde_json::from_str(r#"["Action", "Sports"]"#).unwrap();
        assert_eq!(s.as_slice(), &["Action".to_string(), "Sports".to_string()]);
    }

    #[test]
    fn test_selection_from_bare_string() {
        let s: Selection = serde_json::from_str(r#""Action""#).unwrap();
        assert_eq!(s, Selection::new(["Action"]));
    }

    #[test]
    fn test_selection_from_null() {
        let s: Selection = serde_json::from_str("null").unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_filter_params_deserialize() {
        let p: FilterParams = serde_json::from_str(
            r#"{"genres": "Action", "ratings": ["E", "T"], "years": [2002, 2010]}"#,
        )
        .unwrap();

        assert_eq!(p.genres, Selection::new(["Action"]));
        assert_eq!(p.ratings.len(), 2);
        assert_eq!(p.years, YearRange::new(2002, 2010));

        let p: FilterParams = serde_json::from_str(r#"{"years": [2002, 2010]}"#).unwrap();
        assert!(p.genres.is_empty());
        assert!(p.ratings.is_empty());
    }

    #[test]
    fn test_filter_params_rejects_bad_years() {
        assert!(serde_json::from_str::<FilterParams>(r#"{"years": [2002]}"#).is_err());
        assert!(serde_json::from_str::<FilterParams>(r#"{"genres": []}"#).is_err());
    }

    #[test]
    fn test_scalar_selection_matches_list_selection() {
        let records = sample_records();
        let scalar: FilterParams =
            serde_json::from_str(r#"{"genres": "Action", "ratings": "E", "years": [2000, 2016]}"#)
                .unwrap();
        let list = params(&["Action"], &["E"], 2000, 2016);

        assert_eq!(
            filter_records(&records, &scalar),
            filter_records(&records, &list)
        );
    }
}
