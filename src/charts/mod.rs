//! Dashboard Charts
//!
//! The three outputs recomputed on every filter change:
//!
//! - [`scatter_figure`]: user vs. critic score, one trace per genre
//! - [`area_figure`]: stacked releases per year, one band per platform
//! - [`games_count`]: the number of matching games
//!
//! Each is a pure function of a filtered view. Figures are `plotly::Plot`s,
//! serialized with `Plot::to_json` for the page's plotly.js.

pub mod area;
pub mod scatter;

pub use area::{area_figure, release_counts, ReleaseCounts};
pub use scatter::scatter_figure;

use plotly::color::Rgb;
use plotly::common::{Font, Title};
use serde::Serialize;

use crate::dataset::GameRecord;

/// The Dark2 qualitative palette
const DARK2: [(u8, u8, u8); 8] = [
    (27, 158, 119),
    (217, 95, 2),
    (117, 112, 179),
    (231, 41, 138),
    (102, 166, 30),
    (230, 171, 2),
    (166, 118, 29),
    (102, 102, 102),
];

/// Title colour shared by both charts
const TITLE_COLOR: (u8, u8, u8) = (217, 95, 2);

/// Colour for the `index`-th trace, cycling through the palette
pub fn palette_color(index: usize) -> Rgb {
    let (r, g, b) = DARK2[index % DARK2.len()];
    Rgb::new(r, g, b)
}

/// A chart title in the dashboard's title colour
fn styled_title(text: &str) -> Title {
    let (r, g, b) = TITLE_COLOR;
    Title::from(text).font(Font::new().color(Rgb::new(r, g, b)))
}

/// The count label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GamesCount {
    pub count: usize,
    pub text: String,
}

/// Count the filtered view and format the label
pub fn games_count(view: &[&GameRecord]) -> GamesCount {
    GamesCount {
        count: view.len(),
        text: games_count_text(view.len()),
    }
}

pub fn games_count_text(count: usize) -> String {
    format!("Selected games: {}", count)
}
