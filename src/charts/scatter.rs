//! Score scatter chart

use plotly::common::{Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use super::{palette_color, styled_title};
use crate::dataset::GameRecord;

const TITLE: &str = "Game scores by genre";
const X_LABEL: &str = "User score";
const Y_LABEL: &str = "Critic score";

/// Points of one genre
struct GenreSeries<'a> {
    genre: &'a str,
    user_scores: Vec<f64>,
    critic_scores: Vec<f64>,
}

/// Split the view by genre, genres in order of first appearance
fn series_by_genre<'a>(view: &[&'a GameRecord]) -> Vec<GenreSeries<'a>> {
    let mut series: Vec<GenreSeries<'a>> = Vec::new();

    for record in view {
        let idx = match series.iter().position(|s| s.genre == record.genre) {
            Some(idx) => idx,
            None => {
                series.push(GenreSeries {
                    genre: &record.genre,
                    user_scores: Vec::new(),
                    critic_scores: Vec::new(),
                });
                series.len() - 1
            }
        };

        series[idx].user_scores.push(record.user_score);
        series[idx].critic_scores.push(record.critic_score);
    }

    series
}

/// User score (x) against critic score (y), coloured by genre
pub fn scatter_figure(view: &[&GameRecord]) -> Plot {
    let mut plot = Plot::new();

    for (idx, series) in series_by_genre(view).into_iter().enumerate() {
        let trace = Scatter::new(series.user_scores, series.critic_scores)
            .mode(Mode::Markers)
            .name(series.genre)
            .marker(Marker::new().color(palette_color(idx)));
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(styled_title(TITLE))
        .x_axis(Axis::new().title(Title::from(X_LABEL)))
        .y_axis(Axis::new().title(Title::from(Y_LABEL)));
    plot.set_layout(layout);

    plot
}
