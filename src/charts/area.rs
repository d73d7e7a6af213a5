//! Release-count stacked area chart

use plotly::common::{Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};
use std::collections::{BTreeMap, BTreeSet};

use super::{palette_color, styled_title};
use crate::dataset::GameRecord;

const TITLE: &str = "Game releases by year and platform";
const X_LABEL: &str = "Year of release";
const Y_LABEL: &str = "Number of games";

/// Number of releases per `(year, platform)` pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseCounts {
    counts: BTreeMap<(i32, String), usize>,
}

impl ReleaseCounts {
    /// Releases for one pair, 0 when the pair never occurs
    pub fn get(&self, year: i32, platform: &str) -> usize {
        self.counts
            .get(&(year, platform.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Years with at least one release, ascending
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.counts.keys().map(|(year, _)| *year).collect();
        years.into_iter().collect()
    }

    /// Platforms with at least one release, by name
    pub fn platforms(&self) -> Vec<&str> {
        let platforms: BTreeSet<&str> = self.counts.keys().map(|(_, p)| p.as_str()).collect();
        platforms.into_iter().collect()
    }

    /// Sum over all pairs
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &str, usize)> + '_ {
        self.counts
            .iter()
            .map(|((year, platform), count)| (*year, platform.as_str(), *count))
    }
}

/// Group the view by `(year, platform)` and count rows
pub fn release_counts(view: &[&GameRecord]) -> ReleaseCounts {
    let mut counts = BTreeMap::new();

    for record in view {
        *counts
            .entry((record.year_of_release, record.platform.clone()))
            .or_insert(0) += 1;
    }

    ReleaseCounts { counts }
}

/// Stacked area of releases per year, one band per platform
///
/// Each band has a value for every year present in the grouped counts,
/// zero where that platform had no release, so the stack never has holes.
pub fn area_figure(view: &[&GameRecord]) -> Plot {
    let counts = release_counts(view);
    let years = counts.years();

    let mut plot = Plot::new();

    for (idx, platform) in counts.platforms().into_iter().enumerate() {
        let values: Vec<usize> = years
            .iter()
            .map(|year| counts.get(*year, platform))
            .collect();

        let trace = Scatter::new(years.clone(), values)
            .mode(Mode::Lines)
            .name(platform)
            .stack_group("releases")
            .line(Line::new().color(palette_color(idx)));
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(styled_title(TITLE))
        .x_axis(Axis::new().title(Title::from(X_LABEL)))
        .y_axis(Axis::new().title(Title::from(Y_LABEL)));
    plot.set_layout(layout);

    plot
}
