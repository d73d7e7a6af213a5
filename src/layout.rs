//! Dashboard page
//!
//! Renders the single HTML page: heading, description, the genre and rating
//! multi-selects, the count label, the two chart placeholders and the year
//! range. The page script posts the current filter to the three output
//! endpoints whenever a control changes and redraws with plotly.js.

use serde::Serialize;

use crate::dataset::{Domains, Selection, YearRange};

const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const DEFAULT_GENRES: [&str; 3] = ["Action", "Sports", "Racing"];
const DEFAULT_RATINGS: [&str; 1] = ["E"];
const DEFAULT_YEARS: (i32, i32) = (2002, 2010);

/// Initial state of the filter controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDefaults {
    pub genres: Selection,
    pub ratings: Selection,
    pub years: YearRange,
}

impl FilterDefaults {
    /// Defaults restricted to what the loaded data actually contains
    pub fn for_domains(domains: &Domains) -> Self {
        let pick = |wanted: &[&str], available: &[String]| {
            Selection::new(
                wanted
                    .iter()
                    .filter(|w| available.iter().any(|a| a.as_str() == **w))
                    .copied(),
            )
        };

        let (lo, hi) = DEFAULT_YEARS;
        let years = match (domains.min_year(), domains.max_year()) {
            (Some(min), Some(max)) => YearRange::new(lo.clamp(min, max), hi.clamp(min, max)),
            _ => YearRange::new(lo, hi),
        };

        Self {
            genres: pick(&DEFAULT_GENRES[..], &domains.genres),
            ratings: pick(&DEFAULT_RATINGS[..], &domains.ratings),
            years,
        }
    }
}

/// Render the dashboard page for the given domains
pub fn render_page(domains: &Domains) -> String {
    let defaults = FilterDefaults::for_domains(domains);
    let (min_year, max_year) = match (domains.min_year(), domains.max_year()) {
        (Some(min), Some(max)) => (min, max),
        _ => (defaults.years.lo, defaults.years.hi),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Games Dashboard</title>
    <script src="{plotly_js}"></script>
    <style>{css}</style>
</head>
<body>
    <h1 class="banner">Video game industry dashboard</h1>
    <h4 class="text">
        The dashboard shows games released from {min_year} to {max_year} across
        platforms, ratings and genres. Use it to explore how game popularity
        depends on release year, genre and so on.
    </h4>
    <h4 class="text">
        How to use: pick genres, ratings and a year range in the filters.
        The charts below update with the selected values.
    </h4>
    <div class="filters">
        <div class="filter left">
            <label for="filter-genres">Genres:</label>
            {genre_select}
        </div>
        <div class="filter right">
            <label for="filter-ratings">Ratings:</label>
            {rating_select}
        </div>
    </div>
    <div class="banner count"><h4 id="games-count"></h4></div>
    <div class="charts">
        <div id="graph-area" class="chart"></div>
        <div id="graph-scatter" class="chart"></div>
    </div>
    <div class="years">
        <label>Release years: <span id="years-label"></span></label>
        <input type="range" id="filter-years-lo" min="{min_year}" max="{max_year}" step="1" value="{lo}" list="year-marks">
        <input type="range" id="filter-years-hi" min="{min_year}" max="{max_year}" step="1" value="{hi}" list="year-marks">
        <datalist id="year-marks">{year_marks}</datalist>
    </div>
    <script>{js}</script>
</body>
</html>"#,
        plotly_js = PLOTLY_JS_URL,
        css = inline_css(),
        js = inline_javascript(),
        min_year = min_year,
        max_year = max_year,
        lo = defaults.years.lo,
        hi = defaults.years.hi,
        genre_select = render_multi_select("filter-genres", &domains.genres, &defaults.genres),
        rating_select = render_multi_select("filter-ratings", &domains.ratings, &defaults.ratings),
        year_marks = render_year_marks(&domains.years),
    )
}

fn render_multi_select(id: &str, options: &[String], selected: &Selection) -> String {
    let options: String = options
        .iter()
        .map(|option| {
            let value = html_escape(option);
            let attr = if selected.contains(option) { " selected" } else { "" };
            format!(r#"<option value="{value}"{attr}>{value}</option>"#)
        })
        .collect();

    format!(r#"<select id="{id}" multiple size="6">{options}</select>"#)
}

fn render_year_marks(years: &[i32]) -> String {
    years
        .iter()
        .map(|year| format!(r#"<option value="{year}" label="{year}"></option>"#))
        .collect()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
body { width: 100%; margin: 0; font-family: sans-serif; }
.banner { text-align: center; padding: 10px; background-color: rgba(217, 95, 2, 0.5); }
.text { padding-left: 10%; padding-right: 10%; }
.filters { padding: 10px; overflow: hidden; }
.filter { width: 45%; display: inline-block; color: rgb(102, 102, 102); }
.filter select { width: 100%; }
.left { float: left; }
.right { float: right; }
.count { margin: 10px 0; }
.charts { width: 100%; display: flex; }
.chart { width: 50%; min-height: 450px; }
.years { width: 100%; padding: 10px; text-align: center; }
.years input { width: 45%; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    const genres = document.getElementById('filter-genres');
    const ratings = document.getElementById('filter-ratings');
    const lo = document.getElementById('filter-years-lo');
    const hi = document.getElementById('filter-years-hi');

    function selected(select) {
        return Array.from(select.selectedOptions).map(o => o.value);
    }

    function currentFilter() {
        if (Number(lo.value) > Number(hi.value)) {
            hi.value = lo.value;
        }
        document.getElementById('years-label').textContent = lo.value + ' - ' + hi.value;
        return {
            genres: selected(genres),
            ratings: selected(ratings),
            years: [Number(lo.value), Number(hi.value)],
        };
    }

    function post(path, body) {
        return fetch(path, {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(body),
        }).then(r => r.json());
    }

    let latest = 0;

    // Responses from an older refresh are dropped
    function whenCurrent(seq, render) {
        return value => {
            if (seq === latest) {
                render(value);
            }
        };
    }

    function refresh() {
        const seq = ++latest;
        const filter = currentFilter();
        post('/api/v1/figures/scatter', filter)
            .then(whenCurrent(seq, fig => Plotly.react('graph-scatter', fig.data, fig.layout)));
        post('/api/v1/figures/area', filter)
            .then(whenCurrent(seq, fig => Plotly.react('graph-area', fig.data, fig.layout)));
        post('/api/v1/count', filter)
            .then(whenCurrent(seq, res => {
                document.getElementById('games-count').textContent = res.text;
            }));
    }

    [genres, ratings, lo, hi].forEach(el => el.addEventListener('change', refresh));
    refresh();
})();
"#
}
