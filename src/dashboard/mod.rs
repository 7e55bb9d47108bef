//! The filter, aggregate, render cycle run on every interaction.

mod aggregate;
pub mod charts;

pub use aggregate::*;

use crate::dataset::Dataset;
use crate::models::*;

/// Filter `dataset` by `selection` and compute the KPIs and all three charts.
pub fn build_view(dataset: &Dataset, selection: &FilterSelection) -> DashboardView {
    let rows = filter_launches(dataset.records(), selection, dataset.year_bounds());
    let kpis = compute_kpis(&rows, dataset.columns());

    tracing::debug!(
        countries = selection.countries.len(),
        companies = selection.companies.len(),
        rows = rows.len(),
        "Computed dashboard view"
    );

    let (launches_time, top_countries, missions_outcomes) = if rows.is_empty() {
        let empty = Figure::placeholder(charts::NO_DATA_TITLE);
        (empty.clone(), empty.clone(), empty)
    } else {
        let outcomes = if dataset.columns().mission_status {
            mission_outcomes(&rows)
        } else {
            Vec::new()
        };
        (
            charts::launches_over_time(&launches_per_year(&rows)),
            charts::top_countries(&country_counts(&rows)),
            charts::mission_outcomes(&outcomes),
        )
    };

    DashboardView {
        cards: kpis.cards(),
        kpis,
        launches_time,
        top_countries,
        missions_outcomes,
        filtered_rows: rows.len(),
        debug: format!("Filtered rows: {}", rows.len()),
    }
}

/// Compute a single chart for `selection`.
pub fn build_chart(dataset: &Dataset, selection: &FilterSelection, kind: ChartKind) -> Figure {
    let rows = filter_launches(dataset.records(), selection, dataset.year_bounds());
    if rows.is_empty() {
        return Figure::placeholder(charts::NO_DATA_TITLE);
    }
    match kind {
        ChartKind::LaunchesTime => charts::launches_over_time(&launches_per_year(&rows)),
        ChartKind::TopCountries => charts::top_countries(&country_counts(&rows)),
        ChartKind::MissionsOutcomes if dataset.columns().mission_status => {
            charts::mission_outcomes(&mission_outcomes(&rows))
        }
        ChartKind::MissionsOutcomes => charts::mission_outcomes(&[]),
    }
}

/// Compute only the KPIs for `selection`.
pub fn build_kpis(dataset: &Dataset, selection: &FilterSelection) -> Kpis {
    let rows = filter_launches(dataset.records(), selection, dataset.year_bounds());
    compute_kpis(&rows, dataset.columns())
}
