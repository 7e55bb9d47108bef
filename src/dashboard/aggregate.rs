//! Filtering and grouping over the launch table.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub launches: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub year: i32,
    pub status: String,
    pub count: u64,
}

/// Rows matching `selection`. A missing year range falls back to `bounds`.
///
/// Borrows from `records`; the table itself is never touched.
pub fn filter_launches<'a>(
    records: &'a [LaunchRecord],
    selection: &FilterSelection,
    bounds: YearRange,
) -> Vec<&'a LaunchRecord> {
    let years = selection.years.unwrap_or(bounds);
    records
        .iter()
        .filter(|r| years.contains(r.year))
        .filter(|r| matches_any(&selection.countries, r.country.as_deref()))
        .filter(|r| matches_any(&selection.companies, r.company.as_deref()))
        .collect()
}

fn matches_any(selected: &[String], value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    value.is_some_and(|v| selected.iter().any(|s| s == v))
}

pub fn compute_kpis(rows: &[&LaunchRecord], columns: ColumnPresence) -> Kpis {
    let total = rows.len();
    let successes = if columns.mission_status {
        rows.iter().filter(|r| r.is_success()).count()
    } else {
        0
    };
    let active = if columns.rocket_status {
        rows.iter().filter(|r| r.is_active_rocket()).count()
    } else {
        0
    };

    Kpis {
        total_launches: total,
        total_successes: successes,
        success_rate: (total > 0).then(|| round2(successes as f64 / total as f64 * 100.0)),
        active_rockets: active,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Launch counts per year, ascending by year.
pub fn launches_per_year(rows: &[&LaunchRecord]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.year).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(year, launches)| YearCount { year, launches })
        .collect()
}

/// Launch counts per country, most launches first. Ties are ordered by name.
/// Rows without a country are not counted.
pub fn country_counts(rows: &[&LaunchRecord]) -> Vec<CountryCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for country in rows.iter().filter_map(|r| r.country.as_deref()) {
        *counts.entry(country).or_default() += 1;
    }
    let mut counts: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, total)| CountryCount {
            country: country.to_string(),
            total,
        })
        .collect();
    counts.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.country.cmp(&b.country)));
    counts
}

/// Launch counts per (year, mission status), ordered by year then status.
/// Rows without a status are not counted.
pub fn mission_outcomes(rows: &[&LaunchRecord]) -> Vec<OutcomeCount> {
    let mut counts: BTreeMap<(i32, &str), u64> = BTreeMap::new();
    for row in rows {
        if let Some(status) = row.mission_status.as_deref() {
            *counts.entry((row.year, status)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|((year, status), count)| OutcomeCount {
            year,
            status: status.to_string(),
            count,
        })
        .collect()
}
