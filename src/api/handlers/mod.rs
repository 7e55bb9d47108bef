use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use axum_extra::extract::Query;
use serde::{Deserialize, Serialize};

use crate::dashboard;
use crate::dataset::{Dataset, DatasetInfo};
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// Filter validation errors are the caller's fault and are returned as-is.
fn bad_request(e: FilterError) -> (StatusCode, String) {
    tracing::warn!("Validation error: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string())
}

// ============================================================
// Query parameters
// ============================================================

/// Filter selection as query parameters. `country` and `company` may repeat:
/// `?country=USA&country=China&year_from=1990`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub country: Vec<String>,
    #[serde(default)]
    pub company: Vec<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl DashboardQuery {
    fn selection(self, dataset: &Dataset) -> Result<FilterSelection, (StatusCode, String)> {
        FilterSelection::from_parts(
            self.country,
            self.company,
            self.year_from,
            self.year_to,
            dataset.year_bounds(),
        )
        .map_err(bad_request)
    }
}

/// Filter selection as a JSON body, in the same shape as [`FilterSelection`].
///
/// The year range is read unchecked so an inverted range is reported as a
/// validation error rather than a body rejection.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DashboardBody {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub years: Option<YearBounds>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct YearBounds {
    pub start: i32,
    pub end: i32,
}

impl DashboardBody {
    fn selection(self, dataset: &Dataset) -> Result<FilterSelection, (StatusCode, String)> {
        FilterSelection::from_parts(
            self.countries,
            self.companies,
            self.years.map(|y| y.start),
            self.years.map(|y| y.end),
            dataset.year_bounds(),
        )
        .map_err(bad_request)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct LaunchesQuery {
    #[serde(default)]
    pub country: Vec<String>,
    #[serde(default)]
    pub company: Vec<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// One page of filtered launches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchPage {
    /// Number of rows matching the filter, before pagination.
    pub total: usize,
    pub offset: usize,
    pub records: Vec<LaunchRecord>,
}

// ============================================================
// Page
// ============================================================

pub async fn index() -> impl IntoResponse {
    Html(include_str!("../../../web/index.html"))
}

// ============================================================
// Health
// ============================================================

pub async fn health(State(dataset): State<Dataset>) -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "rows": dataset.len() }))
}

// ============================================================
// Dataset
// ============================================================

pub async fn get_dataset_info(State(dataset): State<Dataset>) -> Json<DatasetInfo> {
    Json(dataset.info().clone())
}

pub async fn get_options(State(dataset): State<Dataset>) -> Json<FilterOptions> {
    Json(dataset.options().clone())
}

// ============================================================
// Dashboard
// ============================================================

pub async fn get_dashboard(
    State(dataset): State<Dataset>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, (StatusCode, String)> {
    let selection = query.selection(&dataset)?;
    Ok(Json(dashboard::build_view(&dataset, &selection)))
}

pub async fn post_dashboard(
    State(dataset): State<Dataset>,
    Json(body): Json<DashboardBody>,
) -> Result<Json<DashboardView>, (StatusCode, String)> {
    let selection = body.selection(&dataset)?;
    Ok(Json(dashboard::build_view(&dataset, &selection)))
}

pub async fn get_kpis(
    State(dataset): State<Dataset>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Kpis>, (StatusCode, String)> {
    let selection = query.selection(&dataset)?;
    Ok(Json(dashboard::build_kpis(&dataset, &selection)))
}

pub async fn get_chart(
    State(dataset): State<Dataset>,
    Path(chart): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Figure>, (StatusCode, String)> {
    let kind = ChartKind::from_str(&chart)
        .ok_or((StatusCode::NOT_FOUND, format!("Unknown chart: {}", chart)))?;
    let selection = query.selection(&dataset)?;
    Ok(Json(dashboard::build_chart(&dataset, &selection, kind)))
}

// ============================================================
// Launches
// ============================================================

pub async fn list_launches(
    State(dataset): State<Dataset>,
    Query(query): Query<LaunchesQuery>,
) -> Result<Json<LaunchPage>, (StatusCode, String)> {
    let selection = FilterSelection::from_parts(
        query.country,
        query.company,
        query.year_from,
        query.year_to,
        dataset.year_bounds(),
    )
    .map_err(bad_request)?;

    let rows = dashboard::filter_launches(dataset.records(), &selection, dataset.year_bounds());

    // Apply pagination
    let offset = query.offset.unwrap_or(0) as usize;
    let page = rows.iter().skip(offset);
    let records: Vec<LaunchRecord> = match query.limit {
        Some(limit) => page.take(limit as usize).map(|r| (*r).clone()).collect(),
        None => page.map(|r| (*r).clone()).collect(),
    };

    Ok(Json(LaunchPage {
        total: rows.len(),
        offset,
        records,
    }))
}
