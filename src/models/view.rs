use serde::{Deserialize, Serialize};

use super::Figure;

/// The four summary numbers computed over the filtered rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_launches: usize,
    pub total_successes: usize,
    /// Percentage rounded to two decimals. `None` when no rows matched.
    pub success_rate: Option<f64>,
    pub active_rockets: usize,
}

impl Kpis {
    /// The success rate as displayed: `50.0%`, `33.33%`, or `N/A`.
    pub fn success_rate_label(&self) -> String {
        match self.success_rate {
            Some(rate) if rate.fract() == 0.0 => format!("{:.1}%", rate),
            Some(rate) => format!("{}%", rate),
            None => "N/A".to_string(),
        }
    }

    pub fn cards(&self) -> Vec<KpiCard> {
        vec![
            KpiCard::new("Total launches", self.total_launches.to_string()),
            KpiCard::new("Total successes", self.total_successes.to_string()),
            KpiCard::new("Success rate", self.success_rate_label()),
            KpiCard::new("Active rockets", self.active_rockets.to_string()),
        ]
    }
}

/// A KPI as shown in the card row above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
}

impl KpiCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// The three chart panels, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    LaunchesTime,
    TopCountries,
    MissionsOutcomes,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::LaunchesTime,
        ChartKind::TopCountries,
        ChartKind::MissionsOutcomes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LaunchesTime => "launches_time",
            Self::TopCountries => "top_countries",
            Self::MissionsOutcomes => "missions_outcomes",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "launches_time" => Some(Self::LaunchesTime),
            "top_countries" => Some(Self::TopCountries),
            "missions_outcomes" => Some(Self::MissionsOutcomes),
            _ => None,
        }
    }
}

/// Everything produced by one filter interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub kpis: Kpis,
    pub cards: Vec<KpiCard>,
    pub launches_time: Figure,
    pub top_countries: Figure,
    pub missions_outcomes: Figure,
    pub filtered_rows: usize,
    /// Status line under the charts, e.g. `Filtered rows: 42`.
    pub debug: String,
}

impl DashboardView {
    pub fn chart(&self, kind: ChartKind) -> &Figure {
        match kind {
            ChartKind::LaunchesTime => &self.launches_time,
            ChartKind::TopCountries => &self.top_countries,
            ChartKind::MissionsOutcomes => &self.missions_outcomes,
        }
    }
}
