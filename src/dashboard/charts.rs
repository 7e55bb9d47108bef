//! Figure construction for the three chart panels.

use super::aggregate::{CountryCount, OutcomeCount, YearCount};
use crate::models::*;

pub const NO_DATA_TITLE: &str = "No data for selected filters";
pub const OUTCOMES_UNAVAILABLE_TITLE: &str = "Mission outcome data unavailable";

pub const LAUNCHES_TITLE: &str = "Number of Space Launches Per Year";
pub const TOP_COUNTRIES_TITLE: &str = "Top Countries by Launches";
pub const OUTCOMES_TITLE: &str = "Mission Outcomes Over Time";

/// How many countries the bar chart shows.
pub const TOP_COUNTRIES_LIMIT: usize = 15;

pub fn launches_over_time(counts: &[YearCount]) -> Figure {
    let trace = Trace {
        kind: TraceKind::Scatter,
        name: None,
        mode: Some("lines+markers".to_string()),
        x: AxisValues::Years(counts.iter().map(|c| c.year).collect()),
        y: counts.iter().map(|c| c.launches).collect(),
    };

    let mut xaxis = Axis::titled("Year");
    xaxis.rangeslider = Some(RangeSlider { visible: true });

    Figure {
        data: vec![trace],
        layout: Layout {
            title: Title::new(LAUNCHES_TITLE),
            xaxis,
            yaxis: Axis::titled("Launches"),
            barmode: None,
        },
    }
}

pub fn top_countries(counts: &[CountryCount]) -> Figure {
    let top = &counts[..counts.len().min(TOP_COUNTRIES_LIMIT)];
    let trace = Trace {
        kind: TraceKind::Bar,
        name: None,
        mode: None,
        x: AxisValues::Labels(top.iter().map(|c| c.country.clone()).collect()),
        y: top.iter().map(|c| c.total).collect(),
    };

    let mut xaxis = Axis::titled("Country");
    xaxis.tickangle = Some(-45);

    Figure {
        data: vec![trace],
        layout: Layout {
            title: Title::new(TOP_COUNTRIES_TITLE),
            xaxis,
            yaxis: Axis::titled("Total"),
            barmode: None,
        },
    }
}

/// Stacked bars with one trace per mission status, in order of first
/// appearance in `outcomes`.
pub fn mission_outcomes(outcomes: &[OutcomeCount]) -> Figure {
    if outcomes.is_empty() {
        return Figure::placeholder(OUTCOMES_UNAVAILABLE_TITLE);
    }

    let mut traces: Vec<Trace> = Vec::new();
    for outcome in outcomes {
        let existing = traces
            .iter()
            .position(|t| t.name.as_deref() == Some(outcome.status.as_str()));
        let idx = match existing {
            Some(idx) => idx,
            None => {
                traces.push(Trace {
                    kind: TraceKind::Bar,
                    name: Some(outcome.status.clone()),
                    mode: None,
                    x: AxisValues::Years(Vec::new()),
                    y: Vec::new(),
                });
                traces.len() - 1
            }
        };
        let trace = &mut traces[idx];
        if let AxisValues::Years(years) = &mut trace.x {
            years.push(outcome.year);
        }
        trace.y.push(outcome.count);
    }

    Figure {
        data: traces,
        layout: Layout {
            title: Title::new(OUTCOMES_TITLE),
            xaxis: Axis::titled("Year"),
            yaxis: Axis::titled("Count"),
            barmode: Some("stack".to_string()),
        },
    }
}
