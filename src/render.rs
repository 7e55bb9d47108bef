//! Plain-text rendering of a dashboard view for the terminal.

use crate::models::{AxisValues, DashboardView, Figure};

const BAR: char = '█';
const BAR_WIDTH: usize = 40;

/// Render KPIs, the yearly launch series and the top countries chart.
///
/// Example output:
/// ```text
/// Total launches: 3 | Total successes: 2 | Success rate: 66.67% | Active rockets: 1
///
/// Number of Space Launches Per Year
/// 1957  1
/// 2020  2
///
/// Top Countries by Launches
/// USA         ████████████████████████████████████████ 2
/// Kazakhstan  ████████████████████ 1
///
/// Filtered rows: 3
/// ```
pub fn render_summary(view: &DashboardView) -> String {
    let mut output = String::new();

    let cards: Vec<String> = view
        .cards
        .iter()
        .map(|c| format!("{}: {}", c.title, c.value))
        .collect();
    output.push_str(&cards.join(" | "));
    output.push_str("\n\n");

    render_series(&mut output, &view.launches_time);
    output.push('\n');
    render_bars(&mut output, &view.top_countries);
    output.push('\n');

    output.push_str(&view.debug);
    output.push('\n');
    output
}

/// One `label  value` line per point of the first trace.
fn render_series(output: &mut String, figure: &Figure) {
    output.push_str(figure.title());
    output.push('\n');
    let Some(trace) = figure.data.first() else {
        return;
    };
    let labels = labels(&trace.x);
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for (label, value) in labels.iter().zip(&trace.y) {
        output.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
    }
}

/// Horizontal bars scaled so the largest value spans [`BAR_WIDTH`].
fn render_bars(output: &mut String, figure: &Figure) {
    output.push_str(figure.title());
    output.push('\n');
    let Some(trace) = figure.data.first() else {
        return;
    };
    let labels = labels(&trace.x);
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = trace.y.iter().copied().max().unwrap_or(0).max(1);
    for (label, value) in labels.iter().zip(&trace.y) {
        let len = (*value as usize * BAR_WIDTH).div_ceil(max as usize);
        let bar: String = std::iter::repeat(BAR).take(len).collect();
        output.push_str(&format!(
            "{:<width$}  {} {}\n",
            label,
            bar,
            value,
            width = width
        ));
    }
}

fn labels(values: &AxisValues) -> Vec<String> {
    match values {
        AxisValues::Years(years) => years.iter().map(|y| y.to_string()).collect(),
        AxisValues::Labels(labels) => labels.clone(),
    }
}
