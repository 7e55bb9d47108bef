//! Domain models for Launchdeck.
//!
//! # Core Concepts
//!
//! - [`LaunchRecord`]: One row of the launch table. The table is loaded once and
//!   never mutated; every view is a fresh computation over it.
//! - [`FilterSelection`]: What the user picked in the country and company
//!   dropdowns and the year slider. Empty lists mean "everything".
//! - [`Kpis`]: The four summary numbers shown above the charts.
//! - [`Figure`]: A chart description in the shape Plotly.js consumes.
//! - [`DashboardView`]: Everything one interaction produces.

mod figure;
mod filter;
mod launch;
mod view;

pub use figure::*;
pub use filter::*;
pub use launch::*;
pub use view::*;
