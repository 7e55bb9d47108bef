//! Launchdeck: an interactive dashboard over a table of space launches.
//!
//! The table is loaded once by [`dataset::Dataset`]. Every interaction runs
//! [`dashboard::build_view`], which filters the table, computes the KPIs and
//! builds the three charts served by [`api::create_router`].

pub mod api;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod models;
pub mod render;
