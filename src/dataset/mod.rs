mod columns;

use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::*;

pub use columns::{normalize_header, ColumnIndex, PLAUSIBLE_YEARS};

/// File name looked up when no dataset path is configured.
pub const DEFAULT_DATA_FILE: &str = "cleaned_space_missions.csv";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("dataset contains no rows with a year")]
    Empty,
}

/// Summary of where the table came from and what was discarded while loading.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub source: Option<String>,
    pub rows: usize,
    /// Rows without a usable year.
    pub dropped_rows: usize,
    pub columns: ColumnPresence,
    pub loaded_at: DateTime<Utc>,
}

/// The launch table, loaded once and shared read-only.
///
/// Cloning is cheap: the records live behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[LaunchRecord]>,
    options: Arc<FilterOptions>,
    info: Arc<DatasetInfo>,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut dataset = Self::from_reader(file)?;
        Arc::make_mut(&mut dataset.info).source = Some(path.display().to_string());
        tracing::info!(
            "Loaded {} launches from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let index = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut dropped = 0;
        for result in rdr.records() {
            let row = result?;
            match index.parse_row(&row) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            tracing::warn!("Dropped {} rows without a usable year", dropped);
        }

        Self::from_records(records, index.presence(), dropped)
    }

    /// Build a dataset from already-parsed records.
    pub fn from_records(
        records: Vec<LaunchRecord>,
        columns: ColumnPresence,
        dropped_rows: usize,
    ) -> Result<Self, DatasetError> {
        let options = build_options(&records).ok_or(DatasetError::Empty)?;
        let info = DatasetInfo {
            source: None,
            rows: records.len(),
            dropped_rows,
            columns,
            loaded_at: Utc::now(),
        };
        Ok(Self {
            records: records.into(),
            options: Arc::new(options),
            info: Arc::new(info),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> ColumnPresence {
        self.info.columns
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn year_bounds(&self) -> YearRange {
        self.options.year_bounds()
    }

    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }
}

fn build_options(records: &[LaunchRecord]) -> Option<FilterOptions> {
    let min_year = records.iter().map(|r| r.year).min()?;
    let max_year = records.iter().map(|r| r.year).max()?;

    let countries: BTreeSet<&str> = records.iter().filter_map(|r| r.country.as_deref()).collect();
    let companies: BTreeSet<&str> = records.iter().filter_map(|r| r.company.as_deref()).collect();

    Some(FilterOptions {
        countries: countries.into_iter().map(String::from).collect(),
        companies: companies.into_iter().map(String::from).collect(),
        min_year,
        max_year,
        marks: year_marks(min_year, max_year),
    })
}

/// Where to look for the dataset when none is configured: the working
/// directory first, then the platform data directory.
pub fn default_data_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_DATA_FILE);
    if local.exists() {
        return local;
    }
    directories::ProjectDirs::from("", "", "launchdeck")
        .map(|dirs| dirs.data_dir().join(DEFAULT_DATA_FILE))
        .unwrap_or(local)
}
