use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while interpreting a filter selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid year range: {start} is after {end}")]
    InvertedYearRange { start: i32, end: i32 },
}

/// An inclusive range of launch years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange")]
pub struct YearRange {
    start: i32,
    end: i32,
}

#[derive(Deserialize)]
struct RawYearRange {
    start: i32,
    end: i32,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = FilterError;

    fn try_from(raw: RawYearRange) -> Result<Self, Self::Error> {
        YearRange::new(raw.start, raw.end)
    }
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvertedYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

/// The user's current dropdown and slider state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected countries. Empty means all countries.
    #[serde(default)]
    pub countries: Vec<String>,
    /// Selected companies. Empty means all companies.
    #[serde(default)]
    pub companies: Vec<String>,
    /// Selected years. `None` means the full range of the dataset.
    #[serde(default)]
    pub years: Option<YearRange>,
}

impl FilterSelection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companies = companies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years(mut self, years: YearRange) -> Self {
        self.years = Some(years);
        self
    }

    /// Build a selection from optional year bounds, filling a missing bound
    /// from `bounds`.
    pub fn from_parts(
        countries: Vec<String>,
        companies: Vec<String>,
        year_from: Option<i32>,
        year_to: Option<i32>,
        bounds: YearRange,
    ) -> Result<Self, FilterError> {
        let years = match (year_from, year_to) {
            (None, None) => None,
            (from, to) => Some(YearRange::new(
                from.unwrap_or(bounds.start()),
                to.unwrap_or(bounds.end()),
            )?),
        };
        Ok(Self {
            countries,
            companies,
            years,
        })
    }
}

/// Values offered by the dropdowns and the year slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub companies: Vec<String>,
    pub min_year: i32,
    pub max_year: i32,
    /// Labelled slider ticks, every [`MARK_STEP`] years from `min_year`.
    pub marks: Vec<i32>,
}

/// Spacing between labelled ticks on the year slider.
pub const MARK_STEP: usize = 5;

impl FilterOptions {
    pub fn year_bounds(&self) -> YearRange {
        YearRange {
            start: self.min_year,
            end: self.max_year,
        }
    }
}

/// Slider ticks from `min` to `max` inclusive, every [`MARK_STEP`] years.
pub fn year_marks(min: i32, max: i32) -> Vec<i32> {
    (min..=max).step_by(MARK_STEP).collect()
}
