//! Header normalisation and row parsing.

use std::ops::RangeInclusive;

use csv::StringRecord;

use super::DatasetError;
use crate::models::{ColumnPresence, LaunchRecord};

const YEAR: &str = "Year";
const COUNTRY: &str = "Country";
const COMPANY: &str = "Company_Name";
const STATUS_MISSION: &str = "Status_Mission";
const STATUS_ROCKET: &str = "Status_Rocket";

/// Cell values read as missing, matching the usual spreadsheet/dataframe
/// export conventions.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Years outside this range are treated as corrupt and the row is dropped.
pub const PLAUSIBLE_YEARS: RangeInclusive<i32> = 1900..=2200;

/// Normalise a CSV header: surrounding whitespace is removed, and inner
/// spaces and dashes become underscores (`"Status Rocket"` -> `Status_Rocket`).
pub fn normalize_header(raw: &str) -> String {
    raw.trim().replace([' ', '-'], "_")
}

/// Positions of the columns we read, resolved once from the header row.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndex {
    year: usize,
    country: usize,
    company: usize,
    mission_status: Option<usize>,
    rocket_status: Option<usize>,
}

impl ColumnIndex {
    pub fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |name: &str| names.iter().position(|n| n == name);
        let require = |name: &'static str| find(name).ok_or(DatasetError::MissingColumn(name));

        Ok(Self {
            year: require(YEAR)?,
            country: require(COUNTRY)?,
            company: require(COMPANY)?,
            mission_status: find(STATUS_MISSION),
            rocket_status: find(STATUS_ROCKET),
        })
    }

    pub fn presence(&self) -> ColumnPresence {
        ColumnPresence {
            mission_status: self.mission_status.is_some(),
            rocket_status: self.rocket_status.is_some(),
        }
    }

    /// Parse one row. Returns `None` when the year is missing, not numeric, or
    /// outside [`PLAUSIBLE_YEARS`].
    pub fn parse_row(&self, row: &StringRecord) -> Option<LaunchRecord> {
        let year = parse_year(row.get(self.year)?)?;
        Some(LaunchRecord {
            year,
            country: cell(row, Some(self.country)),
            company: cell(row, Some(self.company)),
            mission_status: cell(row, self.mission_status),
            rocket_status: cell(row, self.rocket_status),
        })
    }
}

fn cell(row: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .filter(|s| !is_missing(s))
        .map(str::to_string)
}

fn is_missing(value: &str) -> bool {
    MISSING_TOKENS.contains(&value)
}

/// Years may be written as floats (`2020.0`) by upstream tools; those are
/// truncated toward zero.
fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if is_missing(raw) {
        return None;
    }
    let year = match raw.parse::<i32>() {
        Ok(year) => year,
        Err(_) => raw
            .parse::<f64>()
            .ok()
            .filter(|y| y.is_finite() && *y >= i32::MIN as f64 && *y <= i32::MAX as f64)
            .map(|y| y.trunc() as i32)?,
    };
    PLAUSIBLE_YEARS.contains(&year).then_some(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Company Name "), "Company_Name");
        assert_eq!(normalize_header("Status-Mission"), "Status_Mission");
        assert_eq!(normalize_header("Year"), "Year");
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1957"), Some(1957));
        assert_eq!(parse_year("2020.0"), Some(2020));
        assert_eq!(parse_year(" 1999 "), Some(1999));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_year("NaN"), None);
        assert_eq!(parse_year("NA"), None);
    }

    #[test]
    fn test_parse_year_rejects_implausible_years() {
        assert_eq!(parse_year("2000000000"), None);
        assert_eq!(parse_year("-5"), None);
        assert_eq!(parse_year("1899"), None);
        assert_eq!(parse_year("1900"), Some(1900));
        assert_eq!(parse_year("2200.0"), Some(2200));
    }

    #[test]
    fn test_missing_tokens_become_none() {
        let headers = record(&["Country", "Company Name", "Year", "Status Mission", "Status Rocket"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();
        for token in ["NaN", "NA", "N/A", "null", "None", "NULL", "nan", "<NA>"] {
            let row = index
                .parse_row(&record(&[token, "SpaceX", "2020", token, token]))
                .unwrap();
            assert!(row.country.is_none(), "{} should be missing", token);
            assert!(row.mission_status.is_none(), "{} should be missing", token);
            assert!(row.rocket_status.is_none(), "{} should be missing", token);
        }
    }

    #[test]
    fn test_missing_tokens_are_exact() {
        let headers = record(&["Country", "Company Name", "Year"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();
        let row = index.parse_row(&record(&["Nauru", "Nasa ", "2020"])).unwrap();
        assert_eq!(row.country.as_deref(), Some("Nauru"));
        assert_eq!(row.company.as_deref(), Some("Nasa "));
    }

    #[test]
    fn test_missing_required_column() {
        let headers = record(&["Company Name", "Year"]);
        let err = ColumnIndex::from_headers(&headers).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Country")));
    }

    #[test]
    fn test_optional_columns_absent() {
        let headers = record(&["Country", "Company Name", "Year"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();
        assert_eq!(index.presence(), ColumnPresence::default());

        let row = index.parse_row(&record(&["USA", "SpaceX", "2020"])).unwrap();
        assert_eq!(row.country.as_deref(), Some("USA"));
        assert!(row.mission_status.is_none());
        assert!(row.rocket_status.is_none());
    }

    #[test]
    fn test_empty_cells_become_none() {
        let headers = record(&["Country", "Company Name", "Year", "Status Mission"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();
        let row = index.parse_row(&record(&["", "SpaceX", "2020", ""])).unwrap();
        assert!(row.country.is_none());
        assert!(row.mission_status.is_none());
    }

    #[test]
    fn test_short_row_keeps_year() {
        let headers = record(&["Year", "Country", "Company Name", "Status Rocket"]);
        let index = ColumnIndex::from_headers(&headers).unwrap();
        let row = index.parse_row(&record(&["2001", "Russia"])).unwrap();
        assert_eq!(row.year, 2001);
        assert!(row.company.is_none());
        assert!(row.rocket_status.is_none());
    }
}
