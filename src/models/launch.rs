use serde::{Deserialize, Serialize};

/// Mission status value counted as a success.
pub const SUCCESS_STATUS: &str = "Success";

/// Rocket status value (compared case-insensitively) counted as active.
pub const ACTIVE_STATUS: &str = "active";

/// A single space launch.
///
/// Only `year` is guaranteed. Empty cells in the source file become `None`,
/// and a `None` never matches a country or company selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub year: i32,
    pub country: Option<String>,
    pub company: Option<String>,
    pub mission_status: Option<String>,
    pub rocket_status: Option<String>,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.mission_status.as_deref() == Some(SUCCESS_STATUS)
    }

    pub fn is_active_rocket(&self) -> bool {
        self.rocket_status
            .as_deref()
            .is_some_and(|s| s.to_lowercase() == ACTIVE_STATUS)
    }
}

/// Which optional columns the source file carried.
///
/// KPIs that depend on an absent column are reported as zero rather than
/// failing the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPresence {
    pub mission_status: bool,
    pub rocket_status: bool,
}

impl ColumnPresence {
    pub fn all() -> Self {
        Self {
            mission_status: true,
            rocket_status: true,
        }
    }
}
