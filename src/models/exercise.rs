use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DATE_DISPLAY_FORMAT;

/// A single logged activity belonging to one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub description: String,
    /// Duration in minutes, strictly positive
    pub duration: i64,
    pub date: DateTime<Utc>,
}

/// Exercise projection for log responses, with the date pre-rendered
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl Exercise {
    /// Render the date as the fixed date-only string, e.g. "Mon Jan 01 2024"
    pub fn display_date(&self) -> String {
        self.date.format(DATE_DISPLAY_FORMAT).to_string()
    }

    pub fn log_entry(&self) -> LogEntry {
        LogEntry {
            description: self.description.clone(),
            duration: self.duration,
            date: self.display_date(),
        }
    }
}
