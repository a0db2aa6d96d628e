use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TaskpadError};

/// Urgency tag for a todo. Serializes as the exact strings the clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Resolve a raw priority value from a request.
    ///
    /// Absent or empty input falls back to [`Priority::Medium`]; anything
    /// else must name one of the three variants exactly.
    pub fn resolve(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Priority::Medium),
            Some(value) => value.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = TaskpadError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(TaskpadError::UnknownPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task entry.
///
/// `id` is unique and immutable after creation; `text` is trimmed and
/// non-empty. `text` is the one canonical field name — the HTTP boundary
/// renames it (`title` in the JSON API, `task` in the form pages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub priority: Priority,
}

/// Priority filter for listing: everything, or one exact priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Parse the `priority` query value. Absent, empty, or the sentinel
    /// `All` mean no filtering.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("") | Some("All") => Ok(PriorityFilter::All),
            Some(value) => Ok(PriorityFilter::Only(value.parse()?)),
        }
    }

    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => *p == priority,
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityFilter::All => f.write_str("All"),
            PriorityFilter::Only(p) => f.write_str(p.as_str()),
        }
    }
}
