// src/task.rs

//! Task records as supplied by a caller.
//!
//! A [`Task`] is identified by its `name`; there is no separate id. Field
//! aliases (`title`, `estimatedHours`, `dueDate`, `after`, ...) are accepted
//! so task lists exported from the web form load without edits.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Name of a task. Unique within one request.
pub type TaskName = String;

/// One schedulable unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "title")]
    pub name: TaskName,

    /// Estimated effort, e.g. hours. Fractional values are allowed.
    #[serde(default, alias = "estimated_hours", alias = "estimatedHours")]
    pub effort: f64,

    #[serde(alias = "dueDate", alias = "due")]
    pub due_date: DueDate,

    /// Names of tasks that must come before this one.
    ///
    /// Either an array of names or a single comma-separated string.
    #[serde(
        default,
        alias = "after",
        deserialize_with = "deserialize_dependency_list"
    )]
    pub dependencies: Vec<TaskName>,
}

impl Task {
    pub fn new(name: impl Into<TaskName>, effort: f64, due_date: DueDate) -> Self {
        Self {
            name: name.into(),
            effort,
            due_date,
            dependencies: Vec::new(),
        }
    }

    /// Builder-style helper: add a dependency on `name`.
    pub fn after(mut self, name: impl Into<TaskName>) -> Self {
        self.dependencies.push(name.into());
        self
    }
}

/// Calendar date/time a task is due.
///
/// Plain dates are treated as midnight. Values with a UTC offset are
/// normalised to UTC so that all due dates share one total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDateTime);

impl DueDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl FromStr for DueDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::from_date(date));
        }
        if let Ok(at) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(at.naive_utc()));
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(at) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self(at));
            }
        }

        Err(format!(
            "invalid due date: {s:?} (expected YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or RFC 3339)"
        ))
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.time() == NaiveTime::MIN {
            write!(f, "{}", self.0.date().format("%Y-%m-%d"))
        } else {
            // `%.f` prints nothing for whole seconds.
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
        }
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Wire shapes a due date may arrive in. TOML date literals are not
/// strings, so they get their own variant.
#[derive(Deserialize)]
#[serde(untagged)]
enum DueDateRepr {
    Text(String),
    Toml(toml::value::Datetime),
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = match DueDateRepr::deserialize(deserializer)? {
            DueDateRepr::Text(s) => s,
            DueDateRepr::Toml(dt) => dt.to_string(),
        };
        text.parse().map_err(de::Error::custom)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyRepr {
    List(Vec<String>),
    Csv(String),
}

/// Accept `["A", "B"]` as well as `"A, B"`. Entries are trimmed and blank
/// entries dropped in both forms.
fn deserialize_dependency_list<'de, D>(deserializer: D) -> Result<Vec<TaskName>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match DependencyRepr::deserialize(deserializer)? {
        DependencyRepr::List(items) => items,
        DependencyRepr::Csv(text) => text.split(',').map(str::to_string).collect(),
    };

    Ok(raw
        .into_iter()
        .map(|dep| dep.trim().to_string())
        .filter(|dep| !dep.is_empty())
        .collect())
}
