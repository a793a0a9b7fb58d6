//! # Rendered Views
//!
//! What a container shows after a load cycle. Views are derived from a
//! freshly parsed table every time and never persisted.

use serde::Serialize;
use std::fmt;

pub const LOADING_TEXT: &str = "로딩중...";
pub const NO_DATA_TEXT: &str = "데이터가 없습니다.";
pub const FAILED_TEXT: &str = "데이터 로딩 실패";

/// The three homepage sheets, one container each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Metrics,
    Names,
    Universities,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Metrics, Target::Names, Target::Universities];

    /// Element id of the container this target renders into.
    pub fn container_id(self) -> &'static str {
        match self {
            Target::Metrics => "dtmMetricsGrid",
            Target::Names => "nameGrid",
            Target::Universities => "dtmUnivGrid",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Target::Metrics => "metrics",
            Target::Names => "names",
            Target::Universities => "universities",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum View {
    /// Fetch in flight.
    Loading,
    Metrics(Vec<MetricCard>),
    /// Marquee sequence, already padded and doubled. Empty strings are
    /// blank grid cells.
    Names(Vec<String>),
    Universities(Vec<String>),
    /// Nothing left after filtering.
    Empty,
    /// Fetch failed; carries the error message.
    Failed(String),
}

impl View {
    /// Text of the placeholder shown instead of items, if any.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            View::Loading => Some(LOADING_TEXT.to_string()),
            View::Empty => Some(NO_DATA_TEXT.to_string()),
            View::Failed(message) => Some(format!("{FAILED_TEXT}: {message}")),
            View::Metrics(_) | View::Names(_) | View::Universities(_) => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, View::Loading)
    }
}
