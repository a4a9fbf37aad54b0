use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The job boards we know how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    HeadHunter,
    SuperJob,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::HeadHunter => write!(f, "headhunter"),
            SourceKind::SuperJob => write!(f, "superjob"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "headhunter" | "hh" => Ok(SourceKind::HeadHunter),
            "superjob" | "sj" => Ok(SourceKind::SuperJob),
            other => Err(format!("unknown source '{}'", other)),
        }
    }
}

/// A single vacancy exactly as the source returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacancyRecord {
    pub data: serde_json::Value,
}

impl VacancyRecord {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    /// 依路徑取值，例如 `["salary", "from"]`
    pub fn pointer(&self, path: &[&str]) -> Option<&serde_json::Value> {
        path.iter()
            .try_fold(&self.data, |value, key| value.get(*key))
    }
}

/// Salary bounds pulled out of a source-specific record shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryRange {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub currency: Option<String>,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyPage {
    pub records: Vec<VacancyRecord>,
    /// Total results the source claims to have for the query.
    pub found: Option<u64>,
    pub has_more: bool,
}

/// Everything collected for one language from one source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Harvest {
    pub found: Option<u64>,
    pub records: Vec<VacancyRecord>,
    pub pages_fetched: u32,
    pub failed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStatistics {
    pub found: Option<u64>,
    pub processed: u64,
    pub average: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub found: u64,
    pub processed: u64,
    pub average: u64,
}

/// Statistics for every language of one source, in configured order.
#[derive(Debug, Clone, Default)]
pub struct SourceReport {
    pub title: String,
    pub languages: Vec<(String, LanguageStatistics)>,
}
