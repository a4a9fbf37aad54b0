use crate::config::SourceConfig;
use crate::domain::model::{SalaryRange, SourceKind, VacancyPage, VacancyRecord};
use crate::domain::ports::SalaryFields;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeadHunterEnvelope {
    items: Vec<VacancyRecord>,
    found: Option<u64>,
    pages: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SuperJobEnvelope {
    objects: Vec<VacancyRecord>,
    total: Option<u64>,
    more: bool,
}

fn number_at(record: &VacancyRecord, path: &[&str]) -> Option<f64> {
    record.pointer(path).and_then(serde_json::Value::as_f64)
}

fn string_at(record: &VacancyRecord, path: &[&str]) -> Option<String> {
    record
        .pointer(path)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

impl SalaryFields for SourceKind {
    fn salary_range(&self, record: &VacancyRecord) -> SalaryRange {
        match self {
            // {"salary": {"from": .., "to": .., "currency": "RUR"}}，salary 可能是 null
            SourceKind::HeadHunter => SalaryRange {
                lower: number_at(record, &["salary", "from"]),
                upper: number_at(record, &["salary", "to"]),
                currency: string_at(record, &["salary", "currency"]),
            },
            SourceKind::SuperJob => SalaryRange {
                lower: number_at(record, &["payment_from"]),
                upper: number_at(record, &["payment_to"]),
                currency: string_at(record, &["currency"]),
            },
        }
    }
}

impl SourceKind {
    /// Header carrying the app key, if the source needs one.
    pub fn auth_header(&self) -> Option<&'static str> {
        match self {
            SourceKind::HeadHunter => None,
            SourceKind::SuperJob => Some("X-Api-App-Id"),
        }
    }

    pub fn query_params(
        &self,
        config: &SourceConfig,
        language: &str,
        page: u32,
    ) -> Vec<(&'static str, String)> {
        let (text_param, region_param) = match self {
            SourceKind::HeadHunter => ("text", "area"),
            SourceKind::SuperJob => ("keyword", "town"),
        };

        let mut params = vec![
            (text_param, config.search_text(language)),
            (region_param, config.region.to_string()),
        ];
        if let Some(period) = config.period_days {
            params.push(("period", period.to_string()));
        }
        params.push(("page", page.to_string()));
        params
    }

    /// Bodies that don't match the envelope count as an empty page.
    pub fn parse_page(&self, page: u32, body: &str) -> VacancyPage {
        match self {
            SourceKind::HeadHunter => match serde_json::from_str::<HeadHunterEnvelope>(body) {
                Ok(envelope) => VacancyPage {
                    has_more: envelope.pages.is_some_and(|pages| page + 1 < pages),
                    records: envelope.items,
                    found: envelope.found,
                },
                Err(e) => {
                    tracing::warn!("⚠️ Unreadable {} page {}: {}", self, page, e);
                    VacancyPage::default()
                }
            },
            SourceKind::SuperJob => match serde_json::from_str::<SuperJobEnvelope>(body) {
                Ok(envelope) => VacancyPage {
                    has_more: envelope.more,
                    records: envelope.objects,
                    found: envelope.total,
                },
                Err(e) => {
                    tracing::warn!("⚠️ Unreadable {} page {}: {}", self, page, e);
                    VacancyPage::default()
                }
            },
        }
    }
}
