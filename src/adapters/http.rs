use crate::config::SourceConfig;
use crate::domain::model::{SourceKind, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// A job board reached over its public HTTP search API.
pub struct HttpVacancySource {
    config: SourceConfig,
    client: Client,
    api_key: Option<String>,
}

impl HttpVacancySource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("vacancy-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        let api_key = config.resolved_api_key();
        if config.kind.auth_header().is_some() && api_key.is_none() {
            tracing::warn!(
                "⚠️ No API key for {}; requests will likely be rejected",
                config.title
            );
        }

        Ok(Self {
            config,
            client,
            api_key,
        })
    }
}

#[async_trait]
impl VacancySource for HttpVacancySource {
    fn kind(&self) -> SourceKind {
        self.config.kind
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn target_currency(&self) -> &str {
        &self.config.currency
    }

    fn max_pages(&self) -> u32 {
        self.config.max_pages
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let params = self.config.kind.query_params(&self.config, language, page);

        let mut request = self.client.get(&self.config.endpoint).query(&params);
        if let (Some(header), Some(key)) = (self.config.kind.auth_header(), &self.api_key) {
            request = request.header(header, key);
        }

        tracing::debug!("GET {} page {} for '{}'", self.config.endpoint, page, language);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(StatsError::HttpStatusError {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(self.config.kind.parse_page(page, &body))
    }
}
