use crate::domain::model::{SalaryRange, SourceKind, VacancyPage, VacancyRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Pulls salary bounds out of a source-specific record shape.
pub trait SalaryFields: Send + Sync {
    fn salary_range(&self, record: &VacancyRecord) -> SalaryRange;
}

#[async_trait]
pub trait VacancySource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Heading used for this source in the report.
    fn title(&self) -> &str;

    /// Only salaries quoted in this currency are estimated.
    fn target_currency(&self) -> &str;

    /// Hard ceiling on the number of pages requested per language.
    fn max_pages(&self) -> u32;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}
