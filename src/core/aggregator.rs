use crate::domain::model::Harvest;
use crate::domain::ports::VacancySource;

/// Walks a source page by page until it runs dry.
#[derive(Debug, Clone, Copy)]
pub struct PageAggregator {
    deduplicate: bool,
}

impl PageAggregator {
    pub fn new(deduplicate: bool) -> Self {
        Self { deduplicate }
    }

    /// Never fails: a broken page ends pagination and whatever was
    /// collected up to that point is returned.
    pub async fn fetch_all<S>(&self, source: &S, language: &str) -> Harvest
    where
        S: VacancySource + ?Sized,
    {
        let mut harvest = Harvest::default();
        let max_pages = source.max_pages();

        for page in 0..max_pages {
            let page_result = match source.fetch_page(language, page).await {
                Ok(page_result) => page_result,
                Err(e) => {
                    tracing::warn!(
                        "⚠️ {} page {} for '{}' failed, keeping {} records: {}",
                        source.kind(),
                        page,
                        language,
                        harvest.records.len(),
                        e
                    );
                    harvest.failed = true;
                    break;
                }
            };
            harvest.pages_fetched += 1;

            if let Some(found) = page_result.found.filter(|found| *found > 0) {
                harvest.found = Some(found);
            }

            if page_result.records.is_empty() {
                tracing::debug!("{} page {} for '{}' is empty", source.kind(), page, language);
                break;
            }

            let received = page_result.records.len();
            for record in page_result.records {
                if self.deduplicate && harvest.records.contains(&record) {
                    continue;
                }
                harvest.records.push(record);
            }
            tracing::debug!(
                "{} page {} for '{}': {} records ({} kept so far)",
                source.kind(),
                page,
                language,
                received,
                harvest.records.len()
            );

            if !page_result.has_more {
                break;
            }
        }

        harvest
    }
}
