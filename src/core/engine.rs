use crate::config::AppConfig;
use crate::core::aggregator::PageAggregator;
use crate::core::estimator::SalaryEstimator;
use crate::core::reducer::StatisticsReducer;
use crate::domain::model::SourceReport;
use crate::domain::ports::VacancySource;

/// Runs aggregation and reduction for every language against one source.
pub struct StatsEngine {
    aggregator: PageAggregator,
    estimator: SalaryEstimator,
    languages: Vec<String>,
}

impl StatsEngine {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            aggregator: PageAggregator::new(config.aggregation.deduplicate),
            estimator: SalaryEstimator::new(&config.estimator),
            languages: config.languages.clone(),
        }
    }

    pub async fn run<S>(&self, source: &S) -> SourceReport
    where
        S: VacancySource + ?Sized,
    {
        tracing::info!("🔍 Collecting vacancies from {}", source.title());

        let kind = source.kind();
        let reducer = StatisticsReducer::new(&kind, self.estimator, source.target_currency());

        let mut report = SourceReport {
            title: source.title().to_string(),
            languages: Vec::with_capacity(self.languages.len()),
        };
        let mut pages_total = 0;
        let mut failures = 0;

        // 依設定順序逐一處理，不並行
        for language in &self.languages {
            let harvest = self.aggregator.fetch_all(source, language).await;
            pages_total += harvest.pages_fetched;
            if harvest.failed {
                failures += 1;
            }

            let stats = reducer.reduce_harvest(&harvest);
            tracing::info!(
                "{}: found {:?}, collected {}, processed {}, average {:?}",
                language,
                stats.found,
                harvest.records.len(),
                stats.processed,
                stats.average
            );
            report.languages.push((language.clone(), stats));
        }

        tracing::info!(
            "✅ {} done: {} languages, {} pages, {} with failures",
            source.title(),
            report.languages.len(),
            pages_total,
            failures
        );

        report
    }
}
