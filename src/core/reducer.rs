use crate::core::estimator::SalaryEstimator;
use crate::domain::model::{Harvest, LanguageStatistics, VacancyRecord};
use crate::domain::ports::SalaryFields;

/// Folds the vacancies of one language into found/processed/average.
pub struct StatisticsReducer<'a, F: SalaryFields + ?Sized> {
    fields: &'a F,
    estimator: SalaryEstimator,
    target_currency: &'a str,
}

impl<'a, F: SalaryFields + ?Sized> StatisticsReducer<'a, F> {
    pub fn new(fields: &'a F, estimator: SalaryEstimator, target_currency: &'a str) -> Self {
        Self {
            fields,
            estimator,
            target_currency,
        }
    }

    pub fn reduce(&self, found: Option<u64>, records: &[VacancyRecord]) -> LanguageStatistics {
        let estimates: Vec<u64> = records
            .iter()
            .filter_map(|record| {
                let range = self.fields.salary_range(record);
                self.estimator.estimate_range(&range, self.target_currency)
            })
            .collect();

        let processed = estimates.len() as u64;
        // u128 累加，避免極端薪資溢位
        let average = if processed > 0 {
            let total: u128 = estimates.iter().map(|e| u128::from(*e)).sum();
            Some(u64::try_from(total / u128::from(processed)).unwrap_or(u64::MAX))
        } else {
            None
        };

        LanguageStatistics {
            found,
            processed,
            average,
        }
    }

    pub fn reduce_harvest(&self, harvest: &Harvest) -> LanguageStatistics {
        self.reduce(harvest.found, &harvest.records)
    }
}
