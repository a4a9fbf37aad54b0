pub mod aggregator;
pub mod engine;
pub mod estimator;
pub mod reducer;
pub mod report;

pub use crate::domain::model::{Harvest, LanguageStatistics, ReportRow, SourceReport, VacancyRecord};
pub use crate::domain::ports::{SalaryFields, VacancySource};
pub use crate::utils::error::Result;
