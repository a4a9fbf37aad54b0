pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::HttpVacancySource;
pub use config::AppConfig;
pub use crate::core::{
    aggregator::PageAggregator, engine::StatsEngine, estimator::SalaryEstimator,
    reducer::StatisticsReducer, report::OutputFormat,
};
pub use utils::error::{Result, StatsError};
