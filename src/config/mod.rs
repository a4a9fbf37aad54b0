pub mod app_config;
#[cfg(feature = "cli")]
pub mod cli;

pub use app_config::{AggregationConfig, AppConfig, EstimatorConfig, ReportConfig, SourceConfig};
#[cfg(feature = "cli")]
pub use cli::CliArgs;
