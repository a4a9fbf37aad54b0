// Adapters layer: concrete implementations for external systems (job board APIs).

pub mod http;
pub mod sources;

pub use http::HttpVacancySource;
