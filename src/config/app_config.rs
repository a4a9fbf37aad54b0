use crate::domain::model::SourceKind;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LANGUAGES: [&str; 8] =
    ["python", "javascript", "java", "ruby", "php", "c++", "c#", "c"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Applied when only the lower bound is known.
    pub lower_only_multiplier: f64,
    /// Applied when only the upper bound is known.
    pub upper_only_multiplier: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub deduplicate: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Zero out processed/average when the source found nothing.
    pub zero_when_not_found: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub title: String,
    pub endpoint: String,
    /// Free-text query, `{language}` is replaced per request.
    pub search_template: String,
    pub region: u32,
    pub period_days: Option<u32>,
    pub max_pages: u32,
    pub currency: String,
    pub api_key: Option<String>,
    pub api_key_env: Option<String>,
    pub timeout_seconds: Option<u64>,
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

fn default_sources() -> Vec<SourceConfig> {
    vec![SourceConfig::headhunter(), SourceConfig::superjob()]
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            lower_only_multiplier: 1.2,
            upper_only_multiplier: 0.8,
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self { deduplicate: true }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            zero_when_not_found: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            estimator: EstimatorConfig::default(),
            aggregation: AggregationConfig::default(),
            report: ReportConfig::default(),
            sources: default_sources(),
        }
    }
}

impl SourceConfig {
    /// HeadHunter, Moscow, vacancies from the last 30 days.
    pub fn headhunter() -> Self {
        Self {
            kind: SourceKind::HeadHunter,
            title: "HeadHunter Moscow".to_string(),
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            search_template: "программист {language}".to_string(),
            region: 1,
            period_days: Some(30),
            max_pages: 50,
            currency: "RUR".to_string(),
            api_key: None,
            api_key_env: None,
            timeout_seconds: None,
        }
    }

    /// SuperJob, Moscow. Needs an app key in `SJ_TOKEN`.
    pub fn superjob() -> Self {
        Self {
            kind: SourceKind::SuperJob,
            title: "SuperJob Moscow".to_string(),
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            search_template: "Программист {language}".to_string(),
            region: 4,
            period_days: None,
            max_pages: 30,
            currency: "rub".to_string(),
            api_key: None,
            api_key_env: Some("SJ_TOKEN".to_string()),
            timeout_seconds: None,
        }
    }

    pub fn search_text(&self, language: &str) -> String {
        self.search_template.replace("{language}", language)
    }

    /// 明確設定的 api_key 優先，否則讀環境變數
    pub fn resolved_api_key(&self) -> Option<String> {
        let explicit = self
            .api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty() && !key.starts_with("${"))
            .cloned();

        explicit.or_else(|| {
            self.api_key_env
                .as_ref()
                .and_then(|name| std::env::var(name).ok())
                .filter(|key| !key.trim().is_empty())
        })
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(30)
    }

    fn validate_at(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("sources[{}].{}", index, name);

        validation::validate_non_empty_string(&field("title"), &self.title)?;
        validation::validate_url(&field("endpoint"), &self.endpoint)?;
        validation::validate_template(&field("search_template"), &self.search_template)?;
        validation::validate_positive_number(&field("max_pages"), self.max_pages, 1)?;
        validation::validate_non_empty_string(&field("currency"), &self.currency)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range(&field("timeout_seconds"), timeout, 1, 600)?;
        }
        Ok(())
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SJ_TOKEN})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(
        &mut self,
        languages: Option<Vec<String>>,
        only_sources: &[SourceKind],
        no_dedup: bool,
    ) {
        if let Some(languages) = languages {
            self.languages = languages;
        }
        if !only_sources.is_empty() {
            self.sources.retain(|source| only_sources.contains(&source.kind));
        }
        if no_dedup {
            self.aggregation.deduplicate = false;
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_languages("languages", &self.languages)?;

        let multipliers = [
            ("estimator.lower_only_multiplier", self.estimator.lower_only_multiplier),
            ("estimator.upper_only_multiplier", self.estimator.upper_only_multiplier),
        ];
        for (field, value) in multipliers {
            // NaN 會通過區間比較，先擋掉
            validation::validate_finite(field, value)?;
            validation::validate_range(field, value, f64::EPSILON, 10.0)?;
        }

        if self.sources.is_empty() {
            return Err(StatsError::MissingConfigError {
                field: "sources".to_string(),
            });
        }
        for (index, source) in self.sources.iter().enumerate() {
            source.validate_at(index)?;
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_matches_builtin_sources() {
        let config = AppConfig::default();

        assert_eq!(config.languages.len(), 8);
        assert_eq!(config.languages[0], "python");
        assert_eq!(config.languages[7], "c");
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].kind, SourceKind::HeadHunter);
        assert_eq!(config.sources[0].max_pages, 50);
        assert_eq!(config.sources[1].currency, "rub");
        assert!(config.aggregation.deduplicate);
        assert!(config.report.zero_when_not_found);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let toml_content = r#"
languages = ["rust", "go"]

[estimator]
lower_only_multiplier = 1.5

[aggregation]
deduplicate = false
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.languages, vec!["rust", "go"]);
        assert_eq!(config.estimator.lower_only_multiplier, 1.5);
        assert_eq!(config.estimator.upper_only_multiplier, 0.8);
        assert!(!config.aggregation.deduplicate);
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn test_parse_explicit_sources() {
        let toml_content = r#"
[[sources]]
kind = "superjob"
title = "SuperJob Saint Petersburg"
endpoint = "https://api.superjob.ru/2.0/vacancies/"
search_template = "Разработчик {language}"
region = 14
max_pages = 5
currency = "rub"
api_key = "literal-key"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.sources.len(), 1);
        let source = &config.sources[0];
        assert_eq!(source.kind, SourceKind::SuperJob);
        assert_eq!(source.region, 14);
        assert_eq!(source.period_days, None);
        assert_eq!(source.search_text("rust"), "Разработчик rust");
        assert_eq!(source.resolved_api_key().as_deref(), Some("literal-key"));
        assert_eq!(source.timeout_seconds(), 30);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VACANCY_STATS_TEST_KEY", "v3.r.secret");

        let toml_content = r#"
[[sources]]
kind = "superjob"
title = "SuperJob Moscow"
endpoint = "https://api.superjob.ru/2.0/vacancies/"
search_template = "Программист {language}"
region = 4
max_pages = 30
currency = "rub"
api_key = "${VACANCY_STATS_TEST_KEY}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.sources[0].resolved_api_key().as_deref(),
            Some("v3.r.secret")
        );

        std::env::remove_var("VACANCY_STATS_TEST_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_is_not_a_key() {
        let mut source = SourceConfig::superjob();
        source.api_key = Some("${VACANCY_STATS_UNSET_VARIABLE}".to_string());
        source.api_key_env = Some("VACANCY_STATS_UNSET_VARIABLE".to_string());

        assert_eq!(source.resolved_api_key(), None);
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        config.sources[0].endpoint = "invalid-url".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.sources[1].max_pages = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.sources[0].search_template = "программист".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.estimator.upper_only_multiplier = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.sources.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_multiplier_is_rejected() {
        let toml_content = r#"
[estimator]
lower_only_multiplier = nan
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(config.estimator.lower_only_multiplier.is_nan());
        assert!(matches!(
            config.validate(),
            Err(StatsError::InvalidConfigValueError { ref field, .. })
                if field == "estimator.lower_only_multiplier"
        ));
    }

    #[test]
    fn test_invalid_toml_reports_parsing_error() {
        let result = AppConfig::from_toml_str("languages = [");
        assert!(matches!(
            result,
            Err(StatsError::ConfigValidationError { ref field, .. }) if field == "toml_parsing"
        ));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(
            Some(vec!["rust".to_string()]),
            &[SourceKind::SuperJob],
            true,
        );

        assert_eq!(config.languages, vec!["rust"]);
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].kind, SourceKind::SuperJob);
        assert!(!config.aggregation.deduplicate);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
languages = ["kotlin"]

[report]
zero_when_not_found = false
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.languages, vec!["kotlin"]);
        assert!(!config.report.zero_when_not_found);
    }
}
