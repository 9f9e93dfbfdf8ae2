//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::{DEFAULT_LOAN_DAYS, LoanPeriod};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoansConfig {
    pub default_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty`または`json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub loans: LoansConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// `library.toml`（任意）と環境変数（例: `LIBRARY_LOANS__DEFAULT_DAYS`）
    /// から設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("library").required(false))
                .add_source(
                    Environment::with_prefix("LIBRARY")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.default_loan_period()?;
        Ok(config)
    }

    /// 設定された既定の貸出期間
    ///
    /// 利用者が入力する日数と違い、既定値は1日以上でなければならない。
    pub fn default_loan_period(&self) -> Result<LoanPeriod, ConfigError> {
        let days = self.loans.default_days;
        if days < 1 {
            return Err(ConfigError::Message(format!(
                "loans.default_days must be a positive number of days, got {}",
                days
            )));
        }
        Ok(LoanPeriod::new(days))
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_LOAN_DAYS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}
