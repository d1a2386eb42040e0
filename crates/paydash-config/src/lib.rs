//! Configuration management for paydash
//!
//! This module handles loading, validation, and management of
//! paydash configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the data directory
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Transactions payload file name
    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            transactions_file: default_transactions_file(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_transactions_file() -> String {
    "transactions.json".to_string()
}

/// Transaction period enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionPeriod {
    /// Current calendar day
    Daily,
    /// Week to date, starting Sunday
    Weekly,
    /// Month to date
    Monthly,
}

impl Default for TransactionPeriod {
    fn default() -> Self {
        TransactionPeriod::Weekly
    }
}

impl std::str::FromStr for TransactionPeriod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(TransactionPeriod::Daily),
            "weekly" => Ok(TransactionPeriod::Weekly),
            "monthly" => Ok(TransactionPeriod::Monthly),
            _ => Err(format!("Invalid transaction period: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionPeriod::Daily => write!(f, "daily"),
            TransactionPeriod::Weekly => write!(f, "weekly"),
            TransactionPeriod::Monthly => write!(f, "monthly"),
        }
    }
}

/// Filter defaults and bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Period selected when a session starts
    #[serde(default)]
    pub default_period: TransactionPeriod,
    /// Lower bound of the amount range slider
    #[serde(default = "default_min_amount")]
    pub min_amount: f64,
    /// Upper bound of the amount range slider
    #[serde(default = "default_max_amount")]
    pub max_amount: f64,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            default_period: TransactionPeriod::default(),
            min_amount: default_min_amount(),
            max_amount: default_max_amount(),
        }
    }
}

fn default_min_amount() -> f64 {
    0.0
}

fn default_max_amount() -> f64 {
    2000.0
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// BCP 47 locale tag for display formatting
    #[serde(default = "default_locale")]
    pub locale: String,
    /// ISO 4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
    /// Decimal separator
    #[serde(default = "default_decimal_sep")]
    pub decimal_separator: String,
    /// Currency symbol
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Currency symbol position ("before" or "after")
    #[serde(default)]
    pub symbol_position: SymbolPosition,
    /// Put a space between symbol and number (es-AR style)
    #[serde(default = "default_true")]
    pub symbol_spacing: bool,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency: default_currency(),
            decimal_places: default_decimal_places(),
            thousands_separator: default_thousands_sep(),
            decimal_separator: default_decimal_sep(),
            symbol: default_symbol(),
            symbol_position: SymbolPosition::Before,
            symbol_spacing: true,
        }
    }
}

fn default_locale() -> String {
    "es-AR".to_string()
}

fn default_currency() -> String {
    "ARS".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_thousands_sep() -> String {
    ".".to_string()
}

fn default_decimal_sep() -> String {
    ",".to_string()
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

/// Currency symbol position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

impl Default for SymbolPosition {
    fn default() -> Self {
        SymbolPosition::Before
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Prefix for generated export file names
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Label used when no explicit date range is selected
    #[serde(default = "default_full_range_label")]
    pub full_range_label: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            full_range_label: default_full_range_label(),
        }
    }
}

fn default_file_prefix() -> String {
    "transacciones".to_string()
}

fn default_full_range_label() -> String {
    "completo".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Data source settings
    #[serde(default)]
    pub data: DataConfig,
    /// Filter defaults
    #[serde(default)]
    pub filters: FiltersConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|_| ConfigError::IoError)?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.filters.min_amount < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "filters.min_amount".to_string(),
                reason: "Amount bound must be non-negative".to_string(),
            });
        }

        if self.filters.min_amount > self.filters.max_amount {
            return Err(ConfigError::InvalidValue {
                field: "filters.max_amount".to_string(),
                reason: "Upper bound must not be below the lower bound".to_string(),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        if self.currency.thousands_separator == self.currency.decimal_separator {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_separator".to_string(),
                reason: "Thousands and decimal separators must differ".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Get the full path to the transactions payload file
    pub fn transactions_path(&self) -> PathBuf {
        self.data.path.join(&self.data.transactions_file)
    }

    /// The configured amount range bounds as a pair
    pub fn amount_bounds(&self) -> (f64, f64) {
        (self.filters.min_amount, self.filters.max_amount)
    }
}
