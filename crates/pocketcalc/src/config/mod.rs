use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutputFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub output: OutputFormat,
    pub defaults: CalculatorDefaults,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let output = OutputFormat::parse(
            &env::var("POCKETCALC_OUTPUT").unwrap_or_else(|_| "text".to_string()),
        )?;

        let electricity_rate = match env::var("POCKETCALC_ELECTRICITY_RATE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|rate| rate.is_finite() && *rate >= 0.0)
                .ok_or(ConfigError::InvalidElectricityRate { value: raw })?,
            Err(_) => CalculatorDefaults::default().electricity_rate,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            output,
            defaults: CalculatorDefaults { electricity_rate },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Values pre-filled into calculator inputs the user leaves blank.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorDefaults {
    /// Electricity price in $/kWh.
    pub electricity_rate: f64,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            electricity_rate: 0.15,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidOutputFormat { value: String },
    InvalidElectricityRate { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutputFormat { value } => {
                write!(f, "POCKETCALC_OUTPUT must be 'text' or 'json' (got '{value}')")
            }
            ConfigError::InvalidElectricityRate { value } => write!(
                f,
                "POCKETCALC_ELECTRICITY_RATE must be a non-negative number (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("POCKETCALC_OUTPUT");
        env::remove_var("POCKETCALC_ELECTRICITY_RATE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.defaults, CalculatorDefaults::default());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_output_and_rate_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("POCKETCALC_OUTPUT", "JSON");
        env::set_var("POCKETCALC_ELECTRICITY_RATE", "0.32");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.defaults.electricity_rate, 0.32);
        reset_env();
    }

    #[test]
    fn rejects_negative_rate() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("POCKETCALC_ELECTRICITY_RATE", "-1");
        match AppConfig::load() {
            Err(ConfigError::InvalidElectricityRate { value }) => assert_eq!(value, "-1"),
            other => panic!("expected invalid rate, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn rejects_unknown_output_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("POCKETCALC_OUTPUT", "yaml");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidOutputFormat { .. })
        ));
        reset_env();
    }
}
