// Kit settings, potentially loaded from a config file
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::debounce::{wait_from_millis, DEFAULT_WAIT};
use crate::error::{KompKitError, Result};
use crate::format::{CurrencyFormat, DEFAULT_CURRENCY, DEFAULT_LOCALE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitSettings {
    #[serde(default)]
    pub debounce: DebounceSettings,
    #[serde(default)]
    pub format: FormatSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebounceSettings {
    // Signed; negative values are rejected by validate()
    pub wait_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSettings {
    pub currency: String,
    pub locale: String,
}

impl Default for DebounceSettings {
    fn default() -> Self {
        DebounceSettings {
            wait_ms: DEFAULT_WAIT.as_millis() as i64,
        }
    }
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            currency: DEFAULT_CURRENCY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl FormatSettings {
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::default()
            .currency(&self.currency)
            .locale(&self.locale)
    }
}

impl KitSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: KitSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded settings file");
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        wait_from_millis(self.debounce.wait_ms)
            .map_err(|e| KompKitError::ConfigError(format!("debounce.wait_ms: {}", e)))?;
        // Probe the formatter so an unknown locale or malformed code surfaces at load time
        self.format
            .currency_format()
            .format(0.0)
            .map_err(|e| KompKitError::ConfigError(format!("format: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = KitSettings::default();
        assert_eq!(settings.debounce.wait_ms, 250);
        assert_eq!(settings.format.currency, "EUR");
        assert_eq!(settings.format.locale, "es-ES");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_str_partial() {
        let settings = KitSettings::from_json_str(r#"{ "debounce": { "wait_ms": 300 } }"#).unwrap();
        assert_eq!(settings.debounce.wait_ms, 300);
        assert_eq!(settings.format, FormatSettings::default());
    }

    #[test]
    fn test_negative_wait_is_config_error() {
        let err = KitSettings::from_json_str(r#"{ "debounce": { "wait_ms": -5 } }"#).unwrap_err();
        assert!(matches!(err, KompKitError::ConfigError(_)));
        assert!(err.to_string().contains("debounce.wait_ms"));
    }

    #[test]
    fn test_unknown_locale_is_config_error() {
        let json = r#"{ "format": { "currency": "EUR", "locale": "xx-YY" } }"#;
        let err = KitSettings::from_json_str(json).unwrap_err();
        assert!(matches!(err, KompKitError::ConfigError(_)));
        assert!(err.to_string().contains("xx-YY"));
    }

    #[test]
    fn test_malformed_json() {
        let err = KitSettings::from_json_str("{ \"debounce\": ").unwrap_err();
        assert!(matches!(err, KompKitError::JsonError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "format": {{ "currency": "USD", "locale": "en-US" }} }}"#).unwrap();
        file.flush().unwrap();

        let settings = KitSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.format.currency, "USD");
        assert_eq!(settings.format.currency_format().format(1234.56).unwrap(), "$1,234.56");
    }

    #[test]
    fn test_from_missing_file() {
        let err = KitSettings::from_file(Path::new("non_existent_settings.json")).unwrap_err();
        assert!(matches!(err, KompKitError::IoError { .. }));
    }
}
