//! Application configuration loaded from environment variables.

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Application configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `MENU_TITLE`: banner shown on the home screen (default: `"Christoffel's Menu"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `MENU_LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            title: lookup("MENU_TITLE")
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(defaults.title),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("MENU_LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.log_format),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Christoffel's Menu".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.title, "Christoffel's Menu");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_vars_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.title, "Christoffel's Menu");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("MENU_TITLE", "Chez Test"),
            ("RUST_LOG", "debug"),
            ("MENU_LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.title, "Chez Test");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_title_and_unknown_format_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("MENU_TITLE", "   "),
            ("MENU_LOG_FORMAT", "yaml"),
        ]));
        assert_eq!(config.title, "Christoffel's Menu");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
