// =============================================================================
// Next Frame Web - Site Configuration
// =============================================================================
// Table of Contents:
// 1. Environment
// 2. Transport Mode
// 3. Site Config
// =============================================================================
// Values are baked in at compile time (Trunk forwards the shell environment):
//   ENVIRONMENT       development | staging | production (default production)
//   FORMS_DIAGNOSTIC  1/true/on or 0/false/off; unset follows ENVIRONMENT
//   FORMS_ENDPOINT    POST target for form submissions (default "/")
// =============================================================================

use serde::Serialize;

/// Default POST target; the forms backend listens on the site root.
pub const DEFAULT_FORMS_ENDPOINT: &str = "/";

// -----------------------------------------------------------------------------
// 1. Environment
// -----------------------------------------------------------------------------

/// Deployment environment the bundle was built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name. Anything unrecognised is production.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("development") | Some("dev") => Environment::Development,
            Some("staging") => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

// -----------------------------------------------------------------------------
// 2. Transport Mode
// -----------------------------------------------------------------------------

/// How form submissions are delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Real outcomes from the forms backend.
    #[default]
    Live,
    /// Requests are still sent, but every failure is reported as delivered so
    /// the confirmation views can be exercised without a backend.
    Diagnostic,
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// 3. Site Config
// -----------------------------------------------------------------------------

/// Resolved site configuration, built once at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub environment: Environment,
    pub transport_mode: TransportMode,
    pub forms_endpoint: String,
    /// Set when diagnostic mode was requested for a production build and
    /// ignored.
    pub diagnostic_refused: bool,
}

impl SiteConfig {
    /// Read the configuration captured at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("ENVIRONMENT"),
            option_env!("FORMS_DIAGNOSTIC"),
            option_env!("FORMS_ENDPOINT"),
        )
    }

    /// Resolve raw settings into a config.
    pub fn resolve(
        environment: Option<&str>,
        diagnostic: Option<&str>,
        endpoint: Option<&str>,
    ) -> Self {
        let environment = Environment::parse(environment);
        let wants_diagnostic = parse_flag(diagnostic)
            .unwrap_or(environment == Environment::Development);

        // Production bundles never swallow real failures.
        let diagnostic_refused = wants_diagnostic && environment.is_production();
        let transport_mode = if wants_diagnostic && !diagnostic_refused {
            TransportMode::Diagnostic
        } else {
            TransportMode::Live
        };

        let forms_endpoint = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_FORMS_ENDPOINT)
            .to_string();

        Self {
            environment,
            transport_mode,
            forms_endpoint,
            diagnostic_refused,
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        self.transport_mode == TransportMode::Diagnostic
    }

    /// Console log level for this build.
    pub fn log_level(&self) -> log::Level {
        match self.environment {
            Environment::Production => log::Level::Info,
            _ => log::Level::Debug,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_live_production() {
        let config = SiteConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.transport_mode, TransportMode::Live);
        assert_eq!(config.forms_endpoint, "/");
        assert!(!config.diagnostic_refused);
    }

    #[test]
    fn test_development_enables_diagnostic() {
        let config = SiteConfig::resolve(Some("development"), None, None);
        assert!(config.is_diagnostic());
        assert_eq!(config.log_level(), log::Level::Debug);

        let opted_out = SiteConfig::resolve(Some("development"), Some("off"), None);
        assert_eq!(opted_out.transport_mode, TransportMode::Live);
    }

    #[test]
    fn test_production_refuses_diagnostic() {
        let config = SiteConfig::resolve(Some("production"), Some("1"), None);
        assert_eq!(config.transport_mode, TransportMode::Live);
        assert!(config.diagnostic_refused);
    }

    #[test]
    fn test_staging_can_opt_in() {
        let config = SiteConfig::resolve(Some("Staging"), Some("true"), Some(" /forms "));
        assert!(config.is_diagnostic());
        assert_eq!(config.forms_endpoint, "/forms");
    }

    #[test]
    fn test_unknown_flag_falls_back_to_environment() {
        let config = SiteConfig::resolve(Some("dev"), Some("maybe"), Some(""));
        assert!(config.is_diagnostic());
        assert_eq!(config.forms_endpoint, DEFAULT_FORMS_ENDPOINT);
    }

    #[test]
    fn test_serializes_lowercase_names() {
        let config = SiteConfig::resolve(Some("staging"), None, None);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["environment"], "staging");
        assert_eq!(json["transport_mode"], "live");
    }
}
