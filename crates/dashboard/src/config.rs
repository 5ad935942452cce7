//! Startup configuration of the dashboard.
//!
//! The values are captured at build time, a wasm bundle has no process
//! environment to read from once it runs in the browser:
//!
//! ```sh
//! DASHBOARD_ENV=production DASHBOARD_API_PREFIX=/shop-api/ trunk build --release
//! ```

use std::str::FromStr;

const DEVELOPMENT_PREFIX: &str = "http://localhost:8080/";
const PRODUCTION_PREFIX: &str = "./";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown environment `{0}`, expected `development` or `production`")]
    UnknownEnvironment(String),
    #[error("API prefix must not be empty")]
    EmptyPrefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    /// Backend served separately on the developer's machine.
    #[strum(to_string = "development", serialize = "dev")]
    Development,
    /// Backend serves the bundle, API calls are relative to it.
    #[strum(to_string = "production", serialize = "prod")]
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

impl Environment {
    pub fn default_prefix(self) -> ApiPrefix {
        let prefix = match self {
            Environment::Development => DEVELOPMENT_PREFIX,
            Environment::Production => PRODUCTION_PREFIX,
        };
        ApiPrefix(prefix.to_string())
    }
}

/// Base prepended to every outbound API request. Always ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{_0}")]
pub struct ApiPrefix(String);

impl FromStr for ApiPrefix {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if trimmed.ends_with('/') {
            Ok(ApiPrefix(trimmed.to_string()))
        } else {
            Ok(ApiPrefix(format!("{trimmed}/")))
        }
    }
}

impl ApiPrefix {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins a relative API path onto the prefix.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }
}

/// Process-wide configuration, resolved once before mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub prefix: ApiPrefix,
}

impl AppConfig {
    pub fn resolve(
        environment: Option<&str>,
        prefix_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let environment = match environment.map(str::trim).filter(|env| !env.is_empty()) {
            Some(env) => Environment::from_str(env)
                .map_err(|_| ConfigError::UnknownEnvironment(env.to_string()))?,
            None => Environment::default(),
        };
        let prefix = match prefix_override.filter(|prefix| !prefix.trim().is_empty()) {
            Some(prefix) => prefix.parse()?,
            None => environment.default_prefix(),
        };
        Ok(AppConfig {
            environment,
            prefix,
        })
    }

    /// Resolves the configuration from variables captured at compile time:
    /// `DASHBOARD_ENV` selects the [`Environment`], `DASHBOARD_API_PREFIX`
    /// overrides its default prefix. A blank variable counts as unset.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::resolve(
            option_env!("DASHBOARD_ENV"),
            option_env!("DASHBOARD_API_PREFIX"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case("development", Environment::Development)]
    #[case("dev", Environment::Development)]
    #[case("Production", Environment::Production)]
    #[case("PROD", Environment::Production)]
    #[case(" prod ", Environment::Production)]
    fn environment_names_are_recognized(#[case] input: &str, #[case] expected: Environment) {
        let config = AppConfig::resolve(Some(input), None).unwrap();
        assert_eq!(expected, config.environment);
        assert_eq!(expected.default_prefix(), config.prefix);
    }

    #[test]
    fn development_and_production_prefixes() {
        assert_eq!(
            "http://localhost:8080/",
            Environment::Development.default_prefix().as_str()
        );
        assert_eq!("./", Environment::Production.default_prefix().as_str());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn unset_environment_follows_build_profile(#[case] input: Option<&str>) {
        let config = AppConfig::resolve(input, None).unwrap();
        assert_eq!(Environment::default(), config.environment);
        let expected = if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        };
        assert_eq!(expected, config.environment);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = AppConfig::resolve(Some("staging"), None).unwrap_err();
        assert_matches!(err, ConfigError::UnknownEnvironment(env) if env == "staging");
    }

    #[test]
    fn prefix_override_wins_over_environment() {
        let config = AppConfig::resolve(Some("production"), Some("https://shop.example/api/"))
            .unwrap();
        assert_eq!(Environment::Production, config.environment);
        assert_eq!("https://shop.example/api/", config.prefix.as_str());
    }

    #[rstest]
    #[case("./", "./")]
    #[case("/api", "/api/")]
    #[case(" http://localhost:8080 ", "http://localhost:8080/")]
    fn prefix_gets_trailing_slash(#[case] input: &str, #[case] expected: &str) {
        let prefix: ApiPrefix = input.parse().unwrap();
        assert_eq!(expected, prefix.as_str());
        assert_eq!(expected, prefix.to_string());
    }

    #[rstest]
    #[case(Some(""))]
    #[case(Some(" "))]
    fn blank_prefix_override_counts_as_unset(#[case] prefix: Option<&str>) {
        let config = AppConfig::resolve(Some("production"), prefix).unwrap();
        assert_eq!(Environment::Production.default_prefix(), config.prefix);
        let config = AppConfig::resolve(None, prefix).unwrap();
        assert_eq!(AppConfig::resolve(None, None).unwrap(), config);
    }

    #[test]
    fn empty_prefix_is_rejected() {
        assert_matches!(" ".parse::<ApiPrefix>(), Err(ConfigError::EmptyPrefix));
    }

    #[rstest]
    #[case("./", "products", "./products")]
    #[case("./", "/products", "./products")]
    #[case("http://localhost:8080/", "momo/orders", "http://localhost:8080/momo/orders")]
    fn url_joins_onto_prefix(#[case] prefix: &str, #[case] path: &str, #[case] expected: &str) {
        let prefix: ApiPrefix = prefix.parse().unwrap();
        assert_eq!(expected, prefix.url(path));
    }
}
