//! Environment-driven configuration shared by the cloud vendor crates.
//!
//! Configuration structs implement [`FromEnv`] and use the helpers in this
//! module to read, default and parse variables with uniform error messages.

pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Deployment environment, selected by `APP_ENV`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Read an environment variable, falling back to `default` when unset
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read an environment variable or fail with [`ConfigError::MissingEnvVar`]
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Read and parse an environment variable, using `default` when unset.
///
/// ```
/// use core_config::env_parse;
///
/// let pool_size: u32 = env_parse("SOME_UNSET_POOL_SIZE", 10).unwrap();
/// assert_eq!(pool_size, 10);
/// ```
pub fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("CV_TEST_VAR", Some("set"), || {
            assert_eq!(env_or_default("CV_TEST_VAR", "fallback"), "set");
        });
        temp_env::with_var_unset("CV_TEST_VAR", || {
            assert_eq!(env_or_default("CV_TEST_VAR", "fallback"), "fallback");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("CV_MISSING_REQUIRED", || {
            let err = env_required("CV_MISSING_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("CV_MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_parse_value_and_default() {
        temp_env::with_var("CV_POOL", Some(" 42 "), || {
            assert_eq!(env_parse::<u32>("CV_POOL", 1).unwrap(), 42);
        });
        temp_env::with_var_unset("CV_POOL", || {
            assert_eq!(env_parse::<u32>("CV_POOL", 7).unwrap(), 7);
        });
    }

    #[test]
    fn test_env_parse_invalid() {
        temp_env::with_var("CV_FLAG", Some("maybe"), || {
            let err = env_parse::<bool>("CV_FLAG", false).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "CV_FLAG"));
        });
    }
}
