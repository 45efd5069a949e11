//! API key resolution
//!
//! The key comes from `provider.api_key` if set, otherwise from the
//! environment variable named by `provider.api_key_env`. Blank values count
//! as missing. A missing key is a startup failure, never a warning.

use super::error::ConfigError;
use super::file_config::FileProviderConfig;

/// Provider credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Resolve the API key from config, falling back to the process environment.
pub fn resolve_api_key(config: &FileProviderConfig) -> Result<ApiKey, ConfigError> {
    resolve_api_key_with(config, |name| std::env::var(name).ok())
}

/// Resolve the API key using `lookup` for environment variables.
pub fn resolve_api_key_with(
    config: &FileProviderConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ApiKey, ConfigError> {
    if let Some(key) = config.api_key.as_deref().map(str::trim)
        && !key.is_empty()
    {
        return Ok(ApiKey::new(key));
    }

    let env_var = config.api_key_env.trim();
    match lookup(env_var) {
        Some(value) if !value.trim().is_empty() => Ok(ApiKey::new(value.trim())),
        _ => Err(ConfigError::MissingCredential {
            env_var: env_var.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_config_key_wins_over_env() {
        let config = FileProviderConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        let key = resolve_api_key_with(&config, env(&[("GROQ_API_KEY", "from-env")])).unwrap();
        assert_eq!(key.expose(), "from-config");
    }

    #[test]
    fn test_env_fallback_uses_configured_name() {
        let config = FileProviderConfig {
            api_key_env: "PIZZA_KEY".to_string(),
            ..Default::default()
        };
        let key = resolve_api_key_with(&config, env(&[("PIZZA_KEY", " gsk_123 \n")])).unwrap();
        assert_eq!(key.expose(), "gsk_123");
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        let config = FileProviderConfig::default();
        let err = resolve_api_key_with(&config, env(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingCredential {
                env_var: "GROQ_API_KEY".to_string()
            }
        );
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = FileProviderConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        let err = resolve_api_key_with(&config, env(&[("GROQ_API_KEY", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { .. }));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("gsk_secret");
        assert_eq!(format!("{:?}", key), "ApiKey(<redacted>)");
    }
}
