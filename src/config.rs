//! Client configuration: profiles read from the CLI's YAML file and the
//! resolved per-invocation settings passed into request builders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_DEPTH: i32 = 50;

/// One named profile as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub permify_url: String,
    pub tenant: String,
}

/// All profiles of a configuration file, keyed by profile name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProfileConfigs(BTreeMap<String, Profile>);

impl ProfileConfigs {
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when the text is not a map of profiles.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let configs: ProfileConfigs = serde_yaml::from_str(text)?;
        debug!(
            event = "Config",
            phase = "Parsed",
            profiles = configs.0.len()
        );
        Ok(configs)
    }

    /// # Errors
    ///
    /// [`ConfigError::Parse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Add or replace a profile.
    pub fn insert(&mut self, name: impl Into<String>, profile: Profile) {
        self.0.insert(name.into(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Check that `name` exists and has both a service URL and a tenant.
    ///
    /// # Errors
    ///
    /// The first missing piece, in that order.
    pub fn is_configured(&self, name: &str) -> Result<(), ConfigError> {
        let profile = self
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;
        if profile.permify_url.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint(name.to_string()));
        }
        if profile.tenant.trim().is_empty() {
            return Err(ConfigError::MissingTenant(name.to_string()));
        }
        Ok(())
    }

    /// Resolve a profile into the settings used to build requests.
    ///
    /// # Errors
    ///
    /// See [`ProfileConfigs::is_configured`].
    pub fn client_config(&self, name: &str) -> Result<ClientConfig, ConfigError> {
        self.is_configured(name)?;
        let profile = self
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;
        debug!(
            event = "Config",
            phase = "Profile",
            profile = name,
            url = profile.permify_url.as_str()
        );
        Ok(ClientConfig::new(&profile.permify_url, &profile.tenant))
    }
}

/// Settings of one CLI invocation, threaded explicitly into request building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    tenant: String,
    schema_version: Option<String>,
    depth: i32,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, tenant: impl Into<String>) -> Self {
        ClientConfig {
            endpoint: endpoint.into(),
            tenant: tenant.into(),
            schema_version: None,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Pin requests to a schema version; an empty string means "latest".
    pub fn with_schema_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.schema_version = (!version.is_empty()).then_some(version);
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn schema_version(&self) -> &str {
        self.schema_version.as_deref().unwrap_or_default()
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Whether the endpoint is reached over TLS.
    pub fn ssl_enabled(&self) -> bool {
        self.endpoint.starts_with("https")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    const PROFILES: &str = r#"
default:
  permify_url: https://permify.example.com
  tenant: t1
local:
  permify_url: http://localhost:3476
  tenant: ""
"#;

    #[test]
    fn test_profiles_from_yaml() {
        let configs = ProfileConfigs::from_yaml(PROFILES).unwrap();
        assert_eq!(configs.names().collect::<Vec<_>>(), vec!["default", "local"]);
        assert_eq!(
            configs.get("default"),
            Some(&Profile {
                permify_url: "https://permify.example.com".to_string(),
                tenant: "t1".to_string(),
            })
        );
    }

    #[test]
    fn test_profiles_from_empty_yaml() {
        let configs = ProfileConfigs::from_yaml("  \n").unwrap();
        assert_eq!(configs.names().count(), 0);
    }

    #[test]
    fn test_profiles_from_invalid_yaml() {
        assert!(matches!(
            ProfileConfigs::from_yaml("- just\n- a list\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[parameterized(
        configured = { "default", Ok(()) },
        missing_tenant = { "local", Err(ConfigError::MissingTenant("local".to_string())) },
        unknown = { "staging", Err(ConfigError::UnknownProfile("staging".to_string())) },
    )]
    fn test_is_configured(profile: &str, expected: Result<(), ConfigError>) {
        let configs = ProfileConfigs::from_yaml(PROFILES).unwrap();
        assert_eq!(configs.is_configured(profile), expected);
    }

    #[test]
    fn test_missing_endpoint() {
        let mut configs = ProfileConfigs::default();
        configs.insert(
            DEFAULT_PROFILE,
            Profile {
                permify_url: String::new(),
                tenant: "t1".to_string(),
            },
        );
        assert_eq!(
            configs.is_configured(DEFAULT_PROFILE),
            Err(ConfigError::MissingEndpoint(DEFAULT_PROFILE.to_string()))
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut configs = ProfileConfigs::default();
        configs.insert(
            DEFAULT_PROFILE,
            Profile {
                permify_url: "http://localhost:3476".to_string(),
                tenant: "t1".to_string(),
            },
        );
        let text = configs.to_yaml().unwrap();
        assert_eq!(ProfileConfigs::from_yaml(&text).unwrap(), configs);
    }

    #[test]
    fn test_client_config_from_profile() {
        let configs = ProfileConfigs::from_yaml(PROFILES).unwrap();
        let config = configs.client_config("default").unwrap();
        assert_eq!(config.endpoint(), "https://permify.example.com");
        assert_eq!(config.tenant(), "t1");
        assert_eq!(config.depth(), DEFAULT_DEPTH);
        assert_eq!(config.schema_version(), "");
        assert!(config.ssl_enabled());
    }

    #[parameterized(
        https = { "https://permify.example.com", true },
        http = { "http://localhost:3476", false },
        bare = { "localhost:3478", false },
    )]
    fn test_ssl_enabled(endpoint: &str, expected: bool) {
        assert_eq!(ClientConfig::new(endpoint, "t1").ssl_enabled(), expected);
    }

    #[test]
    fn test_client_config_builders() {
        let config = ClientConfig::new("http://localhost:3476", "t1")
            .with_schema_version("cnb0hd8")
            .with_depth(10);
        assert_eq!(config.schema_version(), "cnb0hd8");
        assert_eq!(config.depth(), 10);
        assert_eq!(config.with_schema_version("").schema_version(), "");
    }
}
