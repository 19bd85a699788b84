//! Application settings: namespace, API location and request timeout.

use crate::bus::EventName;
use crate::entities::Entity;
use crate::error::{DetailError, Result};
use config::{Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Namespace the generated application publishes its events under.
pub const DEFAULT_NAMESPACE: &str = "traningbackendApp";

/// Base URL the REST resources are resolved against.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application settings.
///
/// Loaded with standard precedence: built-in defaults, then files in the
/// order given, then environment overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Event namespace, the `<appNamespace>` in `<appNamespace>:<entity>Update`
    pub namespace: String,
    /// Base URL for REST resources
    pub api_base_url: String,
    /// Per-request timeout, in seconds
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Create a new builder for loading settings.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// The update event name for an entity type in this namespace.
    pub fn event_name(&self, entity_type: &str) -> EventName {
        EventName::update(&self.namespace, entity_type)
    }

    /// The update event name for entity type `T`.
    pub fn update_event<T: Entity>(&self) -> EventName {
        self.event_name(T::ENTITY_TYPE)
    }

    /// The request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Builder for loading [`Settings`].
///
/// # Examples
///
/// ```rust,no_run
/// use entity_detail::settings::Settings;
///
/// # fn example() -> entity_detail::error::Result<()> {
/// // APP__NAMESPACE=myApp -> namespace = "myApp"
/// let settings = Settings::builder()
///     .with_file("config/default.yaml")
///     .with_env_overrides("APP", "__")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SettingsBuilder {
    file_paths: Vec<PathBuf>,
    env_prefix: Option<String>,
    env_separator: Option<String>,
}

impl SettingsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            file_paths: Vec::new(),
            env_prefix: None,
            env_separator: None,
        }
    }

    /// Add a settings file; the format is detected from the extension.
    ///
    /// Later files override earlier ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push(path.into());
        self
    }

    /// Read overrides from environment variables.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "APP")
    /// * `separator` - Separator between prefix and key (e.g., "__" for APP__NAMESPACE)
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.env_separator = Some(separator.to_string());
        self
    }

    /// Load the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or a value has the
    /// wrong type.
    pub fn build(self) -> Result<Settings> {
        let mut builder = config::Config::builder()
            .set_default("namespace", DEFAULT_NAMESPACE)?
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?;

        for path in &self.file_paths {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        if let (Some(prefix), Some(separator)) = (self.env_prefix, self.env_separator) {
            builder = builder.add_source(
                Environment::with_prefix(&prefix)
                    .separator(&separator)
                    .try_parsing(true),
            );
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        if settings.namespace.is_empty() {
            return Err(DetailError::Settings("namespace must not be empty".to_string()));
        }

        tracing::debug!(
            namespace = %settings.namespace,
            api_base_url = %settings.api_base_url,
            "settings loaded"
        );
        Ok(settings)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Department;

    #[test]
    fn test_defaults() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_update_event_name() {
        let settings = Settings::default();
        assert_eq!(
            settings.update_event::<Department>().as_str(),
            "traningbackendApp:departmentUpdate"
        );
    }

    #[test]
    fn test_builder_accumulates_files() {
        let builder = SettingsBuilder::new()
            .with_file("settings1.yaml")
            .with_file("settings2.toml");
        assert_eq!(builder.file_paths.len(), 2);
    }

    #[test]
    fn test_builder_env_overrides() {
        let builder = SettingsBuilder::new().with_env_overrides("APP", "__");
        assert_eq!(builder.env_prefix, Some("APP".to_string()));
        assert_eq!(builder.env_separator, Some("__".to_string()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = SettingsBuilder::new()
            .with_file("/definitely/not/here/settings.yaml")
            .build();
        assert!(matches!(result, Err(DetailError::Settings(_))));
    }
}
