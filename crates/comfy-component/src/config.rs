//! Component configuration.
//!
//! A [`ComponentConfig`] is read once when a component is constructed.
//! Changing a config afterwards does not affect components already built.
//!
//! # TOML
//!
//! ```toml
//! track_ancestors = true
//! log_wildcard_matches = false
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use serde::{Deserialize, Serialize};

/// Per-component behavior switches.
///
/// # Example
///
/// ```
/// use comfy_component::ComponentConfig;
///
/// let config = ComponentConfig::from_toml("log_wildcard_matches = true").unwrap();
/// assert!(config.track_ancestors);
/// assert!(config.log_wildcard_matches);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    /// Record parent ids when this component is attached.
    ///
    /// The recorded parents are only used to render ancestor names in
    /// log records; they are never traversed.
    ///
    /// Default: `true`.
    pub track_ancestors: bool,

    /// Let a [`LoggingReceiver`](crate::LoggingReceiver) bound to `"*"` log
    /// its matches as well.
    ///
    /// Default: `false` (only named matches are logged).
    pub log_wildcard_matches: bool,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            track_ancestors: true,
            log_wildcard_matches: false,
        }
    }
}

impl ComponentConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`track_ancestors`](Self::track_ancestors).
    #[must_use]
    pub fn with_ancestor_tracking(mut self, enabled: bool) -> Self {
        self.track_ancestors = enabled;
        self
    }

    /// Sets [`log_wildcard_matches`](Self::log_wildcard_matches).
    #[must_use]
    pub fn with_wildcard_logging(mut self, enabled: bool) -> Self {
        self.log_wildcard_matches = enabled;
        self
    }

    /// Serializes to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserializes from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not valid TOML or a field has the wrong type.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
