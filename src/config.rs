//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default EmailJS send endpoint
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default `to_name` template value
pub const DEFAULT_RECIPIENT_LABEL: &str = "ANB Tech Solution";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Delivery settings for the contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// EmailJS service identifier
    pub service_id: String,
    /// EmailJS template identifier
    pub template_id: String,
    /// EmailJS public key
    pub public_key: String,
    /// Recipient name filled into every message
    pub recipient_label: String,
    /// Send endpoint
    pub api_url: String,
    /// Seconds to wait for the service, 0 waits forever
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            recipient_label: DEFAULT_RECIPIENT_LABEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_create(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load `path`, writing a defaults file there first if it does not exist
    fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        // A template with empty credentials for the user to fill in
        match config.save_to(path) {
            Ok(()) => tracing::info!(path = %path.display(), "Wrote default config"),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "Could not write default config"),
        }
        Ok(config)
    }

    /// Read a config file, falling back to defaults when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Override fields from `CONTACT_FORM_*` variables
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let targets = [
            ("CONTACT_FORM_SERVICE_ID", &mut self.service_id),
            ("CONTACT_FORM_TEMPLATE_ID", &mut self.template_id),
            ("CONTACT_FORM_PUBLIC_KEY", &mut self.public_key),
            ("CONTACT_FORM_API_URL", &mut self.api_url),
        ];
        for (key, target) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *target = value;
            }
        }
    }

    /// Save configuration as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Names of the credentials that are still empty
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Transport timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
