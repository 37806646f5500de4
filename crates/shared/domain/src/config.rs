use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level SLM settings shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlmConfigInner {
    pub site: SiteConfig,
    pub defines: DefinesConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SlmConfig {
    #[serde(flatten, default)]
    inner: Arc<SlmConfigInner>,
}

impl Deref for SlmConfig {
    type Target = SlmConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SlmConfig {
    fn deref_mut(&mut self) -> &mut SlmConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Organization-facing site settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub org_name: String,
    pub max_upload_mb: u64,
}

/// Definitions catalog location (compiled-in defines are used when absent).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefinesConfig {
    pub catalog: Option<PathBuf>,
}

/// File presentation settings: mimetype subtype to icon class.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub icons: BTreeMap<String, String>,
    pub fallback_icon: String,
}

/// Logging settings consumed by the logger bootstrap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
}

impl FilesConfig {
    /// Icon class for a file given its mimetype.
    ///
    /// Keyed by the mimetype subtype (the part after `/`); unknown subtypes
    /// get the fallback icon.
    #[must_use]
    pub fn icon(&self, mimetype: &str) -> &str {
        let subtype = mimetype.rsplit('/').next().unwrap_or_default();
        self.icons.get(subtype).map_or(self.fallback_icon.as_str(), String::as_str)
    }
}

// --- Default ---

impl Default for SiteConfig {
    fn default() -> Self {
        Self { org_name: "SLM".to_owned(), max_upload_mb: 100 }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        let icons = [
            ("zip", "bi bi-file-zip"),
            ("x-tar", "bi bi-file-zip"),
            ("plain", "bi bi-filetype-txt"),
            ("jpeg", "bi bi-filetype-jpg"),
            ("png", "bi bi-filetype-png"),
            ("gif", "bi bi-filetype-gif"),
            ("tiff", "bi bi-filetype-tiff"),
            ("svg+xml", "bi bi-filetype-svg"),
            ("pdf", "bi bi-filetype-pdf"),
            ("json", "bi bi-filetype-json"),
            ("xml", "bi bi-filetype-xml"),
            ("csv", "bi bi-filetype-csv"),
        ]
        .into_iter()
        .map(|(subtype, icon)| (subtype.to_owned(), icon.to_owned()))
        .collect();

        Self { icons, fallback_icon: "bi bi-file-earmark".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None }
    }
}
