//! # Defines Catalog
//!
//! Serialized form of the platform defines: per enumeration, the list of
//! `(name, value, label, tags...)` tuples the variants are built from.
//!
//! The compiled row tables in `slm-domain` are the source of truth. The
//! catalog exists to exchange those tables with non-Rust surfaces: deploys
//! dump it for front-end builds, and externally supplied catalog files are
//! verified against the compiled defines so the two can never silently
//! disagree.
//!
//! ```
//! use slm_kernel::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert!(catalog.verify().is_ok());
//! assert_eq!(catalog.entry_count(), 28);
//! ```

use crate::config::{ConfigError, load_config};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slm_domain::defines::{
    AlertLevel, Define, EquipmentState, LogEntryType, RinexVersion, SiteLogStatus,
};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use tracing::info;

/// Errors raised while loading or verifying a defines catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog config error{}: {source}", format_context(context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Catalog parse error{}: {source}", format_context(context))]
    Parse { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("Catalog serialize error{}: {source}", format_context(context))]
    Serialize { source: toml::ser::Error, context: Option<Cow<'static, str>> },

    #[error("{define} catalog entry {name:?} duplicates value {value}")]
    DuplicateValue { define: &'static str, name: String, value: i16 },

    #[error("{define} catalog has more than one entry named {name:?}")]
    DuplicateName { define: &'static str, name: String },

    #[error("{define} catalog entry {name:?} is not a known variant")]
    UnknownEntry { define: &'static str, name: String },

    #[error("{define} catalog is missing variant {name:?}")]
    MissingVariant { define: &'static str, name: String },

    #[error("{define} catalog entry {name:?}: {field} is {found}, expected {expected}")]
    Mismatch {
        define: &'static str,
        name: String,
        field: &'static str,
        expected: String,
        found: String,
    },
}

impl From<ConfigError> for CatalogError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Attaches static context to catalog results.
pub trait CatalogErrorExt<T> {
    /// Attaches `context` to the error side of `self`.
    ///
    /// # Errors
    /// Passes the original error through with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError>;
}

impl<T> CatalogErrorExt<T> for Result<T, CatalogError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                CatalogError::Config { context: c, .. }
                | CatalogError::Parse { context: c, .. }
                | CatalogError::Serialize { context: c, .. } => *c = Some(context.into()),
                _ => {}
            }
            e
        })
    }
}

impl<T> CatalogErrorExt<T> for Result<T, toml::de::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError> {
        self.map_err(|source| CatalogError::Parse { source, context: Some(context.into()) })
    }
}

impl<T> CatalogErrorExt<T> for Result<T, toml::ser::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError> {
        self.map_err(|source| CatalogError::Serialize { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// One `(name, value, label, tags...)` tuple of a defines catalog.
///
/// The tag fields are optional because each define carries a different set:
/// log entry types have a css class, statuses add a color, alert levels a
/// bootstrap context, RINEX versions their version metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub value: i16,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<NaiveDate>,
}

impl CatalogEntry {
    /// Base tuple for a variant; define-specific tags start out unset.
    fn of<T: Define>(variant: T) -> Self {
        Self {
            name: variant.name().to_owned(),
            value: variant.value(),
            label: variant.label().to_owned(),
            css: None,
            color: None,
            bootstrap: None,
            major: None,
            text: None,
            published: None,
        }
    }
}

/// The full defines catalog, one section per enumeration.
///
/// All five sections are required; a document that omits one is rejected at
/// parse time rather than silently treated as complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub log_entry_type: Vec<CatalogEntry>,
    pub site_log_status: Vec<CatalogEntry>,
    pub alert_level: Vec<CatalogEntry>,
    pub equipment_state: Vec<CatalogEntry>,
    pub rinex_version: Vec<CatalogEntry>,
}

impl Catalog {
    /// The catalog of the compiled-in defines.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            log_entry_type: LogEntryType::ALL
                .iter()
                .copied()
                .map(|entry| CatalogEntry {
                    css: Some(entry.css().to_owned()),
                    ..CatalogEntry::of(entry)
                })
                .collect(),
            site_log_status: SiteLogStatus::ALL
                .iter()
                .copied()
                .map(|status| CatalogEntry {
                    css: Some(status.css().to_owned()),
                    color: Some(status.color().to_owned()),
                    ..CatalogEntry::of(status)
                })
                .collect(),
            alert_level: AlertLevel::ALL
                .iter()
                .copied()
                .map(|level| CatalogEntry {
                    bootstrap: Some(level.bootstrap().to_owned()),
                    ..CatalogEntry::of(level)
                })
                .collect(),
            equipment_state: EquipmentState::ALL.iter().copied().map(CatalogEntry::of).collect(),
            rinex_version: RinexVersion::ALL
                .iter()
                .copied()
                .map(|version| CatalogEntry {
                    major: Some(version.major()),
                    text: Some(version.text().to_owned()),
                    published: Some(version.published()),
                    ..CatalogEntry::of(version)
                })
                .collect(),
        }
    }

    /// Loads a catalog file and verifies it against the compiled defines.
    ///
    /// The path goes through the layered config loader, so `SLM__`
    /// environment overrides apply and the extension picks the format.
    ///
    /// # Errors
    /// [`CatalogError::Config`] when the file cannot be read, otherwise any
    /// of the verification errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let catalog: Self = load_config(Some(path))?;
        catalog.verify()?;
        info!(entries = catalog.entry_count(), "Defines catalog verified");
        Ok(catalog)
    }

    /// Parses a catalog from TOML text without verifying it.
    ///
    /// # Errors
    /// [`CatalogError::Parse`] when the text is not a valid catalog document.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        toml::from_str(text).context("Failed to parse defines catalog")
    }

    /// Renders the catalog as pretty TOML for downstream consumers.
    ///
    /// # Errors
    /// [`CatalogError::Serialize`] when a value cannot be represented.
    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(self).context("Failed to serialize defines catalog")
    }

    /// Total number of entries across every section.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.sections().into_iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Checks the catalog against the compiled defines.
    ///
    /// Per section: values and names must be unique, every entry must match
    /// the compiled variant of the same name field for field, and every
    /// compiled variant must be present.
    ///
    /// # Errors
    /// The first violation found, naming the define, entry and field.
    pub fn verify(&self) -> Result<(), CatalogError> {
        let builtin = Self::builtin();
        for ((define, supplied), (_, expected)) in
            self.sections().into_iter().zip(builtin.sections())
        {
            verify_section(define, supplied, expected)?;
        }
        Ok(())
    }

    fn sections(&self) -> [(&'static str, &[CatalogEntry]); 5] {
        [
            (LogEntryType::NAME, &self.log_entry_type),
            (SiteLogStatus::NAME, &self.site_log_status),
            (AlertLevel::NAME, &self.alert_level),
            (EquipmentState::NAME, &self.equipment_state),
            (RinexVersion::NAME, &self.rinex_version),
        ]
    }
}

fn verify_section(
    define: &'static str,
    supplied: &[CatalogEntry],
    expected: &[CatalogEntry],
) -> Result<(), CatalogError> {
    for (index, entry) in supplied.iter().enumerate() {
        let earlier = &supplied[..index];
        if earlier.iter().any(|other| other.value == entry.value) {
            return Err(CatalogError::DuplicateValue {
                define,
                name: entry.name.clone(),
                value: entry.value,
            });
        }
        if earlier.iter().any(|other| other.name == entry.name) {
            return Err(CatalogError::DuplicateName { define, name: entry.name.clone() });
        }

        let known = expected
            .iter()
            .find(|candidate| candidate.name == entry.name)
            .ok_or_else(|| CatalogError::UnknownEntry { define, name: entry.name.clone() })?;

        check_field(define, &entry.name, "value", &known.value, &entry.value)?;
        check_field(define, &entry.name, "label", &known.label, &entry.label)?;
        check_field(define, &entry.name, "css", &known.css, &entry.css)?;
        check_field(define, &entry.name, "color", &known.color, &entry.color)?;
        check_field(define, &entry.name, "bootstrap", &known.bootstrap, &entry.bootstrap)?;
        check_field(define, &entry.name, "major", &known.major, &entry.major)?;
        check_field(define, &entry.name, "text", &known.text, &entry.text)?;
        check_field(define, &entry.name, "published", &known.published, &entry.published)?;
    }

    for known in expected {
        if !supplied.iter().any(|entry| entry.name == known.name) {
            return Err(CatalogError::MissingVariant { define, name: known.name.clone() });
        }
    }

    Ok(())
}

fn check_field<V: PartialEq + fmt::Debug>(
    define: &'static str,
    name: &str,
    field: &'static str,
    expected: &V,
    found: &V,
) -> Result<(), CatalogError> {
    if expected == found {
        return Ok(());
    }
    Err(CatalogError::Mismatch {
        define,
        name: name.to_owned(),
        field,
        expected: format!("{expected:?}"),
        found: format!("{found:?}"),
    })
}
