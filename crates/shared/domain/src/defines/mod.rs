//! # Platform Defines
//!
//! Closed enumerations shared by every SLM surface: log entry types, site log
//! statuses, alert levels, equipment states and RINEX versions.
//!
//! Each define is a fieldless `Copy` enum backed by one immutable metadata
//! table, so repeated lookups hand back the identical variant and display
//! metadata can never drift from the variant list. Numeric values are the
//! stable storage/wire key; reverse lookup treats unknown values as a normal
//! outcome, not a fault.
//!
//! ```
//! use slm_domain::defines::{Define, SiteLogStatus};
//!
//! let status = SiteLogStatus::get(3).unwrap();
//! assert_eq!(status, SiteLogStatus::Published);
//! assert_eq!(status.to_string(), "Published");
//! assert_eq!(SiteLogStatus::get(99), None);
//! ```

mod alert_level;
mod equipment_state;
mod log_entry_type;
mod rinex_version;
mod site_log_status;

pub use alert_level::AlertLevel;
pub use equipment_state::EquipmentState;
pub use log_entry_type::LogEntryType;
pub use rinex_version::RinexVersion;
pub use site_log_status::SiteLogStatus;

use serde::de::{Error as DeError, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Common contract of every define.
///
/// Variants are immutable singletons; metadata comes from a per-define row
/// table indexed by declaration ordinal. `value` is unique within a define
/// and must never be reused or renumbered.
pub trait Define: Copy + Eq + Sized + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Identifier of the enumeration itself, as spelled in catalog documents.
    const NAME: &'static str;

    /// Stable numeric key of this variant.
    fn value(self) -> i16;

    /// Variant name as spelled in the definitions catalog.
    fn name(self) -> &'static str;

    /// Human-readable label shown by UI surfaces.
    fn label(self) -> &'static str;

    /// Reverse lookup by numeric value.
    ///
    /// `None` for values outside the define; callers use that to carry
    /// unknown/unset states, so no variant is not an error.
    fn get(value: i16) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.value() == value)
    }

    /// Case-insensitive lookup by variant name or label.
    fn from_name(text: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| {
            variant.name().eq_ignore_ascii_case(text) || variant.label().eq_ignore_ascii_case(text)
        })
    }
}

/// Serializes a define as its numeric value.
fn serialize_define<S, T>(define: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Define,
{
    serializer.serialize_i16(define.value())
}

/// Deserializes a define from its numeric value or its (case-insensitive)
/// name or label.
fn deserialize_define<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Define,
{
    deserializer.deserialize_any(DefineVisitor(PhantomData))
}

struct DefineVisitor<T>(PhantomData<T>);

impl<T: Define> Visitor<'_> for DefineVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a numeric value or name of {}", T::NAME)
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
        i16::try_from(value)
            .ok()
            .and_then(T::get)
            .ok_or_else(|| E::custom(format!("unknown {} value {value}", T::NAME)))
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
        i16::try_from(value)
            .ok()
            .and_then(T::get)
            .ok_or_else(|| E::custom(format!("unknown {} value {value}", T::NAME)))
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        T::from_name(value)
            .ok_or_else(|| E::custom(format!("unknown {} name {value:?}", T::NAME)))
    }
}
