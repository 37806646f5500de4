use super::Define;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Severity of an alert raised against a site, agency or user.
///
/// Values ascend with severity, so the derived ordering compares levels
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertLevel {
    Notice,
    Warning,
    Error,
}

struct Row {
    value: i16,
    name: &'static str,
    label: &'static str,
    bootstrap: &'static str,
}

static ROWS: [Row; 3] = [
    Row { value: 1, name: "NOTICE", label: "NOTICE", bootstrap: "info" },
    Row { value: 2, name: "WARNING", label: "WARNING", bootstrap: "warning" },
    Row { value: 3, name: "ERROR", label: "ERROR", bootstrap: "danger" },
];

impl AlertLevel {
    const fn row(self) -> &'static Row {
        &ROWS[self as usize]
    }

    /// Bootstrap context class used when rendering the alert.
    #[must_use]
    pub const fn bootstrap(self) -> &'static str {
        self.row().bootstrap
    }

    /// The most severe level among `levels`, `None` when there are none.
    pub fn highest<I>(levels: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        levels.into_iter().max()
    }
}

impl Define for AlertLevel {
    const ALL: &'static [Self] = &[Self::Notice, Self::Warning, Self::Error];
    const NAME: &'static str = "AlertLevel";

    fn value(self) -> i16 {
        self.row().value
    }

    fn name(self) -> &'static str {
        self.row().name
    }

    fn label(self) -> &'static str {
        self.row().label
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AlertLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize_define(*self, serializer)
    }
}

impl<'de> Deserialize<'de> for AlertLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_define(deserializer)
    }
}
