use super::Define;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Moderation status of a site log, rolled up from its section statuses.
///
/// Numeric values double as merge priority: the lower value wins when two
/// statuses compete, so the most demanding state survives a rollup. The
/// ordering is fixed by the definitions catalog and must not be re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteLogStatus {
    /// Site exists but is no longer maintained.
    Dormant,
    /// Site proposed and awaiting first review.
    Pending,
    /// Site has edits that are not published yet.
    Updated,
    /// All sections published, nothing outstanding.
    Published,
    /// No site log content exists yet.
    Empty,
}

struct Row {
    value: i16,
    name: &'static str,
    label: &'static str,
    css: &'static str,
    color: &'static str,
}

/// One row per variant, in declaration order, so the ordinal is the index.
#[rustfmt::skip]
static ROWS: [Row; 5] = [
    Row { value: 0, name: "DORMANT",   label: "Dormant",   css: "slm-status-dormant",   color: "#3D4543" },
    Row { value: 1, name: "PENDING",   label: "Pending",   css: "slm-status-pending",   color: "#913D88" },
    Row { value: 2, name: "UPDATED",   label: "Updated",   css: "slm-status-updated",   color: "#0079AD" },
    Row { value: 3, name: "PUBLISHED", label: "Published", css: "slm-status-published", color: "#0D820D" },
    Row { value: 4, name: "EMPTY",     label: "Empty",     css: "slm-status-empty",     color: "#D3D3D3" },
];

impl SiteLogStatus {
    const fn row(self) -> &'static Row {
        &ROWS[self as usize]
    }

    /// CSS class attached to elements rendering this status.
    #[must_use]
    pub const fn css(self) -> &'static str {
        self.row().css
    }

    /// Hex color used for map markers and status badges.
    #[must_use]
    pub const fn color(self) -> &'static str {
        self.row().color
    }

    /// Statuses of sites that are being actively maintained.
    #[must_use]
    pub const fn active_states() -> &'static [Self] {
        &[Self::Updated, Self::Published]
    }

    /// Statuses of sites that still carry unpublished edits.
    #[must_use]
    pub const fn unpublished_states() -> &'static [Self] {
        &[Self::Pending, Self::Updated, Self::Empty]
    }

    /// Moderation status of a single section given its published flag.
    #[must_use]
    pub const fn from_published(published: bool) -> Self {
        if published { Self::Published } else { Self::Updated }
    }

    /// Returns the higher-priority (lower-valued) of `self` and `sibling`.
    ///
    /// An absent sibling is the identity, a tie resolves to `self`. The
    /// reduction is order-insensitive apart from the tie-break, so it can
    /// fold over any number of sibling sections.
    #[must_use]
    pub fn merge(self, sibling: Option<Self>) -> Self {
        match sibling {
            Some(other) if other.value() < self.value() => other,
            _ => self,
        }
    }

    /// Folds one child section status into this parent status.
    ///
    /// A `Published`, `Updated` or `Empty` parent adopts the child outright:
    /// those parents are either uninformed by children or finalized in a way
    /// the latest child observation must force forward. Any other parent
    /// competes with the child by priority.
    #[must_use]
    pub fn set(self, child: Self) -> Self {
        match self {
            Self::Published | Self::Updated | Self::Empty => child,
            _ => self.merge(Some(child)),
        }
    }

    /// Rolls up every sibling status into `self` by priority.
    #[must_use]
    pub fn merge_all<I>(self, siblings: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        siblings.into_iter().fold(self, |status, sibling| status.merge(Some(sibling)))
    }
}

impl Define for SiteLogStatus {
    const ALL: &'static [Self] =
        &[Self::Dormant, Self::Pending, Self::Updated, Self::Published, Self::Empty];
    const NAME: &'static str = "SiteLogStatus";

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

impl fmt::Display for SiteLogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SiteLogStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize_define(*self, serializer)
    }
}

impl<'de> Deserialize<'de> for SiteLogStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_define(deserializer)
    }
}
