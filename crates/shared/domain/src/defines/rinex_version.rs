use super::Define;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// RINEX format version a data file conforms to.
///
/// Values are non-contiguous: the bare major versions sit at 2/3/4 and stand
/// for "minor version not known", point releases sit at `major * 100 + minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RinexVersion {
    V2,
    V3,
    V4,
    V2_11,
    V3_00,
    V3_01,
    V3_02,
    V3_03,
    V3_04,
    V3_05,
    V4_00,
}

struct Row {
    value: i16,
    name: &'static str,
    label: &'static str,
    major: u8,
    text: &'static str,
    published: NaiveDate,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(published) => published,
        None => panic!("invalid RINEX publication date"),
    }
}

#[rustfmt::skip]
static ROWS: [Row; 11] = [
    Row { value: 2,   name: "v2",    label: "RINEX 2",    major: 2, text: "2",    published: date(1993, 4, 1) },
    Row { value: 3,   name: "v3",    label: "RINEX 3",    major: 3, text: "3",    published: date(2007, 11, 28) },
    Row { value: 4,   name: "v4",    label: "RINEX 4",    major: 4, text: "4",    published: date(2021, 12, 1) },
    Row { value: 211, name: "v2_11", label: "RINEX 2.11", major: 2, text: "2.11", published: date(2012, 6, 26) },
    Row { value: 300, name: "v3_00", label: "RINEX 3.00", major: 3, text: "3.00", published: date(2007, 11, 28) },
    Row { value: 301, name: "v3_01", label: "RINEX 3.01", major: 3, text: "3.01", published: date(2009, 6, 22) },
    Row { value: 302, name: "v3_02", label: "RINEX 3.02", major: 3, text: "3.02", published: date(2013, 4, 13) },
    Row { value: 303, name: "v3_03", label: "RINEX 3.03", major: 3, text: "3.03", published: date(2017, 1, 25) },
    Row { value: 304, name: "v3_04", label: "RINEX 3.04", major: 3, text: "3.04", published: date(2018, 11, 23) },
    Row { value: 305, name: "v3_05", label: "RINEX 3.05", major: 3, text: "3.05", published: date(2020, 12, 1) },
    Row { value: 400, name: "v4_00", label: "RINEX 4.00", major: 4, text: "4.00", published: date(2021, 12, 1) },
];

impl RinexVersion {
    const fn row(self) -> &'static Row {
        &ROWS[self as usize]
    }

    /// Major version line this release belongs to.
    #[must_use]
    pub const fn major(self) -> u8 {
        self.row().major
    }

    /// Version number as written in RINEX headers.
    #[must_use]
    pub const fn text(self) -> &'static str {
        self.row().text
    }

    /// Date the format revision was published.
    #[must_use]
    pub const fn published(self) -> NaiveDate {
        self.row().published
    }

    /// True for the bare major versions that carry no minor component.
    #[must_use]
    pub const fn is_major_alias(self) -> bool {
        matches!(self, Self::V2 | Self::V3 | Self::V4)
    }

    /// Every version of the same major line, including the bare major.
    pub fn with_major(major: u8) -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied().filter(move |version| version.major() == major)
    }
}

impl Define for RinexVersion {
    const ALL: &'static [Self] = &[
        Self::V2,
        Self::V3,
        Self::V4,
        Self::V2_11,
        Self::V3_00,
        Self::V3_01,
        Self::V3_02,
        Self::V3_03,
        Self::V3_04,
        Self::V3_05,
        Self::V4_00,
    ];
    const NAME: &'static str = "RinexVersion";

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

impl fmt::Display for RinexVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RinexVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize_define(*self, serializer)
    }
}

impl<'de> Deserialize<'de> for RinexVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_define(deserializer)
    }
}
