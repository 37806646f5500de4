use super::Define;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of entry recorded in a site's change log. No ordering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogEntryType {
    NewSite,
    Add,
    Update,
    Delete,
    Publish,
    LogUpload,
    ImageUpload,
}

struct Row {
    value: i16,
    name: &'static str,
    label: &'static str,
    css: &'static str,
}

static ROWS: [Row; 7] = [
    Row { value: 1, name: "NEW_SITE", label: "New Site", css: "slm-log-new-site" },
    Row { value: 2, name: "ADD", label: "Add", css: "slm-log-add" },
    Row { value: 3, name: "UPDATE", label: "Update", css: "slm-log-update" },
    Row { value: 4, name: "DELETE", label: "Delete", css: "slm-log-delete" },
    Row { value: 5, name: "PUBLISH", label: "Publish", css: "slm-log-publish" },
    Row { value: 6, name: "LOG_UPLOAD", label: "Log Upload", css: "slm-log-upload" },
    Row { value: 7, name: "IMAGE_UPLOAD", label: "Image Upload", css: "slm-log-image-upload" },
];

impl LogEntryType {
    const fn row(self) -> &'static Row {
        &ROWS[self as usize]
    }

    /// CSS class attached to rendered log entries of this type.
    #[must_use]
    pub const fn css(self) -> &'static str {
        self.row().css
    }
}

impl Define for LogEntryType {
    const ALL: &'static [Self] = &[
        Self::NewSite,
        Self::Add,
        Self::Update,
        Self::Delete,
        Self::Publish,
        Self::LogUpload,
        Self::ImageUpload,
    ];
    const NAME: &'static str = "LogEntryType";

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

impl fmt::Display for LogEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for LogEntryType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize_define(*self, serializer)
    }
}

impl<'de> Deserialize<'de> for LogEntryType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_define(deserializer)
    }
}
