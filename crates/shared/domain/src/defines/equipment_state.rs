use super::Define;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Manufacturing state of a receiver, antenna or radome model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentState {
    Active,
    Legacy,
}

struct Row {
    value: i16,
    name: &'static str,
    label: &'static str,
}

static ROWS: [Row; 2] = [
    Row { value: 100, name: "ACTIVE", label: "Active" },
    Row { value: 101, name: "LEGACY", label: "Legacy" },
];

impl EquipmentState {
    const fn row(self) -> &'static Row {
        &ROWS[self as usize]
    }
}

impl Define for EquipmentState {
    const ALL: &'static [Self] = &[Self::Active, Self::Legacy];
    const NAME: &'static str = "EquipmentState";

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

impl fmt::Display for EquipmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for EquipmentState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize_define(*self, serializer)
    }
}

impl<'de> Deserialize<'de> for EquipmentState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_define(deserializer)
    }
}
