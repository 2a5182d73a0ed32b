use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of villas on the site
pub const UNIT_COUNT: usize = 108;

/// One building unit ("Unit 1" .. "Unit 108")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit {
    index: usize,
}

impl Unit {
    pub fn count() -> usize {
        UNIT_COUNT
    }

    pub fn all() -> impl Iterator<Item = Unit> {
        (0..UNIT_COUNT).map(|index| Unit { index })
    }

    pub fn first() -> Self {
        Unit { index: 0 }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < UNIT_COUNT).then_some(Unit { index })
    }

    /// Linear lookup over the ordered unit list.
    ///
    /// Labels are compared whole, so "Unit 1" never matches "Unit 10".
    pub fn from_label(label: &str) -> Option<Self> {
        Unit::all().find(|unit| unit.label() == label)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based number shown to users
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn label(&self) -> String {
        format!("Unit {}", self.number())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit {}", self.number())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Unit::from_label(&label).ok_or_else(|| de::Error::custom(format!("unknown unit: {label}")))
    }
}
