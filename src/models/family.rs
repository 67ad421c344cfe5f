use crate::ShowroomError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector for a themed product line.
///
/// The family set is closed: every variant has exactly one seating and one
/// surface implementation, created through the family's factory.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FurnitureFamily {
    #[serde(rename = "modern")]
    Modern,
    #[serde(rename = "victorian")]
    Victorian,
}

impl FurnitureFamily {
    pub fn all() -> &'static [FurnitureFamily] {
        &[Self::Modern, Self::Victorian]
    }

    /// Lowercase tag embedded in item behavior output.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Victorian => "victorian",
        }
    }
}

impl Default for FurnitureFamily {
    fn default() -> Self {
        Self::Modern
    }
}

impl fmt::Display for FurnitureFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl TryFrom<&str> for FurnitureFamily {
    type Error = ShowroomError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "victorian" => Ok(Self::Victorian),
            _ => Err(ShowroomError::UnknownFamily(value.to_string())),
        }
    }
}
