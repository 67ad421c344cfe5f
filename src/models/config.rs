use crate::{FurnitureFamily, ShowroomError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShowroomConfig {
    pub default_family: FurnitureFamily,
    pub families: Vec<FamilyConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FamilyConfig {
    pub family: FurnitureFamily,
    pub enabled: bool,
    pub priority: u32,
}

impl FamilyConfig {
    pub fn new(family: FurnitureFamily) -> Self {
        Self {
            family,
            enabled: true,
            priority: 100,
        }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl ShowroomConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ShowroomError> {
        let config: ShowroomConfig =
            toml::from_str(raw).map_err(|e| ShowroomError::DeserializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ShowroomError> {
        toml::to_string(self).map_err(|e| ShowroomError::SerializationError(e.to_string()))
    }

    /// Reads and parses a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ShowroomError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn is_enabled(&self, family: FurnitureFamily) -> bool {
        self.families
            .iter()
            .any(|entry| entry.family == family && entry.enabled)
    }

    /// Enabled families ordered by descending priority, then by tag.
    pub fn enabled_families(&self) -> Vec<FurnitureFamily> {
        let mut entries: Vec<&FamilyConfig> =
            self.families.iter().filter(|entry| entry.enabled).collect();
        entries.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.family.cmp(&b.family)));
        entries.into_iter().map(|entry| entry.family).collect()
    }

    pub fn validate(&self) -> Result<(), ShowroomError> {
        if self.families.is_empty() {
            return Err(ShowroomError::invalid_config(
                "At least one furniture family must be configured",
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.families {
            if !seen.insert(entry.family) {
                return Err(ShowroomError::invalid_config(format!(
                    "Furniture family `{}` is configured more than once",
                    entry.family
                )));
            }
        }

        if !self.is_enabled(self.default_family) {
            return Err(ShowroomError::invalid_config(format!(
                "Default family `{}` is not an enabled family",
                self.default_family
            )));
        }

        Ok(())
    }
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            default_family: FurnitureFamily::Modern,
            families: FurnitureFamily::all()
                .iter()
                .copied()
                .map(FamilyConfig::new)
                .collect(),
        }
    }
}
