use crate::factories::{ModernFurnitureFactory, VictorianFurnitureFactory};
use crate::ports::{FactoryProvider, FurnitureFactory};
use crate::{FurnitureFamily, ShowroomConfig, ShowroomError};
use log::debug;
use std::collections::HashMap;

/// Registry of family-bound factories.
///
/// This is the selection collaborator: it maps a family selector to the
/// factory registered for it and rejects selectors nothing was registered
/// for. Factories themselves never see an unknown family.
pub struct FactoryRegistry {
    factories: HashMap<FurnitureFamily, RegisteredFactory>,
}

struct RegisteredFactory {
    factory: Box<dyn FurnitureFactory>,
    enabled: bool,
    priority: u32,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with every built-in family factory registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ModernFurnitureFactory));
        registry.register(Box::new(VictorianFurnitureFactory));
        registry
    }

    /// Creates a registry from a validated configuration.
    ///
    /// Disabled families stay resolvable as [`ShowroomError::FamilyDisabled`]
    /// rather than [`ShowroomError::UnknownFamily`], so callers can tell a
    /// switched-off family apart from a selector that was never registered.
    pub fn from_config(config: &ShowroomConfig) -> Result<Self, ShowroomError> {
        config.validate()?;

        let mut registry = Self::new();
        for entry in &config.families {
            registry.factories.insert(
                entry.family,
                RegisteredFactory {
                    factory: Self::builtin_factory(entry.family),
                    enabled: entry.enabled,
                    priority: entry.priority,
                },
            );
        }

        Ok(registry)
    }

    /// Registers a factory under its own family, replacing any previous one.
    pub fn register(&mut self, factory: Box<dyn FurnitureFactory>) {
        let family = factory.family();
        debug!("registering factory for family `{}`", family);

        self.factories.insert(
            family,
            RegisteredFactory {
                factory,
                enabled: true,
                priority: 100,
            },
        );
    }

    fn builtin_factory(family: FurnitureFamily) -> Box<dyn FurnitureFactory> {
        match family {
            FurnitureFamily::Modern => Box::new(ModernFurnitureFactory),
            FurnitureFamily::Victorian => Box::new(VictorianFurnitureFactory),
        }
    }
}

impl FactoryProvider for FactoryRegistry {
    fn factory_for(
        &self,
        family: FurnitureFamily,
    ) -> Result<&dyn FurnitureFactory, ShowroomError> {
        match self.factories.get(&family) {
            Some(entry) if entry.enabled => Ok(entry.factory.as_ref()),
            Some(_) => Err(ShowroomError::FamilyDisabled(family)),
            None => Err(ShowroomError::UnknownFamily(family.to_string())),
        }
    }

    /// Enabled families ordered by descending priority, then by tag.
    fn families(&self) -> Vec<FurnitureFamily> {
        let mut entries: Vec<(u32, FurnitureFamily)> = self
            .factories
            .iter()
            .filter(|(_, entry)| entry.enabled)
            .map(|(family, entry)| (entry.priority, *family))
            .collect();

        entries.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        entries.into_iter().map(|(_, family)| family).collect()
    }

    fn is_registered(&self, family: FurnitureFamily) -> bool {
        self.factories
            .get(&family)
            .map(|entry| entry.enabled)
            .unwrap_or(false)
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
