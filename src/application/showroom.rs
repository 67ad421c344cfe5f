use crate::{
    FurnishResult, FurnitureFamily, ShowroomConfig, ShowroomError, ShowroomEvent,
    ports::{EventPublisher, FactoryProvider},
};
use log::debug;
use std::sync::Arc;

/// Main application service that orchestrates showroom operations.
///
/// This is the primary entry point for furnishing functionality. It
/// coordinates factory selection, item creation, and event publication,
/// touching concrete variants only through the capability ports.
pub struct Showroom<P, EV>
where
    P: FactoryProvider,
    EV: EventPublisher,
{
    provider: Arc<P>,
    event_publisher: Arc<EV>,
    config: ShowroomConfig,
}

impl<P, EV> Showroom<P, EV>
where
    P: FactoryProvider + Send + Sync,
    EV: EventPublisher + Send + Sync,
{
    pub fn new(provider: P, event_publisher: EV, config: ShowroomConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            event_publisher: Arc::new(event_publisher),
            config,
        }
    }

    /// Furnishes a matched seating/surface pair from the requested family.
    ///
    /// Publishes `FamilySelected`, `SeatingCreated`, `SurfaceCreated`, and
    /// `FurnishCompleted` in that order; a failed selection publishes
    /// `FurnishFailed` and returns the selection error.
    pub fn furnish(&self, family: FurnitureFamily) -> Result<FurnishResult, ShowroomError> {
        debug!("furnishing with family `{}`", family);

        let factory = match self.provider.factory_for(family) {
            Ok(factory) => factory,
            Err(error) => {
                self.event_publisher.publish(ShowroomEvent::FurnishFailed {
                    selector: family.to_string(),
                    error: error.to_string(),
                })?;
                return Err(error);
            }
        };

        self.event_publisher
            .publish(ShowroomEvent::FamilySelected { family })?;

        let seating = factory.create_seating_item();
        self.event_publisher.publish(ShowroomEvent::SeatingCreated {
            family,
            item_id: seating.id().clone(),
        })?;

        let surface = factory.create_surface_item();
        self.event_publisher.publish(ShowroomEvent::SurfaceCreated {
            family,
            item_id: surface.id().clone(),
        })?;

        let result = FurnishResult {
            family: factory.family(),
            seating_id: seating.id().clone(),
            surface_id: surface.id().clone(),
            seating_description: seating.use_as_seat(),
            surface_description: surface.use_as_surface(),
        };

        self.event_publisher
            .publish(ShowroomEvent::FurnishCompleted {
                family,
                seating_id: result.seating_id.clone(),
                surface_id: result.surface_id.clone(),
            })?;

        Ok(result)
    }

    /// Furnishes with a family chosen by selector string.
    pub fn furnish_selector(&self, selector: &str) -> Result<FurnishResult, ShowroomError> {
        match FurnitureFamily::try_from(selector) {
            Ok(family) => self.furnish(family),
            Err(error) => {
                self.event_publisher.publish(ShowroomEvent::FurnishFailed {
                    selector: selector.to_string(),
                    error: error.to_string(),
                })?;
                Err(error)
            }
        }
    }

    /// Furnishes with the configured default family.
    pub fn furnish_default(&self) -> Result<FurnishResult, ShowroomError> {
        self.furnish(self.config.default_family)
    }

    /// Furnishes every registered family in turn.
    pub fn showcase(&self) -> Result<Vec<FurnishResult>, ShowroomError> {
        let mut results = Vec::new();
        for family in self.provider.families() {
            results.push(self.furnish(family)?);
        }

        Ok(results)
    }

    pub fn families(&self) -> Vec<FurnitureFamily> {
        self.provider.families()
    }

    pub fn config(&self) -> &ShowroomConfig {
        &self.config
    }

    pub fn event_publisher(&self) -> &EV {
        &self.event_publisher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registries::{EventLog, FactoryRegistry};

    fn showroom() -> Showroom<FactoryRegistry, EventLog> {
        let _ = env_logger::builder().is_test(true).try_init();
        Showroom::new(
            FactoryRegistry::builtin(),
            EventLog::new(),
            ShowroomConfig::default(),
        )
    }

    #[test]
    fn test_furnish_publishes_event_sequence() {
        let showroom = showroom();
        let result = showroom.furnish(FurnitureFamily::Modern).unwrap();

        let events = showroom.event_publisher().event_history(None).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            ShowroomEvent::FamilySelected {
                family: FurnitureFamily::Modern
            }
        );
        assert_eq!(
            events[1],
            ShowroomEvent::SeatingCreated {
                family: FurnitureFamily::Modern,
                item_id: result.seating_id.clone(),
            }
        );
        assert_eq!(
            events[2],
            ShowroomEvent::SurfaceCreated {
                family: FurnitureFamily::Modern,
                item_id: result.surface_id.clone(),
            }
        );
        assert_eq!(
            events[3],
            ShowroomEvent::FurnishCompleted {
                family: FurnitureFamily::Modern,
                seating_id: result.seating_id,
                surface_id: result.surface_id,
            }
        );
    }

    #[test]
    fn test_furnish_default_uses_configured_family() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = ShowroomConfig {
            default_family: FurnitureFamily::Victorian,
            ..ShowroomConfig::default()
        };
        let showroom = Showroom::new(FactoryRegistry::builtin(), EventLog::new(), config);

        let result = showroom.furnish_default().unwrap();
        assert_eq!(result.family, FurnitureFamily::Victorian);
    }

    #[test]
    fn test_furnish_selector_rejects_unknown_selector() {
        let showroom = showroom();
        let error = showroom.furnish_selector("baroque").unwrap_err();

        assert!(matches!(error, ShowroomError::UnknownFamily(_)));

        let events = showroom.event_publisher().event_history(None).unwrap();
        assert!(matches!(
            &events[0],
            ShowroomEvent::FurnishFailed { selector, .. } if selector == "baroque"
        ));
    }

    #[test]
    fn test_unregistered_family_publishes_failure() {
        let _ = env_logger::builder().is_test(true).try_init();
        let showroom = Showroom::new(
            FactoryRegistry::new(),
            EventLog::new(),
            ShowroomConfig::default(),
        );

        let error = showroom.furnish(FurnitureFamily::Modern).unwrap_err();
        assert!(matches!(error, ShowroomError::UnknownFamily(_)));

        let events = showroom.event_publisher().event_history(None).unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], ShowroomEvent::FurnishFailed { .. }));
    }

    #[test]
    fn test_showcase_furnishes_every_family() {
        let showroom = showroom();
        let results = showroom.showcase().unwrap();

        assert_eq!(results.len(), showroom.families().len());
        for result in &results {
            assert!(result.seating_description.contains(result.family.tag()));
            assert!(result.surface_description.contains(result.family.tag()));
        }
    }
}
