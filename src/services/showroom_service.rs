use crate::ports::FactoryProvider;
use crate::{FurnishResult, FurnitureFamily, ShowroomError};

/// Generic furnishing routine over any factory provider.
///
/// Depends only on the capability ports; no concrete variant type appears
/// here, so registering a new family leaves this routine untouched.
pub struct ShowroomService<P>
where
    P: FactoryProvider,
{
    provider: P,
}

impl<P> ShowroomService<P>
where
    P: FactoryProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Creates one seating and one surface item from the family's factory
    /// and invokes the behavior of each.
    pub fn furnish_pair(&self, family: FurnitureFamily) -> Result<FurnishResult, ShowroomError> {
        let factory = self.provider.factory_for(family)?;

        let seating = factory.create_seating_item();
        let surface = factory.create_surface_item();

        Ok(FurnishResult {
            family: factory.family(),
            seating_id: seating.id().clone(),
            surface_id: surface.id().clone(),
            seating_description: seating.use_as_seat(),
            surface_description: surface.use_as_surface(),
        })
    }

    /// Runs the identical routine against every registered family.
    pub fn furnish_all(&self) -> Result<Vec<FurnishResult>, ShowroomError> {
        let mut results = Vec::new();
        for family in self.provider.families() {
            results.push(self.furnish_pair(family)?);
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registries::FactoryRegistry;

    #[test]
    fn test_furnish_pair_matches_requested_family() {
        let service = ShowroomService::new(FactoryRegistry::builtin());
        let result = service.furnish_pair(FurnitureFamily::Victorian).unwrap();

        assert_eq!(result.family, FurnitureFamily::Victorian);
        assert!(result.seating_description.contains("victorian"));
        assert!(result.surface_description.contains("victorian"));
    }

    #[test]
    fn test_furnish_all_covers_every_registered_family() {
        let service = ShowroomService::new(FactoryRegistry::builtin());
        let results = service.furnish_all().unwrap();

        assert_eq!(results.len(), FurnitureFamily::all().len());
    }

    #[test]
    fn test_output_differs_only_in_family_tag() {
        let service = ShowroomService::new(FactoryRegistry::builtin());

        for result in service.furnish_all().unwrap() {
            let tag = result.family.tag();
            assert_eq!(
                result.seating_description,
                format!("Settling into a {} chair", tag)
            );
            assert_eq!(
                result.surface_description,
                format!("Setting a cup down on a {} coffee table", tag)
            );
        }
    }

    #[test]
    fn test_repeated_calls_return_distinct_items() {
        let service = ShowroomService::new(FactoryRegistry::builtin());

        let first = service.furnish_pair(FurnitureFamily::Modern).unwrap();
        let second = service.furnish_pair(FurnitureFamily::Modern).unwrap();

        assert_ne!(first.seating_id, second.seating_id);
        assert_ne!(first.surface_id, second.surface_id);
        assert_eq!(first.seating_description, second.seating_description);
        assert_eq!(first.surface_description, second.surface_description);
    }

    #[test]
    fn test_unregistered_family_fails_at_selection() {
        let service = ShowroomService::new(FactoryRegistry::new());
        let result = service.furnish_pair(FurnitureFamily::Modern);

        assert!(matches!(result, Err(ShowroomError::UnknownFamily(_))));
    }
}
