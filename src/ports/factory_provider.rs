use super::FurnitureFactory;
use crate::{FurnitureFamily, ShowroomError};

pub trait FactoryProvider: Send + Sync {
    fn factory_for(
        &self,
        family: FurnitureFamily,
    ) -> Result<&dyn FurnitureFactory, ShowroomError>;

    fn families(&self) -> Vec<FurnitureFamily>;

    fn is_registered(&self, family: FurnitureFamily) -> bool;

    fn select(&self, selector: &str) -> Result<&dyn FurnitureFactory, ShowroomError> {
        self.factory_for(FurnitureFamily::try_from(selector)?)
    }
}
