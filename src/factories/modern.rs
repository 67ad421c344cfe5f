// src/factories/modern.rs

use crate::FurnitureFamily;
use crate::entities::{ModernChair, ModernCoffeeTable};
use crate::ports::{FurnitureFactory, SeatingItem, SurfaceItem};

/// Factory for the modern furniture family.
///
/// Bound to [`FurnitureFamily::Modern`] at construction; every creation call
/// returns a fresh modern-family item, so a caller holding this factory can
/// never receive a mixed pair.
///
/// # Examples
/// ```
/// use showroom_core::factories::ModernFurnitureFactory;
/// use showroom_core::ports::{FurnitureFactory, SeatingItem};
///
/// let factory = ModernFurnitureFactory;
/// let seat = factory.create_seating_item();
/// assert!(seat.use_as_seat().contains("modern"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModernFurnitureFactory;

impl FurnitureFactory for ModernFurnitureFactory {
    fn family(&self) -> FurnitureFamily {
        FurnitureFamily::Modern
    }

    fn create_seating_item(&self) -> Box<dyn SeatingItem> {
        Box::new(ModernChair::new())
    }

    fn create_surface_item(&self) -> Box<dyn SurfaceItem> {
        Box::new(ModernCoffeeTable::new())
    }
}
