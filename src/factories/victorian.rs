// src/factories/victorian.rs

use crate::FurnitureFamily;
use crate::entities::{VictorianChair, VictorianCoffeeTable};
use crate::ports::{FurnitureFactory, SeatingItem, SurfaceItem};

/// Factory for the victorian furniture family.
///
/// Bound to [`FurnitureFamily::Victorian`] at construction; every creation
/// call returns a fresh victorian-family item.
#[derive(Debug, Clone, Default)]
pub struct VictorianFurnitureFactory;

impl FurnitureFactory for VictorianFurnitureFactory {
    fn family(&self) -> FurnitureFamily {
        FurnitureFamily::Victorian
    }

    fn create_seating_item(&self) -> Box<dyn SeatingItem> {
        Box::new(VictorianChair::new())
    }

    fn create_surface_item(&self) -> Box<dyn SurfaceItem> {
        Box::new(VictorianCoffeeTable::new())
    }
}
