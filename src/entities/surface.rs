use super::ItemId;
use crate::FurnitureFamily;
use crate::ports::SurfaceItem;

/// Surface variant of the modern family.
#[derive(Debug, Clone)]
pub struct ModernCoffeeTable {
    id: ItemId,
}

impl ModernCoffeeTable {
    pub fn new() -> Self {
        Self { id: ItemId::new() }
    }
}

impl Default for ModernCoffeeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceItem for ModernCoffeeTable {
    fn family(&self) -> FurnitureFamily {
        FurnitureFamily::Modern
    }

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn use_as_surface(&self) -> String {
        format!("Setting a cup down on a {} coffee table", self.family())
    }
}

/// Surface variant of the victorian family.
#[derive(Debug, Clone)]
pub struct VictorianCoffeeTable {
    id: ItemId,
}

impl VictorianCoffeeTable {
    pub fn new() -> Self {
        Self { id: ItemId::new() }
    }
}

impl Default for VictorianCoffeeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceItem for VictorianCoffeeTable {
    fn family(&self) -> FurnitureFamily {
        FurnitureFamily::Victorian
    }

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn use_as_surface(&self) -> String {
        format!("Setting a cup down on a {} coffee table", self.family())
    }
}
