use crate::FurnitureFamily;
use crate::entities::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowroomEvent {
    FamilySelected {
        family: FurnitureFamily,
    },

    SeatingCreated {
        family: FurnitureFamily,
        item_id: ItemId,
    },

    SurfaceCreated {
        family: FurnitureFamily,
        item_id: ItemId,
    },

    FurnishCompleted {
        family: FurnitureFamily,
        seating_id: ItemId,
        surface_id: ItemId,
    },

    FurnishFailed {
        selector: String,
        error: String,
    },
}
