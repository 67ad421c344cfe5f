use crate::FurnitureFamily;
use crate::entities::ItemId;

#[derive(Debug, Clone)]
pub struct FurnishResult {
    pub family: FurnitureFamily,
    pub seating_id: ItemId,
    pub surface_id: ItemId,
    pub seating_description: String,
    pub surface_description: String,
}
