use crate::FurnitureFamily;
use crate::entities::ItemId;

pub trait SurfaceItem: Send + Sync {
    fn family(&self) -> FurnitureFamily;

    fn id(&self) -> &ItemId;

    fn use_as_surface(&self) -> String;
}
