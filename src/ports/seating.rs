use crate::FurnitureFamily;
use crate::entities::ItemId;

pub trait SeatingItem: Send + Sync {
    fn family(&self) -> FurnitureFamily;

    fn id(&self) -> &ItemId;

    fn use_as_seat(&self) -> String;
}
