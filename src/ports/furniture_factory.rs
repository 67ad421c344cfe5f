use super::{SeatingItem, SurfaceItem};
use crate::FurnitureFamily;

/// Creation interface bound to one furniture family for its whole lifetime.
///
/// Creation cannot fail: no validation and no external resource is involved,
/// so both operations return fresh items directly.
pub trait FurnitureFactory: Send + Sync {
    fn family(&self) -> FurnitureFamily;

    fn create_seating_item(&self) -> Box<dyn SeatingItem>;

    fn create_surface_item(&self) -> Box<dyn SurfaceItem>;
}
