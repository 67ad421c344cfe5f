pub mod item;
pub(crate) mod seating;
pub(crate) mod surface;

pub use item::ItemId;
pub(crate) use seating::{ModernChair, VictorianChair};
pub(crate) use surface::{ModernCoffeeTable, VictorianCoffeeTable};
