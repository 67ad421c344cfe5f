pub mod config;
pub mod events;
pub mod family;
pub mod operations;

pub use config::*;
pub use events::*;
pub use family::*;
pub use operations::*;
