pub mod event_log;
pub mod factory_registry;

pub use event_log::{EventLog, EventRecord};
pub use factory_registry::FactoryRegistry;
