// src/ports/mod.rs

pub use event_publisher::EventPublisher;
pub use factory_provider::FactoryProvider;
pub use furniture_factory::FurnitureFactory;
pub use seating::SeatingItem;
pub use surface::SurfaceItem;

pub mod event_publisher;
pub mod factory_provider;
pub mod furniture_factory;
pub mod seating;
pub mod surface;
