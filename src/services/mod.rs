pub mod showroom_service;

pub use showroom_service::ShowroomService;
