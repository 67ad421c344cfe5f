pub mod showroom;

pub use showroom::Showroom;
