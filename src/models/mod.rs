//! Row types fetched by the demo queries.

pub mod car;

pub use car::AvailableCar;
