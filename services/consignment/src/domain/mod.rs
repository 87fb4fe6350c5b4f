//! Domain layer

pub mod repositories;

pub use repositories::*;
