//! Repository interfaces

mod consignment_repository;

pub use consignment_repository::*;
