//! API layer - gRPC service implementations

mod grpc_service;

pub use grpc_service::ShippingServiceImpl;
