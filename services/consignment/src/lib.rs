//! consignment-service - 货运单服务
//!
//! 接收客户端提交的货运单，保存在进程内的仓储中，并按需返回全部货运单。

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod manifest;

// Proto generated code modules
pub mod shipping {
    pub mod consignment {
        pub mod v1 {
            tonic::include_proto!("shipping.consignment.v1");
        }
    }
}

// Re-export for convenience
pub use shipping::consignment::v1 as proto;

/// File descriptor set for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("consignment_descriptor");
