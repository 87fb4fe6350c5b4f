//! consignment-service - 货运单 gRPC 服务

use consignment_service::FILE_DESCRIPTOR_SET;
use consignment_service::api::ShippingServiceImpl;
use consignment_service::proto::shipping_service_server::ShippingServiceServer;
use shipping_bootstrap::{build_reflection, run_server};
use shipping_config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |config: AppConfig, mut server| async move {
        info!("Initializing consignment service...");

        let max_consignments = config.repository.max_consignments;
        let service = ShippingServiceImpl::in_memory(max_consignments);
        info!(?max_consignments, "Repository initialized");

        let reflection_service = build_reflection(vec![FILE_DESCRIPTOR_SET])?;

        Ok::<_, Box<dyn std::error::Error>>(
            server
                .add_service(ShippingServiceServer::new(service))
                .add_service(reflection_service),
        )
    })
    .await
}
