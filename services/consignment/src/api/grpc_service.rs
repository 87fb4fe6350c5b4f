//! gRPC service implementation

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{info, instrument};

use crate::domain::ConsignmentRepository;
use crate::infrastructure::persistence::InMemoryConsignmentRepository;
use crate::proto::shipping_service_server::ShippingService;
use crate::proto::{Consignment, CreateResponse, GetRequest, GetResponse};

/// 货运服务，持有唯一的仓储实例
///
/// 服务本身不保存任何状态，并发调用共享同一个实例，同步完全交给仓储。
pub struct ShippingServiceImpl {
    repo: Arc<dyn ConsignmentRepository>,
}

impl ShippingServiceImpl {
    pub fn new(repo: Arc<dyn ConsignmentRepository>) -> Self {
        Self { repo }
    }

    /// 使用空的内存仓储创建服务
    pub fn in_memory(max_consignments: Option<usize>) -> Self {
        Self::new(Arc::new(InMemoryConsignmentRepository::with_capacity_limit(
            max_consignments,
        )))
    }
}

impl Default for ShippingServiceImpl {
    fn default() -> Self {
        Self::in_memory(None)
    }
}

#[tonic::async_trait]
impl ShippingService for ShippingServiceImpl {
    #[instrument(skip_all)]
    async fn create_consignment(
        &self,
        request: Request<Consignment>,
    ) -> Result<Response<CreateResponse>, Status> {
        let consignment = self.repo.create(request.into_inner()).await?;

        info!(description = %consignment.description, "Consignment created");

        Ok(Response::new(CreateResponse {
            created: true,
            consignment: Some(consignment),
        }))
    }

    #[instrument(skip_all)]
    async fn get_consignments(
        &self,
        _request: Request<GetRequest>,
    ) -> Result<Response<GetResponse>, Status> {
        let consignments = self.repo.get_all().await;

        Ok(Response::new(GetResponse {
            consignments: Arc::unwrap_or_clone(consignments),
        }))
    }
}
