//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::error::Error;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use shipping_config::AppConfig;
use shipping_telemetry::init_metrics;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info, warn};

use crate::health::{HealthChecker, HealthServer};
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 gRPC 服务
///
/// 所有服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder
/// 4. 启动健康检查 HTTP 服务器
/// 5. 调用用户提供的闭包注册 gRPC 服务
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use shipping_bootstrap::run_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |config, mut server| async move {
///         let service = MyServiceImpl::new(config.repository.max_consignments);
///         Ok::<_, Box<dyn std::error::Error>>(server.add_service(MyServiceServer::new(service)))
///     })
///     .await
/// }
/// ```
pub async fn run_server<F, Fut>(config_dir: &str, server_builder: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(AppConfig, Server) -> Fut,
    Fut: Future<Output = Result<Router, Box<dyn Error>>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = match init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Prometheus recorder not installed, /metrics disabled");
            None
        }
    };

    // 4. 启动健康检查 HTTP 服务器
    let health_checker = Arc::new(HealthChecker::new());
    let health_server = HealthServer::new(
        health_checker.clone(),
        metrics,
        config.server.health_port(),
    );

    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    // 5. 构建服务地址
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // 6. 让调用方注册 gRPC 服务
    let router = server_builder(config.clone(), Server::builder()).await?;

    info!(%addr, "gRPC server starting");
    health_checker.set_serving(true);

    // 7. 启动服务器
    let result = router.serve_with_shutdown(addr, shutdown_signal()).await;

    // 8. 清理
    health_checker.set_serving(false);
    health_handle.abort();

    result?;

    info!("Service stopped");

    Ok(())
}
