//! consignment-cli - 货运单客户端
//!
//! 读取清单文件，提交一条货运单，然后打印服务端保存的全部货运单。

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use consignment_service::manifest::{self, DEFAULT_MANIFEST};
use consignment_service::proto::GetRequest;
use consignment_service::proto::shipping_service_client::ShippingServiceClient;
use shipping_telemetry::init_tracing;
use tonic::Request;
use tracing::{error, info};

const DEFAULT_ADDRESS: &str = "http://localhost:50051";

#[derive(Debug, Parser)]
#[command(name = "consignment-cli", about = "Submit a consignment manifest")]
struct Cli {
    /// 清单文件路径
    #[arg(default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// 服务地址
    #[arg(long, env = "SHIPPING_ADDR", default_value = DEFAULT_ADDRESS)]
    addr: String,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let consignment = manifest::load(&cli.manifest).context("Could not parse consignment manifest")?;

    let mut client = ShippingServiceClient::connect(cli.addr.clone())
        .await
        .with_context(|| format!("Failed to connect to gRPC server at {}", cli.addr))?;

    let response = client
        .create_consignment(Request::new(consignment))
        .await
        .context("Failed to process consignment")?
        .into_inner();
    info!(created = response.created, consignment = ?response.consignment, "Processed consignment");

    let all = client
        .get_consignments(Request::new(GetRequest {}))
        .await
        .context("Failed to fetch consignments")?
        .into_inner();

    info!(count = all.consignments.len(), "Consignments:");
    for consignment in &all.consignments {
        info!(?consignment);
    }

    Ok(())
}
