//! 货运单仓储接口

use std::sync::Arc;

use async_trait::async_trait;
use shipping_errors::AppResult;

use crate::proto::Consignment;

/// 货运单仓储接口
///
/// 货运单按写入顺序保存，不去重、不校验、不分配 ID。
#[async_trait]
pub trait ConsignmentRepository: Send + Sync {
    /// 追加一条货运单，原样返回
    ///
    /// 返回错误时不会写入任何数据。
    async fn create(&self, consignment: Consignment) -> AppResult<Consignment>;

    /// 获取全部货运单的快照
    ///
    /// 快照不会被后续写入修改，调用方可以直接读取。
    async fn get_all(&self) -> Arc<Vec<Consignment>>;
}
