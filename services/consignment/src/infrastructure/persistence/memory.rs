//! 内存货运单仓储

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use metrics::{counter, gauge};
use shipping_errors::{AppError, AppResult};
use tracing::{debug, warn};

use crate::domain::ConsignmentRepository;
use crate::proto::Consignment;

/// 内存货运单仓储
///
/// 所有读写都经过同一把读写锁。读取只克隆 `Arc`，写入时如果仍有读者持有旧快照，
/// `Arc::make_mut` 会先复制出新序列再提交，旧快照保持不变。
#[derive(Debug, Default)]
pub struct InMemoryConsignmentRepository {
    consignments: RwLock<Arc<Vec<Consignment>>>,
    max_consignments: Option<usize>,
}

impl InMemoryConsignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带容量上限的仓储，`None` 表示不限制
    pub fn with_capacity_limit(max_consignments: Option<usize>) -> Self {
        Self {
            consignments: RwLock::default(),
            max_consignments,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Arc<Vec<Consignment>> {
        // 写入只有 push 一步，持锁线程 panic 也不会留下半条记录
        self.consignments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ConsignmentRepository for InMemoryConsignmentRepository {
    async fn create(&self, consignment: Consignment) -> AppResult<Consignment> {
        let record = consignment.clone();

        let stored = {
            let mut guard = self
                .consignments
                .write()
                .unwrap_or_else(PoisonError::into_inner);

            if let Some(limit) = self.max_consignments {
                if guard.len() >= limit {
                    drop(guard);
                    warn!(limit, "Consignment rejected, repository is full");
                    counter!("consignments_rejected_total").increment(1);
                    return Err(AppError::resource_exhausted(format!(
                        "repository holds the maximum of {} consignments",
                        limit
                    )));
                }
            }

            Arc::make_mut(&mut *guard).push(record);
            guard.len()
        };

        debug!(stored, "Consignment appended");
        counter!("consignments_created_total").increment(1);
        gauge!("consignments_stored").set(stored as f64);

        Ok(consignment)
    }

    async fn get_all(&self) -> Arc<Vec<Consignment>> {
        self.snapshot()
    }
}
