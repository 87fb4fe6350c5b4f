//! 货运清单加载
//!
//! 客户端从 JSON 清单文件读取一条货运单。未知字段被忽略，缺省字段取默认值。

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::proto::Consignment;

/// 默认清单文件名
pub const DEFAULT_MANIFEST: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode manifest")]
    Decode(#[from] serde_json::Error),
}

/// 读取并解析清单文件
pub fn load(path: impl AsRef<Path>) -> Result<Consignment, ManifestError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&data)
}

/// 解析清单内容
pub fn parse(data: &[u8]) -> Result<Consignment, ManifestError> {
    Ok(serde_json::from_slice(data)?)
}
