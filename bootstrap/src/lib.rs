//! shipping-bootstrap - 统一服务启动骨架
//!
//! 服务复用的启动逻辑：配置、日志、健康检查、反射与优雅关闭

mod health;
mod reflection;
mod runtime;
mod starter;

pub use health::*;
pub use reflection::*;
pub use runtime::*;
pub use starter::*;
