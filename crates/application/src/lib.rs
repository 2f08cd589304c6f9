//! 事件分发层
//!
//! 提供同步的本地事件分发器：触发动作通过它广播事件，监听器在
//! 分发窗口内可以改写消息负载或取消事件，分发结束后由触发动作
//! 检查最终状态。另含环境变量驱动的应用配置。

pub mod config;
pub mod dispatcher;

pub use config::{AppConfig, UploadConfig};
pub use dispatcher::{FnListener, LocalEventChannel};
