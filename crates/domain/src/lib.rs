//! 机器人客户端核心领域模型
//!
//! 包含联系人、消息链、图片等核心实体，客户端广播的事件体系，
//! 以及作为事件唯一合法触发路径的用例服务。

pub mod channel;
pub mod entities;
pub mod errors;
pub mod events;
pub mod message;
pub mod services;
pub mod transport;
pub mod value_objects;

// 重新导出常用类型
pub use channel::*;
pub use entities::*;
pub use errors::*;
pub use events::*;
pub use message::*;
pub use services::*;
pub use transport::*;
pub use value_objects::*;
