//! 触发事件的用例服务
//!
//! 每个服务是其事件族的唯一合法触发路径：构造事件、广播、在分发
//! 结束后检查取消标志，再执行或放弃底层副作用。事件构造器对外
//! 不可见，保证"每个事件恰好一条触发路径"。

mod image_service;
mod message_service;
mod recall_service;

#[cfg(test)]
mod message_service_tests;

pub use image_service::{ImageService, UploadLimits, UploadOutcome};
pub use message_service::{MessageService, SendOutcome};
pub use recall_service::RecallService;
