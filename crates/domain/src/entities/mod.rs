//! 核心实体定义
//!
//! 包含机器人、好友、群与群成员等联系人实体，以及图片句柄。
//! 事件只持有这些实体的轻量快照，账号目录的权威状态由外部的
//! 联系人管理模块维护。

pub mod bot;
pub mod contact;
pub mod friend;
pub mod group;
pub mod image;

// 重新导出核心实体
pub use bot::Bot;
pub use contact::{Contact, ContactRef};
pub use friend::Friend;
pub use group::{Group, Member, MemberPermission};
pub use image::{ExternalImage, Image, ImageFormat};
