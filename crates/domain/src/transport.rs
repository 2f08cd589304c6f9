//! 传输层端口
//!
//! 真正的网络收发由外部传输层实现，这里只定义事件核心需要的
//! 最小接口。重试、退避等策略属于传输层，不在本 crate 范围内。

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{Contact, ExternalImage, Friend, Group, Image, Member};
use crate::message::MessageChain;

/// 传输层错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// 网络传输失败
    #[error("网络传输失败: {0}")]
    Network(String),

    /// 服务器拒绝了图片上传
    #[error("图片上传被拒绝 (errno={errno}): {message}")]
    UploadRejected { errno: i32, message: String },
}

impl TransportError {
    /// 创建网络错误
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

/// 发送回执，回显服务器为该消息分配的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageReceipt {
    /// 消息ID
    pub message_id: i32,
    /// 消息内部ID
    pub message_internal_id: i32,
    /// 服务器时间（unix 秒）
    pub time: i32,
}

/// 消息发送端口
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// 发送群消息
    async fn send_to_group(
        &self,
        target: &Group,
        message: &MessageChain,
    ) -> Result<MessageReceipt, TransportError>;

    /// 发送好友消息
    async fn send_to_friend(
        &self,
        target: &Friend,
        message: &MessageChain,
    ) -> Result<MessageReceipt, TransportError>;

    /// 发送临时会话消息
    async fn send_to_temp(
        &self,
        target: &Member,
        message: &MessageChain,
    ) -> Result<MessageReceipt, TransportError>;
}

/// 图片上传端口
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ImageTransport: Send + Sync {
    /// 上传图片并返回远程句柄
    async fn upload(
        &self,
        target: &Contact,
        source: &ExternalImage,
    ) -> Result<Image, TransportError>;
}
