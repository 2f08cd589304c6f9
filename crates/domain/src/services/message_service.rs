//! 消息发送服务
//!
//! 发送流程：构造发送事件 → 广播 → 检查取消标志 → 重新读取可能
//! 被改写的消息 → 调用传输层。取消是正常的控制流结果，通过
//! [`SendOutcome`] 表达，不走错误通道。

use std::sync::Arc;

use tracing::{debug, info};

use crate::channel::EventChannel;
use crate::entities::{Friend, Group, Member};
use crate::errors::{DomainError, DomainResult};
use crate::events::{
    CancellableEvent, Event, FriendMessageSendEvent, GroupMessageSendEvent, MessageSendEvent,
    TempMessageSendEvent,
};
use crate::message::MessageChain;
use crate::transport::{MessageReceipt, MessageTransport};

/// 发送结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// 已发送，携带服务器回执
    Sent(MessageReceipt),
    /// 被监听器取消，未发送
    Cancelled,
}

/// 消息发送服务
pub struct MessageService {
    channel: Arc<dyn EventChannel>,
    transport: Arc<dyn MessageTransport>,
}

impl MessageService {
    /// 创建消息发送服务
    pub fn new(channel: Arc<dyn EventChannel>, transport: Arc<dyn MessageTransport>) -> Self {
        Self { channel, transport }
    }

    /// 发送群消息
    pub async fn send_to_group(
        &self,
        target: Group,
        message: MessageChain,
    ) -> DomainResult<SendOutcome> {
        Self::validate_outgoing(&message)?;

        let mut event = Event::MessageSend(MessageSendEvent::Group(GroupMessageSendEvent::new(
            target, message,
        )));
        self.channel.publish(&mut event);
        let event = match event {
            Event::MessageSend(MessageSendEvent::Group(event)) => event,
            other => return Err(Self::contract_violation("GroupMessageSend", &other)),
        };

        if event.is_cancelled() {
            info!(group = %event.target().id, "群消息发送被监听器取消");
            return Ok(SendOutcome::Cancelled);
        }

        // 重新读取消息，监听器可能已改写
        let (target, message) = event.into_parts();
        let receipt = self.transport.send_to_group(&target, &message).await?;
        debug!(group = %target.id, message_id = receipt.message_id, "群消息已发送");
        Ok(SendOutcome::Sent(receipt))
    }

    /// 发送好友消息
    pub async fn send_to_friend(
        &self,
        target: Friend,
        message: MessageChain,
    ) -> DomainResult<SendOutcome> {
        Self::validate_outgoing(&message)?;

        let mut event = Event::MessageSend(MessageSendEvent::Friend(FriendMessageSendEvent::new(
            target, message,
        )));
        self.channel.publish(&mut event);
        let event = match event {
            Event::MessageSend(MessageSendEvent::Friend(event)) => event,
            other => return Err(Self::contract_violation("FriendMessageSend", &other)),
        };

        if event.is_cancelled() {
            info!(friend = %event.target().id, "好友消息发送被监听器取消");
            return Ok(SendOutcome::Cancelled);
        }

        let (target, message) = event.into_parts();
        let receipt = self.transport.send_to_friend(&target, &message).await?;
        debug!(friend = %target.id, message_id = receipt.message_id, "好友消息已发送");
        Ok(SendOutcome::Sent(receipt))
    }

    /// 发送群成员临时会话消息
    pub async fn send_to_temp(
        &self,
        target: Member,
        message: MessageChain,
    ) -> DomainResult<SendOutcome> {
        Self::validate_outgoing(&message)?;

        let mut event = Event::MessageSend(MessageSendEvent::Temp(TempMessageSendEvent::new(
            target, message,
        )));
        self.channel.publish(&mut event);
        let event = match event {
            Event::MessageSend(MessageSendEvent::Temp(event)) => event,
            other => return Err(Self::contract_violation("TempMessageSend", &other)),
        };

        if event.is_cancelled() {
            info!(member = %event.target().id, "临时会话消息发送被监听器取消");
            return Ok(SendOutcome::Cancelled);
        }

        let (target, message) = event.into_parts();
        let receipt = self.transport.send_to_temp(&target, &message).await?;
        debug!(member = %target.id, message_id = receipt.message_id, "临时会话消息已发送");
        Ok(SendOutcome::Sent(receipt))
    }

    fn validate_outgoing(message: &MessageChain) -> DomainResult<()> {
        if message.is_empty() {
            return Err(DomainError::validation_error("message", "消息不能为空"));
        }
        Ok(())
    }

    fn contract_violation(expected: &'static str, actual: &Event) -> DomainError {
        DomainError::ChannelContractViolation {
            expected,
            actual: actual.event_type(),
        }
    }
}
