//! 主动发送消息事件
//!
//! 发送动作是广播这些事件的唯一途径。监听器可以在发送前改写
//! `message`，或取消事件以阻止发送；触发动作在分发结束后必须
//! 重新读取 `message`，而不是使用分发前的副本。

use crate::entities::{Bot, ContactRef, Friend, Group, Member};
use crate::events::{BotActiveEvent, BotEvent, CancellableEvent};
use crate::message::MessageChain;

/// 发往群的消息即将发送
#[derive(Debug)]
pub struct GroupMessageSendEvent {
    target: Group,
    /// 即将发送的消息，监听器可改写
    pub message: MessageChain,
    cancelled: bool,
}

impl GroupMessageSendEvent {
    pub(crate) fn new(target: Group, message: MessageChain) -> Self {
        Self {
            target,
            message,
            cancelled: false,
        }
    }

    /// 目标群
    pub fn target(&self) -> &Group {
        &self.target
    }

    pub(crate) fn into_parts(self) -> (Group, MessageChain) {
        (self.target, self.message)
    }
}

impl BotEvent for GroupMessageSendEvent {
    fn bot(&self) -> &Bot {
        self.target.bot()
    }
}

impl BotActiveEvent for GroupMessageSendEvent {}

impl CancellableEvent for GroupMessageSendEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// 发往好友的消息即将发送
#[derive(Debug)]
pub struct FriendMessageSendEvent {
    target: Friend,
    /// 即将发送的消息，监听器可改写
    pub message: MessageChain,
    cancelled: bool,
}

impl FriendMessageSendEvent {
    pub(crate) fn new(target: Friend, message: MessageChain) -> Self {
        Self {
            target,
            message,
            cancelled: false,
        }
    }

    /// 目标好友
    pub fn target(&self) -> &Friend {
        &self.target
    }

    pub(crate) fn into_parts(self) -> (Friend, MessageChain) {
        (self.target, self.message)
    }
}

impl BotEvent for FriendMessageSendEvent {
    fn bot(&self) -> &Bot {
        &self.target.bot
    }
}

impl BotActiveEvent for FriendMessageSendEvent {}

impl CancellableEvent for FriendMessageSendEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// 发往群成员临时会话的消息即将发送
#[derive(Debug)]
pub struct TempMessageSendEvent {
    target: Member,
    /// 即将发送的消息，监听器可改写
    pub message: MessageChain,
    cancelled: bool,
}

impl TempMessageSendEvent {
    pub(crate) fn new(target: Member, message: MessageChain) -> Self {
        Self {
            target,
            message,
            cancelled: false,
        }
    }

    /// 目标成员
    pub fn target(&self) -> &Member {
        &self.target
    }

    pub(crate) fn into_parts(self) -> (Member, MessageChain) {
        (self.target, self.message)
    }
}

impl BotEvent for TempMessageSendEvent {
    fn bot(&self) -> &Bot {
        &self.target.bot
    }
}

impl BotActiveEvent for TempMessageSendEvent {}

impl CancellableEvent for TempMessageSendEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// 主动发送消息事件，按目标联系人种类分为三个变体
#[derive(Debug)]
pub enum MessageSendEvent {
    Group(GroupMessageSendEvent),
    Friend(FriendMessageSendEvent),
    Temp(TempMessageSendEvent),
}

impl MessageSendEvent {
    /// 消息目标
    pub fn target(&self) -> ContactRef<'_> {
        match self {
            MessageSendEvent::Group(event) => ContactRef::Group(event.target()),
            MessageSendEvent::Friend(event) => ContactRef::Friend(event.target()),
            MessageSendEvent::Temp(event) => ContactRef::Member(event.target()),
        }
    }

    /// 即将发送的消息
    pub fn message(&self) -> &MessageChain {
        match self {
            MessageSendEvent::Group(event) => &event.message,
            MessageSendEvent::Friend(event) => &event.message,
            MessageSendEvent::Temp(event) => &event.message,
        }
    }

    /// 即将发送消息的可变引用，监听器用于改写
    pub fn message_mut(&mut self) -> &mut MessageChain {
        match self {
            MessageSendEvent::Group(event) => &mut event.message,
            MessageSendEvent::Friend(event) => &mut event.message,
            MessageSendEvent::Temp(event) => &mut event.message,
        }
    }
}

impl BotEvent for MessageSendEvent {
    fn bot(&self) -> &Bot {
        match self {
            MessageSendEvent::Group(event) => event.bot(),
            MessageSendEvent::Friend(event) => event.bot(),
            MessageSendEvent::Temp(event) => event.bot(),
        }
    }
}

impl BotActiveEvent for MessageSendEvent {}

impl CancellableEvent for MessageSendEvent {
    fn is_cancelled(&self) -> bool {
        match self {
            MessageSendEvent::Group(event) => event.is_cancelled(),
            MessageSendEvent::Friend(event) => event.is_cancelled(),
            MessageSendEvent::Temp(event) => event.is_cancelled(),
        }
    }

    fn cancel(&mut self) {
        match self {
            MessageSendEvent::Group(event) => event.cancel(),
            MessageSendEvent::Friend(event) => event.cancel(),
            MessageSendEvent::Temp(event) => event.cancel(),
        }
    }
}
