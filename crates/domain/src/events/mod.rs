//! 客户端事件体系
//!
//! 事件是对一次"发生"的记录：由触发动作在动作开始时构造，交给
//! 分发器广播恰好一次，分发窗口内可被监听器修改（消息负载、取消
//! 标志），随后丢弃，从不复用或持久化。
//!
//! 事件的构造能力不对外公开：外部代码只能经分发器观察事件，
//! 每种事件只有唯一的合法触发路径。

pub mod image_upload;
pub mod message_recall;
pub mod message_send;

pub use image_upload::{
    BeforeImageUploadEvent, ImageUploadEvent, ImageUploadFailedEvent, ImageUploadSucceedEvent,
};
pub use message_recall::{FriendRecallEvent, GroupRecallEvent, MessageRecallEvent};
pub use message_send::{
    FriendMessageSendEvent, GroupMessageSendEvent, MessageSendEvent, TempMessageSendEvent,
};

use crate::entities::{Bot, Group, Member};

/// 具有所属机器人的事件
pub trait BotEvent {
    /// 事件所属的机器人
    fn bot(&self) -> &Bot;
}

/// 由机器人本地主动动作（发送、上传）产生的事件
///
/// 与从入站网络数据合成的被动事件（撤回）相对。纯标记，不携带
/// 状态；分发处理可以据此分支。
pub trait BotActiveEvent: BotEvent {}

/// 可以在动作生效前被监听器否决的事件
///
/// 取消标志默认为 false；[`cancel`](CancellableEvent::cancel) 幂等，
/// 置位后在本次分发内不再回退。触发动作必须在同步分发结束后立即
/// 检查标志，置位时放弃底层副作用；动作已经执行后再取消没有追溯
/// 效果，检查时机由触发方负责。
pub trait CancellableEvent {
    /// 是否已被取消
    fn is_cancelled(&self) -> bool;

    /// 取消事件
    fn cancel(&mut self);
}

/// 携带群内操作者的事件
pub trait GroupOperableEvent: BotEvent {
    /// 事件发生的群
    fn group(&self) -> &Group;

    /// 操作者；为 None 时表示机器人自己执行了该操作
    fn operator(&self) -> Option<&Member>;

    /// 操作是否由机器人执行
    fn is_by_bot(&self) -> bool {
        self.operator().is_none()
    }
}

/// 客户端广播的全部事件
///
/// 新增事件种类时，所有按种类分派的 match 都必须同步更新，
/// 编译器会强制这一点。
#[derive(Debug)]
pub enum Event {
    /// 主动发送消息
    MessageSend(MessageSendEvent),
    /// 消息被撤回
    MessageRecall(MessageRecallEvent),
    /// 图片上传前
    BeforeImageUpload(BeforeImageUploadEvent),
    /// 图片上传完成
    ImageUpload(ImageUploadEvent),
}

impl Event {
    /// 事件所属的机器人
    pub fn bot(&self) -> &Bot {
        match self {
            Event::MessageSend(event) => event.bot(),
            Event::MessageRecall(event) => event.bot(),
            Event::BeforeImageUpload(event) => event.bot(),
            Event::ImageUpload(event) => event.bot(),
        }
    }

    /// 事件类型名称
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::MessageSend(MessageSendEvent::Group(_)) => "GroupMessageSend",
            Event::MessageSend(MessageSendEvent::Friend(_)) => "FriendMessageSend",
            Event::MessageSend(MessageSendEvent::Temp(_)) => "TempMessageSend",
            Event::MessageRecall(MessageRecallEvent::Friend(_)) => "FriendRecall",
            Event::MessageRecall(MessageRecallEvent::Group(_)) => "GroupRecall",
            Event::BeforeImageUpload(_) => "BeforeImageUpload",
            Event::ImageUpload(ImageUploadEvent::Succeed(_)) => "ImageUploadSucceed",
            Event::ImageUpload(ImageUploadEvent::Failed(_)) => "ImageUploadFailed",
        }
    }

    /// 是否由机器人主动动作触发
    pub fn is_bot_active(&self) -> bool {
        match self {
            Event::MessageSend(_) | Event::BeforeImageUpload(_) | Event::ImageUpload(_) => true,
            Event::MessageRecall(_) => false,
        }
    }

    /// 以可取消事件视角访问；撤回与上传结果事件不可取消
    pub fn as_cancellable_mut(&mut self) -> Option<&mut dyn CancellableEvent> {
        match self {
            Event::MessageSend(event) => Some(event),
            Event::BeforeImageUpload(event) => Some(event),
            Event::MessageRecall(_) | Event::ImageUpload(_) => None,
        }
    }

    /// 事件是否已被取消；不可取消的事件恒为 false
    pub fn is_cancelled(&self) -> bool {
        match self {
            Event::MessageSend(event) => event.is_cancelled(),
            Event::BeforeImageUpload(event) => event.is_cancelled(),
            Event::MessageRecall(_) | Event::ImageUpload(_) => false,
        }
    }
}
