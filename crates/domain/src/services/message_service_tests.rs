//! 消息发送服务单元测试
//!
//! 覆盖发送流程的取消、消息改写、输入校验与传输层错误传播。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::channel::EventChannel;
use crate::entities::{Bot, Friend, Group, Member, MemberPermission};
use crate::errors::DomainError;
use crate::events::Event;
use crate::message::MessageChain;
use crate::services::{MessageService, SendOutcome};
use crate::transport::{MessageReceipt, MockMessageTransport, TransportError};

/// 不做任何事，只统计广播次数
#[derive(Default)]
struct CountingChannel {
    published: AtomicUsize,
}

impl EventChannel for CountingChannel {
    fn publish(&self, _event: &mut Event) {
        self.published.fetch_add(1, Ordering::SeqCst);
    }
}

/// 取消所有可取消事件
struct CancellingChannel;

impl EventChannel for CancellingChannel {
    fn publish(&self, event: &mut Event) {
        if let Some(cancellable) = event.as_cancellable_mut() {
            cancellable.cancel();
        }
    }
}

/// 把发送事件的消息改写为固定文本
struct RewritingChannel;

impl EventChannel for RewritingChannel {
    fn publish(&self, event: &mut Event) {
        if let Event::MessageSend(send) = event {
            *send.message_mut() = MessageChain::from_text("改写后的内容");
        }
    }
}

fn test_bot() -> Bot {
    Bot::new(10_000, "测试机器人")
}

fn test_receipt() -> MessageReceipt {
    MessageReceipt {
        message_id: 42,
        message_internal_id: 7,
        time: 1_600_000_000,
    }
}

#[tokio::test]
async fn test_transport_receives_rewritten_message() {
    let mut transport = MockMessageTransport::new();
    transport
        .expect_send_to_group()
        .withf(|_, message| message.to_plain_text() == "改写后的内容")
        .times(1)
        .returning(|_, _| Ok(test_receipt()));

    let service = MessageService::new(Arc::new(RewritingChannel), Arc::new(transport));
    let group = Group::new(test_bot(), 30_000, "群", MemberPermission::Member);

    let outcome = service
        .send_to_group(group, MessageChain::from_text("原始内容"))
        .await
        .unwrap();
    assert_eq!(outcome, SendOutcome::Sent(test_receipt()));
}

#[tokio::test]
async fn test_cancelled_send_never_reaches_transport() {
    let mut transport = MockMessageTransport::new();
    transport.expect_send_to_friend().times(0);

    let service = MessageService::new(Arc::new(CancellingChannel), Arc::new(transport));
    let friend = Friend::new(test_bot(), 20_000, "好友");

    let outcome = service
        .send_to_friend(friend, MessageChain::from_text("你好"))
        .await
        .unwrap();
    assert_eq!(outcome, SendOutcome::Cancelled);
}

#[tokio::test]
async fn test_empty_message_is_rejected_before_broadcast() {
    let channel = Arc::new(CountingChannel::default());
    let mut transport = MockMessageTransport::new();
    transport.expect_send_to_group().times(0);

    let service = MessageService::new(channel.clone(), Arc::new(transport));
    let group = Group::new(test_bot(), 30_000, "群", MemberPermission::Member);

    let result = service.send_to_group(group, MessageChain::new()).await;
    assert!(matches!(result, Err(DomainError::ValidationError { .. })));
    // 校验失败时不得广播事件
    assert_eq!(channel.published.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    let mut transport = MockMessageTransport::new();
    transport
        .expect_send_to_temp()
        .times(1)
        .returning(|_, _| Err(TransportError::network("连接中断")));

    let service = MessageService::new(Arc::new(CountingChannel::default()), Arc::new(transport));
    let member = Member::new(
        test_bot(),
        30_000,
        20_000,
        "成员",
        MemberPermission::Member,
    );

    let result = service
        .send_to_temp(member, MessageChain::from_text("你好"))
        .await;
    assert_eq!(
        result,
        Err(DomainError::Transport(TransportError::network("连接中断")))
    );
}

#[tokio::test]
async fn test_unmodified_message_is_sent_as_is() {
    let mut transport = MockMessageTransport::new();
    transport
        .expect_send_to_friend()
        .withf(|target, message| {
            target.id == crate::value_objects::UserId(20_000)
                && message.to_plain_text() == "晚上好"
        })
        .times(1)
        .returning(|_, _| Ok(test_receipt()));

    let service = MessageService::new(
        Arc::new(CountingChannel::default()),
        Arc::new(transport),
    );
    let friend = Friend::new(test_bot(), 20_000, "好友");

    let outcome = service
        .send_to_friend(friend, MessageChain::from_text("晚上好"))
        .await
        .unwrap();
    assert!(matches!(outcome, SendOutcome::Sent(_)));
}
