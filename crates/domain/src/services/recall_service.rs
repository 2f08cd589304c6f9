//! 撤回事件接入服务
//!
//! 网络解码侧把从撤回通知包解出的字段交给本服务，由它构造并广播
//! 恰好一个撤回事件。一次撤回只产生一个事件，好友撤回与群撤回
//! 互斥，从不重试。撤回是被动事件，不存在取消。

use std::sync::Arc;

use tracing::debug;

use crate::channel::EventChannel;
use crate::entities::{Bot, Group};
use crate::errors::{DomainError, DomainResult};
use crate::events::{Event, FriendRecallEvent, GroupRecallEvent, MessageRecallEvent};
use crate::value_objects::UserId;

/// 撤回事件接入服务
pub struct RecallService {
    channel: Arc<dyn EventChannel>,
}

impl RecallService {
    /// 创建撤回事件接入服务
    pub fn new(channel: Arc<dyn EventChannel>) -> Self {
        Self { channel }
    }

    /// 广播一次好友消息撤回
    pub fn emit_friend_recall(
        &self,
        bot: Bot,
        message_id: i32,
        message_internal_id: i32,
        message_time: i32,
        operator: impl Into<UserId>,
    ) -> DomainResult<()> {
        let event =
            FriendRecallEvent::new(bot, message_id, message_internal_id, message_time, operator)?;
        debug!(message_id, "广播好友消息撤回事件");
        let mut event = Event::MessageRecall(MessageRecallEvent::Friend(event));
        self.channel.publish(&mut event);
        Ok(())
    }

    /// 广播一次群消息撤回
    ///
    /// 解码侧给出的 `operator_id` 为 None 或机器人自身ID时归一化为
    /// "机器人操作"（操作者为空）；其他ID在群成员目录中解析，
    /// 未知ID返回 [`DomainError::InvalidOperatorReference`]。
    #[allow(clippy::too_many_arguments)]
    pub fn emit_group_recall(
        &self,
        bot: Bot,
        group: Group,
        author_id: impl Into<UserId>,
        message_id: i32,
        message_internal_id: i32,
        message_time: i32,
        operator_id: Option<UserId>,
    ) -> DomainResult<()> {
        let operator = match operator_id {
            None => None,
            Some(id) if id == bot.id => None,
            Some(id) => Some(
                group
                    .find_member(id)
                    .cloned()
                    .ok_or(DomainError::InvalidOperatorReference { operator_id: id })?,
            ),
        };

        let event = GroupRecallEvent::new(
            bot,
            author_id,
            message_id,
            message_internal_id,
            message_time,
            operator,
            group,
        )?;
        debug!(message_id, "广播群消息撤回事件");
        let mut event = Event::MessageRecall(MessageRecallEvent::Group(event));
        self.channel.publish(&mut event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::MemberPermission;
    use crate::events::GroupOperableEvent;
    use crate::value_objects::GroupId;
    use std::sync::Mutex;

    /// 记录收到的撤回事件关键信息
    #[derive(Default)]
    struct RecordingChannel {
        seen: Mutex<Vec<(String, i64, bool)>>,
    }

    impl EventChannel for RecordingChannel {
        fn publish(&self, event: &mut Event) {
            let event_type = event.event_type();
            if let Event::MessageRecall(recall) = &*event {
                let mut seen = match self.seen.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                seen.push((
                    event_type.to_string(),
                    recall.author_id().into(),
                    recall.is_by_bot(),
                ));
            }
        }
    }

    fn test_bot() -> Bot {
        Bot::new(10_000, "测试机器人")
    }

    fn test_group(bot: &Bot) -> Group {
        let mut group = Group::new(bot.clone(), 30_000, "测试群", MemberPermission::Member);
        group.add_member(20_000, "张三", MemberPermission::Member);
        group
    }

    #[test]
    fn test_friend_recall_is_broadcast_once() {
        let channel = Arc::new(RecordingChannel::default());
        let service = RecallService::new(channel.clone());

        service
            .emit_friend_recall(test_bot(), 10, 1, 1000, 10_000)
            .unwrap();

        let seen = channel.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], ("FriendRecall".to_string(), 10_000, true));
    }

    #[test]
    fn test_group_recall_operator_normalization() {
        let channel = Arc::new(RecordingChannel::default());
        let service = RecallService::new(channel.clone());
        let bot = test_bot();

        // 操作者为机器人自身ID时归一化为空操作者
        service
            .emit_group_recall(
                bot.clone(),
                test_group(&bot),
                20_000,
                10,
                1,
                1000,
                Some(UserId(10_000)),
            )
            .unwrap();

        // 操作者为普通成员
        service
            .emit_group_recall(
                bot.clone(),
                test_group(&bot),
                20_000,
                11,
                1,
                1000,
                Some(UserId(20_000)),
            )
            .unwrap();

        let seen = channel.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("GroupRecall".to_string(), 20_000, true));
        assert_eq!(seen[1], ("GroupRecall".to_string(), 20_000, false));
    }

    #[test]
    fn test_group_recall_unknown_operator_is_rejected() {
        let channel = Arc::new(RecordingChannel::default());
        let service = RecallService::new(channel.clone());
        let bot = test_bot();

        let result = service.emit_group_recall(
            bot.clone(),
            test_group(&bot),
            20_000,
            10,
            1,
            1000,
            Some(UserId(99_999)),
        );

        assert_eq!(
            result,
            Err(DomainError::InvalidOperatorReference {
                operator_id: UserId(99_999),
            })
        );
        // 构造失败时不得广播任何事件
        assert!(channel.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_listener_sees_resolved_operator() {
        struct AssertingChannel;

        impl EventChannel for AssertingChannel {
            fn publish(&self, event: &mut Event) {
                match event {
                    Event::MessageRecall(MessageRecallEvent::Group(recall)) => {
                        let operator = recall.operator().expect("应有操作者");
                        assert_eq!(operator.card, "张三");
                        assert_eq!(recall.group().id, GroupId(30_000));
                    }
                    other => panic!("意外的事件: {}", other.event_type()),
                }
            }
        }

        let service = RecallService::new(Arc::new(AssertingChannel));
        let bot = test_bot();
        service
            .emit_group_recall(
                bot.clone(),
                test_group(&bot),
                20_000,
                10,
                1,
                1000,
                Some(UserId(20_000)),
            )
            .unwrap();
    }
}
