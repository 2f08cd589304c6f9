//! 消息撤回事件
//!
//! 消息存在 → 某个主体（机器人、消息作者或群管理员）撤回它 →
//! 恰好一个撤回事件被广播，从不重试。撤回是被动事件，由网络
//! 解码侧从入站数据合成，不可取消。
//!
//! `message_id`、`message_internal_id` 与 `message_time` 三元组
//! 唯一定位被撤回的原消息；它们是不透明的透传值，本模块从不
//! 重新计算。

use chrono::{DateTime, Utc};

use crate::entities::{Bot, Group, Member};
use crate::errors::{DomainError, DomainResult};
use crate::events::{BotEvent, GroupOperableEvent};
use crate::value_objects::UserId;

/// 好友消息撤回
///
/// 好友会话中只有机器人自己发出的消息会产生撤回事件，因此
/// 原作者恒为机器人。
#[derive(Debug)]
pub struct FriendRecallEvent {
    bot: Bot,
    message_id: i32,
    message_internal_id: i32,
    message_time: i32,
    operator: UserId,
}

impl FriendRecallEvent {
    pub(crate) fn new(
        bot: Bot,
        message_id: i32,
        message_internal_id: i32,
        message_time: i32,
        operator: impl Into<UserId>,
    ) -> DomainResult<Self> {
        if message_time < 0 {
            return Err(DomainError::validation_error(
                "message_time",
                "原发送时间不能为负",
            ));
        }
        Ok(Self {
            bot,
            message_id,
            message_internal_id,
            message_time,
            operator: operator.into(),
        })
    }

    /// 原消息作者；好友撤回只反映机器人自己的消息
    pub fn author_id(&self) -> UserId {
        self.bot.id
    }

    /// 撤回操作人，可能是机器人或好友本人
    pub fn operator(&self) -> UserId {
        self.operator
    }

    /// 撤回是否由机器人自己执行
    pub fn is_by_bot(&self) -> bool {
        self.operator == self.bot.id
    }

    /// 消息ID
    pub fn message_id(&self) -> i32 {
        self.message_id
    }

    /// 消息内部ID
    pub fn message_internal_id(&self) -> i32 {
        self.message_internal_id
    }

    /// 原发送时间（unix 秒）
    pub fn message_time(&self) -> i32 {
        self.message_time
    }

    /// 原发送时间（UTC）
    pub fn message_time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.message_time), 0)
    }
}

impl BotEvent for FriendRecallEvent {
    fn bot(&self) -> &Bot {
        &self.bot
    }
}

/// 群消息撤回
#[derive(Debug)]
pub struct GroupRecallEvent {
    bot: Bot,
    author_id: UserId,
    message_id: i32,
    message_internal_id: i32,
    message_time: i32,
    operator: Option<Member>,
    group: Group,
}

impl GroupRecallEvent {
    pub(crate) fn new(
        bot: Bot,
        author_id: impl Into<UserId>,
        message_id: i32,
        message_internal_id: i32,
        message_time: i32,
        operator: Option<Member>,
        group: Group,
    ) -> DomainResult<Self> {
        if message_time < 0 {
            return Err(DomainError::validation_error(
                "message_time",
                "原发送时间不能为负",
            ));
        }
        if group.bot().id != bot.id {
            return Err(DomainError::validation_error(
                "group",
                "群不属于当前机器人",
            ));
        }
        if let Some(member) = &operator {
            if member.group_id != group.id {
                return Err(DomainError::invalid_operator(member.id));
            }
        }
        Ok(Self {
            bot,
            author_id: author_id.into(),
            message_id,
            message_internal_id,
            message_time,
            operator,
            group,
        })
    }

    /// 原消息作者ID
    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    /// 消息ID
    pub fn message_id(&self) -> i32 {
        self.message_id
    }

    /// 消息内部ID
    pub fn message_internal_id(&self) -> i32 {
        self.message_internal_id
    }

    /// 原发送时间（unix 秒）
    pub fn message_time(&self) -> i32 {
        self.message_time
    }

    /// 原发送时间（UTC）
    pub fn message_time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.message_time), 0)
    }

    /// 解析被撤回消息的原作者
    ///
    /// 作者是机器人时返回机器人在本群的成员身份；否则在群成员
    /// 目录中查找。成员已退群时返回
    /// [`DomainError::MemberNotFound`]，绝不退化为哨兵身份。
    pub fn author(&self) -> DomainResult<&Member> {
        if self.author_id == self.bot.id {
            Ok(self.group.bot_as_member())
        } else {
            self.group.member(self.author_id)
        }
    }
}

impl BotEvent for GroupRecallEvent {
    fn bot(&self) -> &Bot {
        &self.bot
    }
}

impl GroupOperableEvent for GroupRecallEvent {
    fn group(&self) -> &Group {
        &self.group
    }

    fn operator(&self) -> Option<&Member> {
        self.operator.as_ref()
    }
}

/// 消息撤回事件
#[derive(Debug)]
pub enum MessageRecallEvent {
    Friend(FriendRecallEvent),
    Group(GroupRecallEvent),
}

impl MessageRecallEvent {
    /// 原消息作者ID
    pub fn author_id(&self) -> UserId {
        match self {
            MessageRecallEvent::Friend(event) => event.author_id(),
            MessageRecallEvent::Group(event) => event.author_id(),
        }
    }

    /// 消息ID
    pub fn message_id(&self) -> i32 {
        match self {
            MessageRecallEvent::Friend(event) => event.message_id(),
            MessageRecallEvent::Group(event) => event.message_id(),
        }
    }

    /// 消息内部ID
    pub fn message_internal_id(&self) -> i32 {
        match self {
            MessageRecallEvent::Friend(event) => event.message_internal_id(),
            MessageRecallEvent::Group(event) => event.message_internal_id(),
        }
    }

    /// 原发送时间（unix 秒）
    pub fn message_time(&self) -> i32 {
        match self {
            MessageRecallEvent::Friend(event) => event.message_time(),
            MessageRecallEvent::Group(event) => event.message_time(),
        }
    }

    /// 撤回是否由机器人自己执行
    ///
    /// 好友撤回按操作人ID判断，群撤回按操作者是否为空判断。
    pub fn is_by_bot(&self) -> bool {
        match self {
            MessageRecallEvent::Friend(event) => event.is_by_bot(),
            MessageRecallEvent::Group(event) => event.is_by_bot(),
        }
    }
}

impl BotEvent for MessageRecallEvent {
    fn bot(&self) -> &Bot {
        match self {
            MessageRecallEvent::Friend(event) => event.bot(),
            MessageRecallEvent::Group(event) => event.bot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::MemberPermission;
    use crate::value_objects::GroupId;

    fn test_bot() -> Bot {
        Bot::new(10_000, "测试机器人")
    }

    fn test_group(bot: &Bot) -> Group {
        let mut group = Group::new(bot.clone(), 30_000, "测试群", MemberPermission::Member);
        group.add_member(20_000, "张三", MemberPermission::Member);
        group.add_member(20_001, "管理员", MemberPermission::Administrator);
        group
    }

    #[test]
    fn test_friend_recall_is_by_bot_iff_operator_is_bot() {
        let bot = test_bot();

        let by_bot = FriendRecallEvent::new(bot.clone(), 10, 1, 1000, 10_000).unwrap();
        assert!(by_bot.is_by_bot());
        assert_eq!(by_bot.author_id(), bot.id);

        let by_friend = FriendRecallEvent::new(bot.clone(), 10, 1, 1000, 20_000).unwrap();
        assert!(!by_friend.is_by_bot());
        // 作者仍然是机器人
        assert_eq!(by_friend.author_id(), bot.id);
    }

    #[test]
    fn test_group_recall_is_by_bot_iff_operator_is_none() {
        let bot = test_bot();
        let group = test_group(&bot);

        let by_bot =
            GroupRecallEvent::new(bot.clone(), 20_000, 10, 1, 1000, None, group.clone()).unwrap();
        assert!(by_bot.is_by_bot());
        assert!(by_bot.operator().is_none());

        let operator = group.member(UserId(20_001)).unwrap().clone();
        let by_admin =
            GroupRecallEvent::new(bot, 20_000, 10, 1, 1000, Some(operator), group).unwrap();
        assert!(!by_admin.is_by_bot());
        assert_eq!(by_admin.operator().map(|m| m.id), Some(UserId(20_001)));
    }

    #[test]
    fn test_group_recall_author_resolution() {
        let bot = test_bot();
        let group = test_group(&bot);

        // 作者是机器人：返回机器人在本群的成员身份
        let event =
            GroupRecallEvent::new(bot.clone(), 10_000, 10, 1, 1000, None, group.clone()).unwrap();
        let author = event.author().unwrap();
        assert_eq!(author.id, bot.id);
        assert_eq!(author.card, "测试机器人");

        // 作者是普通成员：走目录查找
        let event = GroupRecallEvent::new(bot, 20_000, 10, 1, 1000, None, group).unwrap();
        assert_eq!(event.author().unwrap().card, "张三");
    }

    #[test]
    fn test_group_recall_author_departed() {
        let bot = test_bot();
        let mut group = test_group(&bot);
        group.remove_member(20_000);

        let event = GroupRecallEvent::new(bot, 20_000, 10, 1, 1000, None, group).unwrap();
        assert_eq!(
            event.author(),
            Err(DomainError::MemberNotFound {
                group_id: GroupId(30_000),
                user_id: UserId(20_000),
            })
        );
    }

    #[test]
    fn test_identifier_triple_is_passed_through() {
        let bot = test_bot();
        let group = test_group(&bot);

        let event = MessageRecallEvent::Group(
            GroupRecallEvent::new(bot.clone(), 20_000, 42, -7, 1_600_000_000, None, group)
                .unwrap(),
        );
        assert_eq!(event.message_id(), 42);
        assert_eq!(event.message_internal_id(), -7);
        assert_eq!(event.message_time(), 1_600_000_000);

        let friend = MessageRecallEvent::Friend(
            FriendRecallEvent::new(bot.clone(), 10, 1, 1000, 10_000).unwrap(),
        );
        assert_eq!(friend.author_id(), bot.id);
        assert!(friend.is_by_bot());
    }

    #[test]
    fn test_negative_message_time_is_rejected() {
        let bot = test_bot();
        let group = test_group(&bot);

        assert!(matches!(
            FriendRecallEvent::new(bot.clone(), 10, 1, -1, 10_000),
            Err(DomainError::ValidationError { .. })
        ));
        assert!(matches!(
            GroupRecallEvent::new(bot, 20_000, 10, 1, -1, None, group),
            Err(DomainError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_foreign_operator_is_rejected() {
        let bot = test_bot();
        let group = test_group(&bot);
        // 属于另一个群的成员
        let foreign = Member::new(bot.clone(), 40_000, 50_000, "外人", MemberPermission::Member);

        assert_eq!(
            GroupRecallEvent::new(bot, 20_000, 10, 1, 1000, Some(foreign), group)
                .err(),
            Some(DomainError::InvalidOperatorReference {
                operator_id: UserId(50_000),
            })
        );
    }

    #[test]
    fn test_group_of_other_bot_is_rejected() {
        let bot = test_bot();
        let other_bot = Bot::new(11_000, "别的机器人");
        let group = Group::new(other_bot, 30_000, "群", MemberPermission::Member);

        assert!(matches!(
            GroupRecallEvent::new(bot, 20_000, 10, 1, 1000, None, group),
            Err(DomainError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_message_time_utc_conversion() {
        let bot = test_bot();
        let event = FriendRecallEvent::new(bot, 10, 1, 1_600_000_000, 10_000).unwrap();
        let time = event.message_time_utc().unwrap();
        assert_eq!(time.timestamp(), 1_600_000_000);
    }
}
