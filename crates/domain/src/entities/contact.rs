//! 消息与上传目标的联系人抽象

use serde::{Deserialize, Serialize};

use crate::entities::bot::Bot;
use crate::entities::friend::Friend;
use crate::entities::group::{Group, Member};

/// 可以作为动作目标的联系人
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Contact {
    /// 好友
    Friend(Friend),
    /// 群
    Group(Group),
    /// 群成员（临时会话）
    Member(Member),
}

impl Contact {
    /// 联系人所属的机器人
    pub fn bot(&self) -> &Bot {
        match self {
            Contact::Friend(friend) => &friend.bot,
            Contact::Group(group) => group.bot(),
            Contact::Member(member) => &member.bot,
        }
    }

    /// 目标ID：好友与成员为用户ID，群为群号
    pub fn target_id(&self) -> i64 {
        match self {
            Contact::Friend(friend) => friend.id.into(),
            Contact::Group(group) => group.id.into(),
            Contact::Member(member) => member.id.into(),
        }
    }

    /// 联系人种类名称
    pub fn kind(&self) -> &'static str {
        match self {
            Contact::Friend(_) => "friend",
            Contact::Group(_) => "group",
            Contact::Member(_) => "member",
        }
    }
}

/// 联系人的借用视图，供事件聚合访问器使用
#[derive(Debug, Clone, Copy)]
pub enum ContactRef<'a> {
    Friend(&'a Friend),
    Group(&'a Group),
    Member(&'a Member),
}

impl<'a> ContactRef<'a> {
    /// 联系人所属的机器人
    pub fn bot(&self) -> &'a Bot {
        match self {
            ContactRef::Friend(friend) => &friend.bot,
            ContactRef::Group(group) => group.bot(),
            ContactRef::Member(member) => &member.bot,
        }
    }

    /// 目标ID：好友与成员为用户ID，群为群号
    pub fn target_id(&self) -> i64 {
        match self {
            ContactRef::Friend(friend) => friend.id.into(),
            ContactRef::Group(group) => group.id.into(),
            ContactRef::Member(member) => member.id.into(),
        }
    }
}
