//! 群与群成员目录

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::bot::Bot;
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{GroupId, UserId};

/// 群成员权限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberPermission {
    /// 普通成员
    Member,
    /// 管理员
    Administrator,
    /// 群主
    Owner,
}

impl MemberPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberPermission::Member => "member",
            MemberPermission::Administrator => "administrator",
            MemberPermission::Owner => "owner",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "member" => Some(MemberPermission::Member),
            "administrator" => Some(MemberPermission::Administrator),
            "owner" => Some(MemberPermission::Owner),
            _ => None,
        }
    }
}

/// 群成员
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// 所属机器人
    pub bot: Bot,
    /// 所在群
    pub group_id: GroupId,
    /// 成员账号ID
    pub id: UserId,
    /// 群名片
    pub card: String,
    /// 群内权限
    pub permission: MemberPermission,
}

impl Member {
    /// 创建群成员
    pub fn new(
        bot: Bot,
        group_id: impl Into<GroupId>,
        id: impl Into<UserId>,
        card: impl Into<String>,
        permission: MemberPermission,
    ) -> Self {
        Self {
            bot,
            group_id: group_id.into(),
            id: id.into(),
            card: card.into(),
            permission,
        }
    }
}

/// 群联系人，同时承担本群成员目录的角色
///
/// 机器人自身的成员身份随群一起创建，始终可用；其他成员经
/// `add_member` 进入目录，退群后经 `remove_member` 移除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// 群号
    pub id: GroupId,
    /// 群名称
    pub name: String,
    bot_member: Member,
    members: HashMap<UserId, Member>,
}

impl Group {
    /// 创建群，同时生成机器人在本群的成员身份
    pub fn new(
        bot: Bot,
        id: impl Into<GroupId>,
        name: impl Into<String>,
        bot_permission: MemberPermission,
    ) -> Self {
        let id = id.into();
        let bot_member = Member::new(bot.clone(), id, bot.id, bot.nickname.clone(), bot_permission);
        Self {
            id,
            name: name.into(),
            bot_member,
            members: HashMap::new(),
        }
    }

    /// 所属机器人
    pub fn bot(&self) -> &Bot {
        &self.bot_member.bot
    }

    /// 机器人在本群的成员身份
    pub fn bot_as_member(&self) -> &Member {
        &self.bot_member
    }

    /// 向目录中添加一个成员
    pub fn add_member(
        &mut self,
        id: impl Into<UserId>,
        card: impl Into<String>,
        permission: MemberPermission,
    ) {
        let id = id.into();
        let member = Member::new(self.bot().clone(), self.id, id, card.into(), permission);
        self.members.insert(id, member);
    }

    /// 从目录中移除一个成员（成员退群）
    pub fn remove_member(&mut self, id: impl Into<UserId>) -> Option<Member> {
        self.members.remove(&id.into())
    }

    /// 按ID查找成员，不存在（可能已退群）时返回错误
    pub fn member(&self, id: UserId) -> DomainResult<&Member> {
        if id == self.bot_member.id {
            return Ok(&self.bot_member);
        }
        self.members
            .get(&id)
            .ok_or(DomainError::MemberNotFound {
                group_id: self.id,
                user_id: id,
            })
    }

    /// 按ID查找成员，不存在时返回 None
    pub fn find_member(&self, id: UserId) -> Option<&Member> {
        self.member(id).ok()
    }

    /// 目录中是否存在该成员
    pub fn contains_member(&self, id: UserId) -> bool {
        self.member(id).is_ok()
    }

    /// 目录中的成员数量（不含机器人自身）
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
