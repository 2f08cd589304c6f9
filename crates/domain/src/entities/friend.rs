//! 好友实体定义

use serde::{Deserialize, Serialize};

use crate::entities::bot::Bot;
use crate::value_objects::UserId;

/// 好友联系人
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// 所属机器人
    pub bot: Bot,
    /// 好友账号ID
    pub id: UserId,
    /// 好友昵称
    pub nickname: String,
    /// 备注名
    pub remark: Option<String>,
}

impl Friend {
    /// 创建好友联系人
    pub fn new(bot: Bot, id: impl Into<UserId>, nickname: impl Into<String>) -> Self {
        Self {
            bot,
            id: id.into(),
            nickname: nickname.into(),
            remark: None,
        }
    }

    /// 显示名称（优先备注，其次昵称）
    pub fn display_name(&self) -> &str {
        self.remark.as_deref().unwrap_or(&self.nickname)
    }
}
