//! 登录机器人的引用

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// 登录机器人的轻量引用
///
/// 每个事件都能解析出唯一的所属机器人，要么直接持有此引用，
/// 要么经由目标联系人间接取得。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    /// 机器人账号ID
    pub id: UserId,
    /// 机器人昵称
    pub nickname: String,
}

impl Bot {
    /// 创建机器人引用
    pub fn new(id: impl Into<UserId>, nickname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nickname: nickname.into(),
        }
    }
}
