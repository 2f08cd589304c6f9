//! 领域模型错误定义
//!
//! 定义事件核心中所有可能的错误类型，提供清晰的错误上下文。
//! 取消不是错误：它是正常的控制流结果，由各服务的返回值表达。

use thiserror::Error;

use crate::transport::TransportError;
use crate::value_objects::{GroupId, UserId};

/// 领域模型错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 群成员不存在（可能已退群）
    #[error("群成员不存在: 群 {group_id} 中找不到成员 {user_id}")]
    MemberNotFound { group_id: GroupId, user_id: UserId },

    /// 操作者引用无效
    #[error("操作者引用无效: {operator_id} 不是已知的群成员")]
    InvalidOperatorReference { operator_id: UserId },

    /// 验证错误
    #[error("验证失败: {field}: {message}")]
    ValidationError { field: String, message: String },

    /// 事件通道必须原样归还传入的事件实例
    #[error("事件通道归还了不同类型的事件: 期望 {expected}, 实际 {actual}")]
    ChannelContractViolation {
        expected: &'static str,
        actual: &'static str,
    },

    /// 传输层错误
    #[error("传输层错误: {0}")]
    Transport(#[from] TransportError),
}

impl DomainError {
    /// 创建成员不存在错误
    pub fn member_not_found(group_id: GroupId, user_id: UserId) -> Self {
        Self::MemberNotFound { group_id, user_id }
    }

    /// 创建操作者引用无效错误
    pub fn invalid_operator(operator_id: UserId) -> Self {
        Self::InvalidOperatorReference { operator_id }
    }

    /// 创建验证错误
    pub fn validation_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;
