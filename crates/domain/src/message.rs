//! 消息链
//!
//! 一条待发送的消息由若干消息段组成。发送事件持有可变消息链，
//! 监听器可以在分发窗口内改写它，触发动作在分发结束后重新读取。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::image::Image;
use crate::value_objects::UserId;

/// 消息段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageSegment {
    /// 纯文本
    Text { text: String },
    /// @某人
    At { target: UserId },
    /// 图片
    Image { image: Image },
}

/// 消息链
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageChain {
    segments: Vec<MessageSegment>,
}

impl MessageChain {
    /// 创建空消息链
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建纯文本消息链
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![MessageSegment::Text { text: text.into() }],
        }
    }

    /// 追加一个消息段
    pub fn push(&mut self, segment: MessageSegment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[MessageSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// 拼接出纯文本表示，图片段不参与
    pub fn to_plain_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            match segment {
                MessageSegment::Text { text: t } => text.push_str(t),
                MessageSegment::At { target } => {
                    text.push('@');
                    text.push_str(&target.to_string());
                }
                MessageSegment::Image { .. } => {}
            }
        }
        text
    }
}

impl fmt::Display for MessageChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_text())
    }
}
