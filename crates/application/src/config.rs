//! 应用配置
//!
//! 环境变量驱动，所有配置项都有默认值。

use std::env;

use domain::UploadLimits;
use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 图片上传配置
    pub upload: UploadConfig,
}

/// 图片上传配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// 单张图片大小上限（字节）
    pub max_size_bytes: u64,
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            upload: UploadConfig {
                max_size_bytes: env::var("UPLOAD_MAX_SIZE_BYTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30 * 1024 * 1024),
            },
        }
    }
}

impl UploadConfig {
    /// 转换为领域层的上传限制
    pub fn limits(&self) -> UploadLimits {
        UploadLimits {
            max_size_bytes: self.max_size_bytes,
        }
    }
}
