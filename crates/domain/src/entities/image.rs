//! 图片句柄定义
//!
//! [`ExternalImage`] 是尚未上传的本地图片句柄，[`Image`] 是上传
//! 完成后服务器侧的远程句柄。两者都是不可变值对象。

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// 图片格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Webp,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Webp => "webp",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "png" => Some(ImageFormat::Png),
            "jpeg" | "jpg" => Some(ImageFormat::Jpeg),
            "gif" => Some(ImageFormat::Gif),
            "bmp" => Some(ImageFormat::Bmp),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }
}

/// 待上传的本地图片句柄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalImage {
    md5: String,
    size: u64,
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl ExternalImage {
    /// 创建本地图片句柄
    ///
    /// MD5 必须是32位十六进制字符串，大小必须非零。
    pub fn new(
        md5: impl Into<String>,
        size: u64,
        format: ImageFormat,
        width: u32,
        height: u32,
    ) -> DomainResult<Self> {
        let md5 = md5.into().to_lowercase();
        if md5.len() != 32 || !md5.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::validation_error(
                "md5",
                "必须是32位十六进制字符串",
            ));
        }
        if size == 0 {
            return Err(DomainError::validation_error("size", "图片大小不能为零"));
        }
        Ok(Self {
            md5,
            size,
            format,
            width,
            height,
        })
    }

    pub fn md5(&self) -> &str {
        &self.md5
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// 服务器侧的远程图片句柄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    image_id: String,
}

impl Image {
    /// 创建远程图片句柄
    pub fn new(image_id: impl Into<String>) -> DomainResult<Self> {
        let image_id = image_id.into();
        if image_id.is_empty() {
            return Err(DomainError::validation_error("image_id", "不能为空"));
        }
        Ok(Self { image_id })
    }

    pub fn image_id(&self) -> &str {
        &self.image_id
    }
}
