//! 图片上传事件对
//!
//! 上传动作是广播这两个事件的唯一途径。[`BeforeImageUploadEvent`]
//! 总是先广播；若其被取消，本次上传不会发生，[`ImageUploadEvent`]
//! 也不会广播。同一次上传尝试的两个事件共享同一 `(target, source)`
//! 对。重试不在此处：传输层若重试，会从头重新进入这一事件序列。

use crate::entities::{Bot, Contact, ExternalImage, Image};
use crate::events::{BotActiveEvent, BotEvent, CancellableEvent};

/// 图片上传前，可取消以阻止上传
#[derive(Debug)]
pub struct BeforeImageUploadEvent {
    target: Contact,
    source: ExternalImage,
    cancelled: bool,
}

impl BeforeImageUploadEvent {
    pub(crate) fn new(target: Contact, source: ExternalImage) -> Self {
        Self {
            target,
            source,
            cancelled: false,
        }
    }

    /// 图片将发往的联系人
    pub fn target(&self) -> &Contact {
        &self.target
    }

    /// 本地图片句柄
    pub fn source(&self) -> &ExternalImage {
        &self.source
    }

    pub(crate) fn into_parts(self) -> (Contact, ExternalImage) {
        (self.target, self.source)
    }
}

impl BotEvent for BeforeImageUploadEvent {
    fn bot(&self) -> &Bot {
        self.target.bot()
    }
}

impl BotActiveEvent for BeforeImageUploadEvent {}

impl CancellableEvent for BeforeImageUploadEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// 图片上传成功
#[derive(Debug)]
pub struct ImageUploadSucceedEvent {
    target: Contact,
    source: ExternalImage,
    image: Image,
}

impl ImageUploadSucceedEvent {
    pub(crate) fn new(target: Contact, source: ExternalImage, image: Image) -> Self {
        Self {
            target,
            source,
            image,
        }
    }

    pub fn target(&self) -> &Contact {
        &self.target
    }

    pub fn source(&self) -> &ExternalImage {
        &self.source
    }

    /// 上传得到的远程图片句柄
    pub fn image(&self) -> &Image {
        &self.image
    }
}

/// 图片上传失败
#[derive(Debug)]
pub struct ImageUploadFailedEvent {
    target: Contact,
    source: ExternalImage,
    errno: i32,
    message: String,
}

impl ImageUploadFailedEvent {
    pub(crate) fn new(
        target: Contact,
        source: ExternalImage,
        errno: i32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            target,
            source,
            errno,
            message: message.into(),
        }
    }

    pub fn target(&self) -> &Contact {
        &self.target
    }

    pub fn source(&self) -> &ExternalImage {
        &self.source
    }

    /// 服务器或传输层给出的错误码
    pub fn errno(&self) -> i32 {
        self.errno
    }

    /// 人类可读的失败原因
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 图片上传完成
///
/// 总是在 [`BeforeImageUploadEvent`] 之后广播；前者被取消时本
/// 事件不会广播。
#[derive(Debug)]
pub enum ImageUploadEvent {
    Succeed(ImageUploadSucceedEvent),
    Failed(ImageUploadFailedEvent),
}

impl ImageUploadEvent {
    /// 图片将发往的联系人
    pub fn target(&self) -> &Contact {
        match self {
            ImageUploadEvent::Succeed(event) => event.target(),
            ImageUploadEvent::Failed(event) => event.target(),
        }
    }

    /// 本地图片句柄
    pub fn source(&self) -> &ExternalImage {
        match self {
            ImageUploadEvent::Succeed(event) => event.source(),
            ImageUploadEvent::Failed(event) => event.source(),
        }
    }

    /// 是否上传成功
    pub fn is_succeed(&self) -> bool {
        matches!(self, ImageUploadEvent::Succeed(_))
    }
}

impl BotEvent for ImageUploadSucceedEvent {
    fn bot(&self) -> &Bot {
        self.target.bot()
    }
}

impl BotActiveEvent for ImageUploadSucceedEvent {}

impl BotEvent for ImageUploadFailedEvent {
    fn bot(&self) -> &Bot {
        self.target.bot()
    }
}

impl BotActiveEvent for ImageUploadFailedEvent {}

impl BotEvent for ImageUploadEvent {
    fn bot(&self) -> &Bot {
        match self {
            ImageUploadEvent::Succeed(event) => event.bot(),
            ImageUploadEvent::Failed(event) => event.bot(),
        }
    }
}

impl BotActiveEvent for ImageUploadEvent {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Friend, ImageFormat};

    fn test_source() -> ExternalImage {
        ExternalImage::new(
            "0123456789abcdef0123456789abcdef",
            2048,
            ImageFormat::Jpeg,
            640,
            480,
        )
        .unwrap()
    }

    #[test]
    fn test_before_upload_cancellation() {
        let bot = Bot::new(10_000, "测试机器人");
        let friend = Friend::new(bot.clone(), 20_000, "好友");
        let mut event = BeforeImageUploadEvent::new(Contact::Friend(friend), test_source());

        assert_eq!(event.bot().id, bot.id);
        assert!(!event.is_cancelled());
        event.cancel();
        event.cancel();
        assert!(event.is_cancelled());
    }

    #[test]
    fn test_upload_result_accessors() {
        let bot = Bot::new(10_000, "测试机器人");
        let friend = Friend::new(bot.clone(), 20_000, "好友");
        let target = Contact::Friend(friend);
        let source = test_source();

        let succeed = ImageUploadEvent::Succeed(ImageUploadSucceedEvent::new(
            target.clone(),
            source.clone(),
            Image::new("{abc}.image").unwrap(),
        ));
        assert!(succeed.is_succeed());
        assert_eq!(succeed.source().md5(), source.md5());
        assert_eq!(succeed.bot().id, bot.id);

        let failed = ImageUploadEvent::Failed(ImageUploadFailedEvent::new(
            target, source, 233, "服务器拒绝",
        ));
        assert!(!failed.is_succeed());
        match &failed {
            ImageUploadEvent::Failed(event) => {
                assert_eq!(event.errno(), 233);
                assert_eq!(event.message(), "服务器拒绝");
            }
            _ => panic!("Expected failed variant"),
        }
    }
}
