//! 图片上传服务
//!
//! 上传流程：校验本地图片 → 广播上传前事件 → 若未被取消则执行
//! 上传 → 广播成功或失败事件。上传前事件被取消时，本次尝试不会
//! 广播任何 [`ImageUploadEvent`]；上传失败是结果而非错误，通过
//! [`UploadOutcome`] 表达。

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::channel::EventChannel;
use crate::entities::{Contact, ExternalImage, Image};
use crate::errors::{DomainError, DomainResult};
use crate::events::{
    BeforeImageUploadEvent, CancellableEvent, Event, ImageUploadEvent, ImageUploadFailedEvent,
    ImageUploadSucceedEvent,
};
use crate::transport::{ImageTransport, TransportError};

/// 上传限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    /// 单张图片大小上限（字节）
    pub max_size_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_size_bytes: 30 * 1024 * 1024,
        }
    }
}

impl UploadLimits {
    fn check(&self, source: &ExternalImage) -> DomainResult<()> {
        if source.size() > self.max_size_bytes {
            return Err(DomainError::validation_error(
                "source",
                format!(
                    "图片大小 {} 字节超过上限 {} 字节",
                    source.size(),
                    self.max_size_bytes
                ),
            ));
        }
        Ok(())
    }
}

/// 上传结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 上传成功，携带远程图片句柄
    Uploaded(Image),
    /// 上传失败
    Failed { errno: i32, message: String },
    /// 被监听器取消，未上传
    Cancelled,
}

/// 图片上传服务
pub struct ImageService {
    channel: Arc<dyn EventChannel>,
    transport: Arc<dyn ImageTransport>,
    limits: UploadLimits,
}

impl ImageService {
    /// 创建图片上传服务，使用默认上传限制
    pub fn new(channel: Arc<dyn EventChannel>, transport: Arc<dyn ImageTransport>) -> Self {
        Self::with_limits(channel, transport, UploadLimits::default())
    }

    /// 创建图片上传服务并指定上传限制
    pub fn with_limits(
        channel: Arc<dyn EventChannel>,
        transport: Arc<dyn ImageTransport>,
        limits: UploadLimits,
    ) -> Self {
        Self {
            channel,
            transport,
            limits,
        }
    }

    /// 上传一张图片
    pub async fn upload(
        &self,
        target: Contact,
        source: ExternalImage,
    ) -> DomainResult<UploadOutcome> {
        self.limits.check(&source)?;

        let mut event = Event::BeforeImageUpload(BeforeImageUploadEvent::new(target, source));
        self.channel.publish(&mut event);
        let event = match event {
            Event::BeforeImageUpload(event) => event,
            other => {
                return Err(DomainError::ChannelContractViolation {
                    expected: "BeforeImageUpload",
                    actual: other.event_type(),
                })
            }
        };

        if event.is_cancelled() {
            info!("图片上传被监听器取消");
            return Ok(UploadOutcome::Cancelled);
        }

        let (target, source) = event.into_parts();
        match self.transport.upload(&target, &source).await {
            Ok(image) => {
                debug!(
                    target = target.kind(),
                    image_id = image.image_id(),
                    "图片上传成功"
                );
                let mut done = Event::ImageUpload(ImageUploadEvent::Succeed(
                    ImageUploadSucceedEvent::new(target, source, image.clone()),
                ));
                self.channel.publish(&mut done);
                Ok(UploadOutcome::Uploaded(image))
            }
            Err(TransportError::UploadRejected { errno, message }) => {
                warn!(target = target.kind(), errno, %message, "图片上传被服务器拒绝");
                let mut done = Event::ImageUpload(ImageUploadEvent::Failed(
                    ImageUploadFailedEvent::new(target, source, errno, message.clone()),
                ));
                self.channel.publish(&mut done);
                Ok(UploadOutcome::Failed { errno, message })
            }
            Err(err) => {
                let message = err.to_string();
                warn!(target = target.kind(), %message, "图片上传失败");
                let mut done = Event::ImageUpload(ImageUploadEvent::Failed(
                    ImageUploadFailedEvent::new(target, source, -1, message.clone()),
                ));
                self.channel.publish(&mut done);
                Ok(UploadOutcome::Failed { errno: -1, message })
            }
        }
    }
}
