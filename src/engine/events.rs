// ==========================================
// 合作社生产记录 - 页面通知事件
// ==========================================
// 职责: 定义通知事件与发布 trait,展示层订阅后自行呈现
// 说明: 核心流程只发布事件,不依赖任何具体 UI 反馈机制
// ==========================================

use crate::domain::criteria::ExportFormat;
use crate::i18n::{t, t_with_args};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

// ==========================================
// 通知事件类型
// ==========================================

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// 生产页面事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionEvent {
    /// 新记录已入库
    RecordAdded { record_id: String },
    /// 导出文件已生成
    ExportCompleted {
        format: ExportFormat,
        file_name: String,
        row_count: usize,
    },
    /// 导出渲染失败
    ExportFailed { format: ExportFormat, reason: String },
}

impl ProductionEvent {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            ProductionEvent::RecordAdded { .. } => "RecordAdded",
            ProductionEvent::ExportCompleted { .. } => "ExportCompleted",
            ProductionEvent::ExportFailed { .. } => "ExportFailed",
        }
    }

    pub fn level(&self) -> NotificationLevel {
        match self {
            ProductionEvent::ExportFailed { .. } => NotificationLevel::Error,
            _ => NotificationLevel::Success,
        }
    }

    /// 面向用户的本地化提示文本
    pub fn message(&self) -> String {
        match self {
            ProductionEvent::RecordAdded { .. } => t("notification.record_added"),
            ProductionEvent::ExportCompleted { format, .. } => {
                t_with_args("notification.export_completed", &[("format", format.label())])
            }
            ProductionEvent::ExportFailed { format, reason } => t_with_args(
                "notification.export_failed",
                &[("format", format.label()), ("reason", reason.as_str())],
            ),
        }
    }
}

// ==========================================
// 事件发布 Trait
// ==========================================

/// 生产页面事件发布者
///
/// 展示层实现或订阅（见 `ChannelEventPublisher`）
pub trait ProductionEventPublisher: Send + Sync {
    /// 发布事件; 失败只影响通知,不影响已完成的业务操作
    fn publish(&self, event: ProductionEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 空操作事件发布者
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

impl ProductionEventPublisher for NoOpEventPublisher {
    fn publish(&self, event: ProductionEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!("NoOpEventPublisher: 跳过事件发布 - event_type={}", event.as_str());
        Ok(())
    }
}

/// 基于 mpsc 通道的事件发布者
///
/// 展示层持有 `Receiver`,按需 `try_iter()` 取出通知
#[derive(Debug)]
pub struct ChannelEventPublisher {
    sender: Mutex<Sender<ProductionEvent>>,
}

impl ChannelEventPublisher {
    /// 创建发布者及其订阅端
    pub fn channel() -> (Self, Receiver<ProductionEvent>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender: Mutex::new(sender),
            },
            receiver,
        )
    }
}

impl ProductionEventPublisher for ChannelEventPublisher {
    fn publish(&self, event: ProductionEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        let sender = self
            .sender
            .lock()
            .map_err(|e| format!("通知通道锁获取失败: {}", e))?;
        sender.send(event)?;
        Ok(())
    }
}

/// 可选的事件发布者包装
pub struct OptionalEventPublisher {
    inner: Option<Arc<dyn ProductionEventPublisher>>,
}

impl OptionalEventPublisher {
    pub fn with_publisher(publisher: Arc<dyn ProductionEventPublisher>) -> Self {
        Self {
            inner: Some(publisher),
        }
    }

    pub fn none() -> Self {
        Self { inner: None }
    }

    /// 发布事件（如果有发布者）; 发布失败仅记录日志
    pub fn publish(&self, event: ProductionEvent) {
        match &self.inner {
            Some(publisher) => {
                let event_type = event.as_str().to_string();
                if let Err(e) = publisher.publish(event) {
                    tracing::warn!(event_type = %event_type, error = %e, "通知发布失败");
                }
            }
            None => {
                tracing::debug!(
                    "OptionalEventPublisher: 未配置发布者，跳过事件 - event_type={}",
                    event.as_str()
                );
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for OptionalEventPublisher {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_level_and_type() {
        let added = ProductionEvent::RecordAdded {
            record_id: "PROD009".to_string(),
        };
        assert_eq!(added.as_str(), "RecordAdded");
        assert_eq!(added.level(), NotificationLevel::Success);

        let failed = ProductionEvent::ExportFailed {
            format: ExportFormat::Document,
            reason: "boom".to_string(),
        };
        assert_eq!(failed.level(), NotificationLevel::Error);
    }

    #[test]
    fn test_channel_publisher_delivers_in_order() {
        let (publisher, receiver) = ChannelEventPublisher::channel();
        let optional = OptionalEventPublisher::with_publisher(Arc::new(publisher));
        assert!(optional.is_configured());

        optional.publish(ProductionEvent::RecordAdded {
            record_id: "PROD009".to_string(),
        });
        optional.publish(ProductionEvent::ExportCompleted {
            format: ExportFormat::Csv,
            file_name: "production-data_20241005_0930.csv".to_string(),
            row_count: 9,
        });

        let events: Vec<ProductionEvent> = receiver.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].as_str(), "RecordAdded");
        assert_eq!(events[1].as_str(), "ExportCompleted");
    }

    #[test]
    fn test_dropped_receiver_does_not_panic() {
        let (publisher, receiver) = ChannelEventPublisher::channel();
        drop(receiver);

        assert!(publisher
            .publish(ProductionEvent::RecordAdded {
                record_id: "PROD001".to_string(),
            })
            .is_err());

        let optional = OptionalEventPublisher::with_publisher(Arc::new(publisher));
        optional.publish(ProductionEvent::RecordAdded {
            record_id: "PROD002".to_string(),
        });
    }

    #[test]
    fn test_unconfigured_publisher_is_silent() {
        let optional = OptionalEventPublisher::default();
        assert!(!optional.is_configured());
        optional.publish(ProductionEvent::RecordAdded {
            record_id: "PROD001".to_string(),
        });
        assert!(NoOpEventPublisher
            .publish(ProductionEvent::RecordAdded {
                record_id: "PROD001".to_string(),
            })
            .is_ok());
    }
}
