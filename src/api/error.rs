// ==========================================
// 合作社生产记录 - API层错误类型
// ==========================================
// 职责: 汇总录入校验错误与导出渲染错误,转换为面向调用方的错误
// ==========================================

use crate::engine::intake::ValidationError;
use crate::exporter::error::ExportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务错误
    // ==========================================
    /// 录入表单校验失败（字段级,可修正后重试）
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 导出渲染失败（已发布 ExportFailed 通知）
    #[error("导出失败: {0}")]
    ExportRender(#[from] ExportError),

    #[error("无效输入: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// 是否为可由用户修正的错误
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, ApiError::Validation(_) | ApiError::InvalidInput(_))
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
