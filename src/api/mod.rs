// ==========================================
// 合作社生产记录 - API 层
// ==========================================
// 职责: 提供生产页面接口,供展示层绑定
// ==========================================

pub mod error;
pub mod export_dialog;
pub mod production_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use export_dialog::ExportDialog;
pub use production_api::{ProductionApi, RecordPage};
