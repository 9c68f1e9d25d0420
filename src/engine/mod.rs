// ==========================================
// 合作社生产记录 - 引擎层
// ==========================================
// 职责: 筛选、分页、录入校验、汇总、通知事件
// 红线: 引擎均为纯函数或无共享状态,不直接写仓储
// ==========================================

pub mod events;
pub mod filter;
pub mod intake;
pub mod paginator;
pub mod summary;

// 重导出核心引擎
pub use events::{
    ChannelEventPublisher, NoOpEventPublisher, NotificationLevel, OptionalEventPublisher,
    ProductionEvent, ProductionEventPublisher,
};
pub use filter::FilterEngine;
pub use intake::{
    next_record_id, FieldViolation, GradePolicy, IntakeField, RecordIntake, ValidatedInput,
    ValidationError,
};
pub use paginator::{paginate, total_pages, Page, PageCursor, DEFAULT_PAGE_SIZE};
pub use summary::{ProductionSummary, SummaryEngine};
