// ==========================================
// 合作社生产记录 - 核心库
// ==========================================
// 页面: Production（生产记录）
// 技术栈: Rust + csv / rust_xlsxwriter / printpdf
// 职责: 记录仓储、筛选、分页、录入校验、CSV/Excel/PDF 导出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 内存记录序列
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 导出层 - 载荷与渲染
pub mod exporter;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 页面接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Crop, Grade, RecordStatus};

// 领域实体
pub use domain::{
    CropSelector, ExportFormat, ExportOptions, FilterCriteria, GradeSelector, MonetaryValue,
    ProductionInput, ProductionRecord, Quantity,
};

// 仓储
pub use repository::ProductionRepository;

// 引擎
pub use engine::{
    FilterEngine, GradePolicy, PageCursor, ProductionEvent, ProductionEventPublisher,
    RecordIntake, SummaryEngine, ValidationError,
};

// 导出
pub use exporter::{
    ExportDispatcher, ExportError, ExportedFile, TabularPayload, UniversalRenderer,
};

// 配置
pub use config::ConfigManager;

// API
pub use api::{ApiError, ApiResult, ProductionApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Agribind - Production";
