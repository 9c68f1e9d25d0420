// ==========================================
// 合作社生产记录 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// 职责: 持有规范记录序列（进程生命周期内）
// ==========================================

pub mod production_repo;
pub mod seed;

// 重导出核心仓储
pub use production_repo::ProductionRepository;
pub use seed::{seed_records, DEFAULT_CURRENCY, DEFAULT_QUANTITY_UNIT};
