// ==========================================
// 合作社生产记录 - 配置层
// ==========================================
// 职责: 系统配置管理,键值覆写 + 类型化读取
// 存储: 进程内 key-value
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, DEFAULT_LOCALE};
