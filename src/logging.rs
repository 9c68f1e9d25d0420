// ==========================================
// 合作社生产记录 - 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// RUST_LOG 覆盖默认过滤规则,可选 JSON 输出
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 未设置 RUST_LOG 时的过滤规则: 本 crate 输出 info,依赖库只输出 warn
const DEFAULT_FILTER: &str = "warn,agribind_production=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// 初始化控制台日志
///
/// # 环境变量
/// - RUST_LOG: 覆盖默认过滤规则
///   例如: RUST_LOG=debug 或 RUST_LOG=agribind_production::exporter=trace
///
/// 重复初始化时静默返回
///
/// # 示例
/// ```no_run
/// use agribind_production::logging;
/// logging::init();
/// ```
pub fn init() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// 初始化 JSON 格式日志（每行一个事件,供日志采集使用）
pub fn init_json() {
    let _ = fmt()
        .json()
        .with_env_filter(env_filter())
        .with_current_span(false)
        .try_init();
}

/// 测试日志: 本 crate 输出 debug,写入测试捕获的输出
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("agribind_production=debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
        tracing::debug!("日志系统重复初始化不报错");
    }

    #[test]
    fn test_init_after_subscriber_installed() {
        init_test();
        init();
        init_json();
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
