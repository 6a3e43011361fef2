// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 日志级别由环境变量控制,引擎内部只打点不落盘
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=fleet_dispatch=trace
///
/// # 示例
/// ```no_run
/// use fleet_dispatch::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 按指定级别初始化日志系统 (忽略环境变量)
///
/// # 参数
/// - `level`: 过滤器表达式,如 "debug" 或 "fleet_dispatch=trace"
pub fn init_with_level(level: &str) {
    fmt().with_env_filter(EnvFilter::new(level)).init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别,重复初始化时静默忽略
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
