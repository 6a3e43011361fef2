// ==========================================
// 星际舰队调度系统 - 核心库
// ==========================================
// 依据: Fleet_Dev_Master_Spec.md - 系统宪法
// 技术栈: Rust (纯引擎库,无存储/无网络)
// 系统定位: 决策支持引擎 (移动指令由外部控制循环下发)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 调度决策
pub mod engine;

// 配置层 - 调度参数档案
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{NavStatus, PostureLevel, SelectionReason};

// 领域实体与值对象
pub use domain::{
    Assignment, Cargo, CargoItem, DistributionMetrics, FleetPostureSnapshot, Position,
    PostureAssessment, RebalancePlan, SelectionResult, Ship, Waypoint,
};

// 引擎
pub use engine::{
    DispatchOrchestrator, EngineError, EngineResult, FleetAssigner, FleetPostureEngine,
    ShipSelector,
};

// 配置
pub use config::{DispatchParameters, DispatchProfile};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "星际舰队调度系统";

// ==========================================
// 预编译检查
// ==========================================
