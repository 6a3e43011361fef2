// ==========================================
// 星际舰队调度系统 - 领域模型层
// ==========================================
// 依据: Fleet_Dev_Master_Spec.md - PART C 数据与状态体系
// ==========================================
// 职责: 定义领域实体、类型、值对象
// 红线: 不含数据访问逻辑,不含引擎逻辑
// 红线: 快照实体只读,所有权归调用方
// ==========================================

pub mod dispatch;
pub mod fleet;
pub mod spatial;
pub mod types;

// 重导出核心类型
pub use dispatch::{
    Assignment, DistributionMetrics, FleetPostureSnapshot, PostureAssessment, RebalancePlan,
    SelectionResult,
};
pub use fleet::{Cargo, CargoItem, Ship, Waypoint};
pub use spatial::Position;
pub use types::{NavStatus, PostureLevel, SelectionReason};
