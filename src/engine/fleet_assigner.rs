// ==========================================
// 星际舰队调度系统 - 舰队分配引擎
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 3. Fleet Assigner
// 红线: 容量约束优先于距离贪心
// 红线: 平局裁决确定性 (距离 → 舰船标识 → 目标标识)
// ==========================================
// 职责: 再平衡判定 + 容量约束指派 + 分布质量评分
// 输入: 舰队快照 + 目标航点列表
// 输出: 判定结果 / 指派列表 / 质量评分
// ==========================================

mod core;
mod quality;


pub use self::core::FleetAssigner;

// 供态势引擎复用的纯计算函数
pub(crate) use self::core::{detect_cluster, nearest_target_distance};
