// ==========================================
// 星际舰队调度系统 - 引擎层
// ==========================================
// 依据: Fleet_Dev_Master_Spec.md - PART D 引擎体系
// 依据: Dispatch_Engine_Specs_v0.2.md - 1.2 模块拆分
// ==========================================
// 职责: 实现调度决策引擎,不做任何 I/O
// 红线: 引擎无状态,不修改调用方快照,所有规则必须输出 reason
// 红线: 同一输入必须产出逐字节一致的输出 (确定性)
// ==========================================

pub mod error;
pub mod fleet_assigner;
pub mod fleet_posture;
pub mod orchestrator;
pub mod ship_selector;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use fleet_assigner::FleetAssigner;
pub use fleet_posture::FleetPostureEngine;
pub use orchestrator::DispatchOrchestrator;
pub use ship_selector::ShipSelector;
