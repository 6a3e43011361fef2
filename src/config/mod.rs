// ==========================================
// 星际舰队调度系统 - 配置层
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 9. 配置项全集
// ==========================================
// 职责: 调度参数档案管理
// 红线: 配置只读进入引擎,引擎不回写配置
// ==========================================

pub mod dispatch_profile;

// 重导出核心配置类型
pub use dispatch_profile::{defaults, DispatchParameters, DispatchProfile};

// TODO: 档案多级覆写 (全局档案 + 任务级覆写),等外部控制循环接入后补充
