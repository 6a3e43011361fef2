// ==========================================
// 星际舰队调度系统 - 引擎层错误类型
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 8. 错误分类
// 工具: thiserror 派生宏
// ==========================================
// 红线: 错误与结果互斥,引擎内部不重试
// 红线: 错误信息必须包含显式原因 (可解释性)
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 输入边界错误 =====
    #[error("空舰队: 没有可供评估的舰船")]
    EmptyFleet,

    #[error("无目标航点: 目标列表为空,无法计算最近目标距离")]
    NoTargets,

    #[error("缺少目标航点: 该操作必须提供单个目标")]
    MissingTarget,

    #[error("输入为空: 舰队与目标航点均为空,无可评估对象")]
    EmptyInput,

    // ===== 候选过滤错误 =====
    #[error("无合格舰船: {0}")]
    NoEligibleShip(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
