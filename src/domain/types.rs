// ==========================================
// 星际舰队调度系统 - 领域类型定义
// ==========================================
// 依据: Fleet_Dev_Master_Spec.md - PART C 数据与状态体系
// 依据: Dispatch_Engine_Specs_v0.2.md - 0.1 导航状态全集
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 导航状态 (Navigation Status)
// ==========================================
// 红线: 封闭枚举,不允许开放字典
// 状态由外部导航指令处理器维护,引擎只读
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavStatus {
    Docked,    // 停靠中
    InOrbit,   // 在轨
    InTransit, // 航行中
}

impl fmt::Display for NavStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavStatus::Docked => write!(f, "DOCKED"),
            NavStatus::InOrbit => write!(f, "IN_ORBIT"),
            NavStatus::InTransit => write!(f, "IN_TRANSIT"),
        }
    }
}

// ==========================================
// 选船原因 (Selection Reason)
// ==========================================
// 红线: 所有选船决策必须输出 reason (可解释性)
// 序列化格式: snake_case (与调用方协议一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    HasRequiredCargo, // 已载有所需货物
    ClosestAvailable, // 距离最近的可用舰船
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionReason::HasRequiredCargo => write!(f, "has_required_cargo"),
            SelectionReason::ClosestAvailable => write!(f, "closest_available"),
        }
    }
}

// ==========================================
// 态势等级 (Posture Level)
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 7. Fleet Posture Engine
// 顺序: Green < Yellow < Orange < Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostureLevel {
    Green,  // 正常
    Yellow, // 关注
    Orange, // 紧张
    Red,    // 危险
}

impl fmt::Display for PostureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostureLevel::Green => write!(f, "GREEN"),
            PostureLevel::Yellow => write!(f, "YELLOW"),
            PostureLevel::Orange => write!(f, "ORANGE"),
            PostureLevel::Red => write!(f, "RED"),
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
