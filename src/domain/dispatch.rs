// ==========================================
// 星际舰队调度系统 - 调度值对象
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 3/4/7 引擎输出定义
// ==========================================
// 红线: 全部为瞬态值对象,每次调用新建,调用方持有
// 红线: 错误与结果互斥,不返回部分结果
// ==========================================

use crate::domain::fleet::Ship;
use crate::domain::types::{PostureLevel, SelectionReason};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Assignment - 舰船-目标配对
// ==========================================
// 用途: 匹配算法输出,由外部导航协作方转为移动指令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub ship_symbol: String,   // 被指派舰船
    pub target_symbol: String, // 目标航点
    pub distance: f64,         // 配对距离 (坐标单位,供审计)
}

// ==========================================
// DistributionMetrics - 分布度量
// ==========================================
// 用途: 再平衡判定的诊断输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionMetrics {
    pub average_distance: f64,        // 各舰到最近目标距离的均值
    pub is_clustered: bool,           // 是否存在多数集群 (> 50%)
    pub clustered_at: Option<String>, // 集群所在航点 (仅 is_clustered 时有值)
}

// ==========================================
// SelectionResult - 选船结果
// ==========================================
// 红线: reason 必填 (可解释性)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResult {
    pub ship: Ship,              // 选中的舰船 (快照副本)
    pub reason: SelectionReason, // 选择原因
    pub distance: f64,           // 到目标的距离 (坐标单位)
}

// ==========================================
// RebalancePlan - 再平衡方案
// ==========================================
// 用途: 编排器输出,供外部控制循环下发移动指令
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebalancePlan {
    pub needed: bool,                    // 是否需要再平衡
    pub metrics: DistributionMetrics,    // 分布度量
    pub quality: Option<f64>,            // 分布质量评分 (空舰队时无定义)
    pub assignments: Vec<Assignment>,    // 指派列表 (needed=false 时为空)
    pub unassigned_ships: Vec<String>,   // 容量耗尽后未指派的舰船
    pub posture: FleetPostureSnapshot,   // 同步生成的态势快照
}

// ==========================================
// FleetPostureSnapshot - 舰队态势快照
// ==========================================
// 用途: 驾驶舱指标,只读诊断数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetPostureSnapshot {
    pub snapshot_id: String,            // 快照ID

    // ===== 舰队规模 =====
    pub total_ships: i64,               // 舰船总数
    pub docked_count: i64,              // 停靠数
    pub in_orbit_count: i64,            // 在轨数
    pub in_transit_count: i64,          // 航行中数

    // ===== 货舱指标 =====
    pub cargo_units_total: i64,         // 全舰队已用货舱单位
    pub cargo_capacity_total: i64,      // 全舰队货舱容量
    pub cargo_utilization: f64,         // 货舱利用率

    // ===== 燃料指标 =====
    pub average_fuel_ratio: f64,        // 平均燃料比例

    // ===== 分布指标 =====
    pub average_distance: Option<f64>,  // 到最近目标的平均距离 (无目标时为 None)
    pub is_clustered: bool,             // 是否存在多数集群
    pub clustered_at: Option<String>,   // 集群所在航点

    // ===== 态势等级 =====
    pub posture_level: PostureLevel,    // 态势等级
    pub posture_reason: String,         // 态势原因 (JSON, 可解释性)

    // ===== 元数据 =====
    pub generated_at: DateTime<Utc>,    // 生成时间
}

// ==========================================
// Trait: PostureAssessment
// ==========================================
// 用途: 态势快照的评估逻辑接口
pub trait PostureAssessment {
    /// 返回态势等级与原因
    fn assess_posture_level(&self) -> (PostureLevel, String);

    /// 判断是否比另一快照更危险
    fn is_worse_than(&self, other: &FleetPostureSnapshot) -> bool;

    /// 是否需要人工关注 (Orange 及以上)
    fn needs_attention(&self) -> bool;
}

impl PostureAssessment for FleetPostureSnapshot {
    /// 返回态势等级与原因 (创建时已计算,直接返回)
    fn assess_posture_level(&self) -> (PostureLevel, String) {
        (self.posture_level, self.posture_reason.clone())
    }

    /// 判断是否比另一快照更危险
    ///
    /// # 规则
    /// - 态势等级高者更危险 (RED > ORANGE > YELLOW > GREEN)
    /// - 等级相同时,平均距离大者更危险 (缺失按 0 计)
    fn is_worse_than(&self, other: &FleetPostureSnapshot) -> bool {
        if self.posture_level != other.posture_level {
            return self.posture_level > other.posture_level;
        }
        self.average_distance.unwrap_or(0.0) > other.average_distance.unwrap_or(0.0)
    }

    fn needs_attention(&self) -> bool {
        self.posture_level >= PostureLevel::Orange
    }
}
