// ==========================================
// 星际舰队调度系统 - 引擎编排器
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 1.1 调度主流程
// 用途: 协调分配/选船/态势引擎的执行顺序
// ==========================================
// 红线: 编排器只组合引擎输出,不做 I/O,不下发移动指令
// 移动指令由外部控制循环通过导航协作方下发
// ==========================================

use crate::config::dispatch_profile::DispatchParameters;
use crate::domain::dispatch::{RebalancePlan, SelectionResult};
use crate::domain::fleet::{Ship, Waypoint};
use crate::engine::error::EngineResult;
use crate::engine::fleet_assigner::FleetAssigner;
use crate::engine::fleet_posture::FleetPostureEngine;
use crate::engine::ship_selector::ShipSelector;
use std::collections::HashSet;
use tracing::{debug, info};

// ==========================================
// DispatchOrchestrator - 引擎编排器
// ==========================================

pub struct DispatchOrchestrator {
    assigner: FleetAssigner,
    selector: ShipSelector,
    posture: FleetPostureEngine,
}

impl DispatchOrchestrator {
    /// 创建新的编排器实例
    pub fn new() -> Self {
        Self {
            assigner: FleetAssigner::new(),
            selector: ShipSelector::new(),
            posture: FleetPostureEngine::new(),
        }
    }

    /// 生成再平衡方案 (判定 → 指派 → 质量评分 → 态势快照)
    ///
    /// # 参数
    /// - `ships`: 舰队快照
    /// - `targets`: 目标航点列表
    /// - `params`: 调度参数
    ///
    /// # 返回
    /// RebalancePlan (needed=false 时指派列表为空)
    ///
    /// # 错误
    /// 透传引擎错误 (EmptyInput / NoTargets)
    pub fn plan_rebalance(
        &self,
        ships: &[Ship],
        targets: &[Waypoint],
        params: &DispatchParameters,
    ) -> EngineResult<RebalancePlan> {
        info!(
            ships_count = ships.len(),
            targets_count = targets.len(),
            "开始生成再平衡方案"
        );

        // ==========================================
        // 步骤1: 再平衡判定
        // ==========================================
        debug!("步骤1: 执行再平衡判定");
        let (needed, metrics) =
            self.assigner
                .is_rebalancing_needed_with_parameters(ships, targets, params)?;

        // ==========================================
        // 步骤2: 容量约束指派 (仅在需要再平衡时)
        // ==========================================
        let (assignments, unassigned_ships) = if needed {
            debug!("步骤2: 执行容量约束指派");
            let assignments = self.assigner.assign_ships_to_targets(ships, targets)?;

            let assigned: HashSet<&str> = assignments
                .iter()
                .map(|a| a.ship_symbol.as_str())
                .collect();
            let unassigned: Vec<String> = ships
                .iter()
                .filter(|s| !assigned.contains(s.ship_symbol.as_str()))
                .map(|s| s.ship_symbol.clone())
                .collect();

            (assignments, unassigned)
        } else {
            debug!("步骤2: 分布达标,跳过指派");
            (Vec::new(), Vec::new())
        };

        // ==========================================
        // 步骤3: 分布质量评分 (空舰队时无定义)
        // ==========================================
        debug!("步骤3: 计算分布质量评分");
        let quality = if ships.is_empty() {
            None
        } else {
            Some(
                self.assigner
                    .calculate_distribution_quality_with_parameters(ships, targets, params)?,
            )
        };

        // ==========================================
        // 步骤4: 生成态势快照
        // ==========================================
        debug!("步骤4: 生成态势快照");
        let posture = self.posture.generate_snapshot(ships, targets, params);

        info!(
            needed,
            assigned_count = assignments.len(),
            unassigned_count = unassigned_ships.len(),
            posture_level = %posture.posture_level,
            "再平衡方案生成完成"
        );

        Ok(RebalancePlan {
            needed,
            metrics,
            quality,
            assignments,
            unassigned_ships,
            posture,
        })
    }

    /// 为单一任务选船 (委托选船引擎)
    ///
    /// # 参数
    /// - `ships`: 舰队快照
    /// - `target`: 目标航点
    /// - `cargo_symbol`: 要求已载的货物标识 (可选)
    pub fn select_for_task(
        &self,
        ships: &[Ship],
        target: Option<&Waypoint>,
        cargo_symbol: Option<&str>,
    ) -> EngineResult<SelectionResult> {
        self.selector.select_optimal_ship(ships, target, cargo_symbol)
    }
}

