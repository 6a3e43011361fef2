// ==========================================
// 星际舰队调度系统 - 选船引擎
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 4. Ship Selector
// 红线: 所有选船决策必须输出 reason (可解释性)
// 红线: 平局裁决确定性 (距离 → 舰船标识升序)
// ==========================================
// 职责: 为单一任务挑选唯一最合适的舰船
// 输入: 舰队快照 + 单目标航点 (+ 可选货物要求)
// 输出: SelectionResult (舰船 + 原因 + 距离)
// ==========================================

use crate::config::dispatch_profile::{defaults, DispatchParameters};
use crate::domain::dispatch::SelectionResult;
use crate::domain::fleet::{Ship, Waypoint};
use crate::domain::types::{NavStatus, SelectionReason};
use crate::engine::error::{EngineError, EngineResult};
use tracing::{debug, instrument};

// ==========================================
// ShipSelector - 选船引擎
// ==========================================
pub struct ShipSelector {
    // 无状态引擎,不需要注入依赖
}

impl ShipSelector {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 ShipSelector 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 挑选最适合任务的舰船 (货物优先策略)
    ///
    /// 规则 (依据 Dispatch_Engine_Specs 4.1):
    /// 1) 指定了 cargo_symbol 时,优先在已载有该货物 (units > 0) 的舰船中
    ///    选取距目标最近者,导航状态不限,原因为 has_required_cargo
    /// 2) 无载货候选 (或未指定货物) 时回退距离策略: 在全舰队中选最近者,
    ///    存在非航行中舰船时排除 IN_TRANSIT; 全员航行中则不排除,
    ///    原因为 closest_available
    /// 3) 平局裁决: 舰船标识升序
    ///
    /// # 参数
    /// - `ships`: 舰队快照
    /// - `target`: 目标航点 (必填)
    /// - `cargo_symbol`: 要求已载的货物标识 (可选)
    ///
    /// # 返回
    /// SelectionResult (舰船副本 + 原因 + 距离)
    ///
    /// # 错误
    /// - `MissingTarget`: 未提供目标
    /// - `EmptyFleet`: 舰队为空
    /// - `NoEligibleShip`: 过滤后无候选
    #[instrument(skip(self, ships, target), fields(
        ships_count = ships.len(),
        cargo_symbol = cargo_symbol.unwrap_or("-")
    ))]
    pub fn select_optimal_ship(
        &self,
        ships: &[Ship],
        target: Option<&Waypoint>,
        cargo_symbol: Option<&str>,
    ) -> EngineResult<SelectionResult> {
        let target = target.ok_or(EngineError::MissingTarget)?;
        if ships.is_empty() {
            return Err(EngineError::EmptyFleet);
        }

        // 步骤1: 货物过滤,已载有所需货物的舰船,不看导航状态
        if let Some(symbol) = cargo_symbol.filter(|s| !s.is_empty()) {
            let carriers: Vec<&Ship> = ships.iter().filter(|s| s.has_cargo(symbol)).collect();
            if !carriers.is_empty() {
                let chosen = closest_of(&carriers, target);
                debug!(
                    ship_symbol = %chosen.ship_symbol,
                    trade_symbol = symbol,
                    "按已载货物选船"
                );
                return Ok(build_result(chosen, target, SelectionReason::HasRequiredCargo));
            }
            debug!(trade_symbol = symbol, "无舰船载有所需货物,回退距离策略");
        }

        // 步骤2: 距离回退,存在非航行中舰船时排除 IN_TRANSIT
        let has_non_transit = ships.iter().any(|s| s.nav_status != NavStatus::InTransit);
        let candidates: Vec<&Ship> = ships
            .iter()
            .filter(|s| !has_non_transit || s.nav_status != NavStatus::InTransit)
            .collect();

        if candidates.is_empty() {
            return Err(EngineError::NoEligibleShip(
                "候选舰船均被过滤".to_string(),
            ));
        }

        let chosen = closest_of(&candidates, target);
        debug!(ship_symbol = %chosen.ship_symbol, "按最近距离选船");
        Ok(build_result(chosen, target, SelectionReason::ClosestAvailable))
    }

    /// 按纯距离挑选最近的舰船
    ///
    /// 规则 (依据 Dispatch_Engine_Specs 4.2):
    /// 1) exclude_in_transit = true 时剔除 IN_TRANSIT 舰船,全员航行中
    ///    则无候选,报 NoEligibleShip
    /// 2) 平局裁决: 舰船标识升序
    ///
    /// # 参数
    /// - `ships`: 舰队快照
    /// - `target`: 目标航点 (必填)
    /// - `exclude_in_transit`: 是否剔除航行中舰船
    ///
    /// # 返回
    /// SelectionResult (原因固定为 closest_available)
    #[instrument(skip(self, ships, target), fields(
        ships_count = ships.len(),
        exclude_in_transit
    ))]
    pub fn select_closest_ship_by_distance(
        &self,
        ships: &[Ship],
        target: Option<&Waypoint>,
        exclude_in_transit: bool,
    ) -> EngineResult<SelectionResult> {
        let target = target.ok_or(EngineError::MissingTarget)?;
        if ships.is_empty() {
            return Err(EngineError::EmptyFleet);
        }

        let candidates: Vec<&Ship> = ships
            .iter()
            .filter(|s| !exclude_in_transit || s.nav_status != NavStatus::InTransit)
            .collect();

        if candidates.is_empty() {
            return Err(EngineError::NoEligibleShip(
                "所有舰船均在航行中 (IN_TRANSIT)".to_string(),
            ));
        }

        let chosen = closest_of(&candidates, target);
        Ok(build_result(chosen, target, SelectionReason::ClosestAvailable))
    }

    /// 按参数化配置选最近舰船 (exclude_in_transit 未设置时回退内置默认值)
    pub fn select_closest_ship_with_parameters(
        &self,
        ships: &[Ship],
        target: Option<&Waypoint>,
        params: &DispatchParameters,
    ) -> EngineResult<SelectionResult> {
        let exclude_in_transit = params
            .exclude_in_transit
            .unwrap_or(defaults::EXCLUDE_IN_TRANSIT);
        self.select_closest_ship_by_distance(ships, target, exclude_in_transit)
    }
}

// ==========================================
// 内部函数
// ==========================================

/// 在非空候选集中选取距目标最近者,平局按舰船标识升序
fn closest_of<'a>(candidates: &[&'a Ship], target: &Waypoint) -> &'a Ship {
    let mut best = candidates[0];
    let mut best_distance = best.distance_to_waypoint(target);

    for &ship in &candidates[1..] {
        let distance = ship.distance_to_waypoint(target);
        match distance.total_cmp(&best_distance) {
            std::cmp::Ordering::Less => {
                best = ship;
                best_distance = distance;
            }
            std::cmp::Ordering::Equal if ship.ship_symbol < best.ship_symbol => {
                best = ship;
            }
            _ => {}
        }
    }

    best
}

/// 组装选船结果 (舰船快照副本)
fn build_result(ship: &Ship, target: &Waypoint, reason: SelectionReason) -> SelectionResult {
    SelectionResult {
        distance: ship.distance_to_waypoint(target),
        ship: ship.clone(),
        reason,
    }
}
