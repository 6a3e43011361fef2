use crate::config::dispatch_profile::{defaults, DispatchParameters};
use crate::domain::dispatch::{Assignment, DistributionMetrics};
use crate::domain::fleet::{Ship, Waypoint};
use crate::engine::error::{EngineError, EngineResult};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// FleetAssigner - 舰队分配引擎
// ==========================================
pub struct FleetAssigner {
    // 无状态引擎,不需要注入依赖
}

impl FleetAssigner {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 FleetAssigner 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法: 再平衡判定
    // ==========================================

    /// 判定舰队当前分布是否需要再平衡
    ///
    /// 规则 (依据 Dispatch_Engine_Specs 3.1):
    /// 1) 各舰到最近目标距离的均值 > distance_threshold 时需要再平衡
    /// 2) 集群检测 (多数舰船同航点) 仅作诊断输出,不单独触发再平衡
    ///    (集群若紧邻目标时均值距离低,结果仍为不需要)
    /// 3) 舰队为空但目标非空: 无可移动对象,均值按 0 计,不需要再平衡
    ///
    /// # 参数
    /// - `ships`: 舰队快照 (可为空)
    /// - `targets`: 目标航点列表 (可为空)
    /// - `distance_threshold`: 距离阈值 (>= 0)
    ///
    /// # 返回
    /// (是否需要再平衡, 分布度量)
    ///
    /// # 错误
    /// - `EmptyInput`: 舰队与目标均为空
    /// - `NoTargets`: 仅目标为空 (无法计算最近目标距离)
    #[instrument(skip(self, ships, targets), fields(
        ships_count = ships.len(),
        targets_count = targets.len(),
        distance_threshold
    ))]
    pub fn is_rebalancing_needed(
        &self,
        ships: &[Ship],
        targets: &[Waypoint],
        distance_threshold: f64,
    ) -> EngineResult<(bool, DistributionMetrics)> {
        if ships.is_empty() && targets.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        if targets.is_empty() {
            return Err(EngineError::NoTargets);
        }

        let metrics = self.distribution_metrics(ships, targets);
        let needed = metrics.average_distance > distance_threshold;

        debug!(
            average_distance = metrics.average_distance,
            is_clustered = metrics.is_clustered,
            needed,
            "再平衡判定完成"
        );

        Ok((needed, metrics))
    }

    /// 按参数化配置判定再平衡 (阈值未设置时回退内置默认值)
    pub fn is_rebalancing_needed_with_parameters(
        &self,
        ships: &[Ship],
        targets: &[Waypoint],
        params: &DispatchParameters,
    ) -> EngineResult<(bool, DistributionMetrics)> {
        let threshold = params
            .distance_threshold
            .unwrap_or(defaults::DISTANCE_THRESHOLD);
        self.is_rebalancing_needed(ships, targets, threshold)
    }

    // ==========================================
    // 核心方法: 容量约束指派
    // ==========================================

    /// 将舰船指派到目标航点 (容量约束下的贪心最近配对)
    ///
    /// 规则 (依据 Dispatch_Engine_Specs 3.2):
    /// 1) 单目标容量 = ceil(舰船数 / 目标数), 硬约束
    /// 2) 反复选取全局距离最小的 (未指派舰船, 有余量目标) 配对
    /// 3) 平局裁决: 距离 → 舰船标识升序 → 目标标识升序 (确定性)
    /// 4) 全部目标满容后剩余舰船保持未指派,合法结果,非错误
    ///
    /// # 参数
    /// - `ships`: 舰队快照
    /// - `targets`: 目标航点列表
    ///
    /// # 返回
    /// 指派列表 (目标/舰队为空时为空列表,不报错)
    #[instrument(skip(self, ships, targets), fields(
        ships_count = ships.len(),
        targets_count = targets.len()
    ))]
    pub fn assign_ships_to_targets(
        &self,
        ships: &[Ship],
        targets: &[Waypoint],
    ) -> EngineResult<Vec<Assignment>> {
        if targets.is_empty() || ships.is_empty() {
            return Ok(Vec::new());
        }

        // 单目标容量: ceil(n / m)
        let per_target_capacity = (ships.len() + targets.len() - 1) / targets.len();

        // 枚举全部配对,按 (距离, 舰船标识, 目标标识) 排序。
        // 升序扫描贪心拾取与"反复取全局最小合法配对"等价:
        // 移除已用配对不改变剩余配对的顺序。
        let mut pairs: Vec<(f64, usize, usize)> =
            Vec::with_capacity(ships.len() * targets.len());
        for (ship_idx, ship) in ships.iter().enumerate() {
            for (target_idx, target) in targets.iter().enumerate() {
                pairs.push((ship.distance_to_waypoint(target), ship_idx, target_idx));
            }
        }
        pairs.sort_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then_with(|| ships[a.1].ship_symbol.cmp(&ships[b.1].ship_symbol))
                .then_with(|| {
                    targets[a.2]
                        .waypoint_symbol
                        .cmp(&targets[b.2].waypoint_symbol)
                })
        });

        let mut remaining_capacity = vec![per_target_capacity; targets.len()];
        let mut ship_assigned = vec![false; ships.len()];
        let mut assignments = Vec::with_capacity(ships.len());

        for (distance, ship_idx, target_idx) in pairs {
            if ship_assigned[ship_idx] || remaining_capacity[target_idx] == 0 {
                continue;
            }

            ship_assigned[ship_idx] = true;
            remaining_capacity[target_idx] -= 1;
            assignments.push(Assignment {
                ship_symbol: ships[ship_idx].ship_symbol.clone(),
                target_symbol: targets[target_idx].waypoint_symbol.clone(),
                distance,
            });

            if assignments.len() == ships.len() {
                break;
            }
        }

        debug!(
            assigned_count = assignments.len(),
            unassigned_count = ships.len() - assignments.len(),
            per_target_capacity,
            "指派完成"
        );

        Ok(assignments)
    }

    // ==========================================
    // 核心方法: 分布质量评分
    // ==========================================

    /// 计算舰队分布质量评分 (内置默认权重)
    ///
    /// # 返回
    /// 质量评分 [0, 1]: 距离越近越高,指派越均衡越高
    ///
    /// # 错误
    /// - `NoTargets`: 目标列表为空
    /// - `EmptyFleet`: 舰队为空
    pub fn calculate_distribution_quality(
        &self,
        ships: &[Ship],
        targets: &[Waypoint],
    ) -> EngineResult<f64> {
        self.calculate_distribution_quality_with_parameters(
            ships,
            targets,
            &DispatchParameters::default(),
        )
    }

    /// 按参数化权重计算分布质量评分
    ///
    /// 评分 (依据 Dispatch_Engine_Specs 3.3):
    /// quality = w_d * distance_score + w_b * balance_score
    /// - distance_score = 1 / (1 + 平均最近目标距离)
    /// - balance_score  = 1 / (1 + 各目标指派数的变异系数)
    /// 两项均单调、有界,整体为输入的纯函数
    #[instrument(skip(self, ships, targets, params), fields(
        ships_count = ships.len(),
        targets_count = targets.len()
    ))]
    pub fn calculate_distribution_quality_with_parameters(
        &self,
        ships: &[Ship],
        targets: &[Waypoint],
        params: &DispatchParameters,
    ) -> EngineResult<f64> {
        if targets.is_empty() {
            return Err(EngineError::NoTargets);
        }
        if ships.is_empty() {
            return Err(EngineError::EmptyFleet);
        }

        let average_distance = ships
            .iter()
            .map(|ship| nearest_target_distance(ship, targets))
            .sum::<f64>()
            / ships.len() as f64;

        // 按实际指派结果统计各目标负载
        let assignments = self.assign_ships_to_targets(ships, targets)?;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for assignment in &assignments {
            *counts.entry(assignment.target_symbol.as_str()).or_insert(0) += 1;
        }
        let per_target_counts: Vec<usize> = targets
            .iter()
            .map(|t| counts.get(t.waypoint_symbol.as_str()).copied().unwrap_or(0))
            .collect();

        let distance_weight = params.distance_weight.unwrap_or(defaults::DISTANCE_WEIGHT);
        let balance_weight = params.balance_weight.unwrap_or(defaults::BALANCE_WEIGHT);

        Ok(super::quality::compute_quality_score(
            average_distance,
            &per_target_counts,
            distance_weight,
            balance_weight,
        ))
    }

    // ==========================================
    // 内部方法
    // ==========================================

    /// 计算分布度量 (调用方保证 targets 非空)
    fn distribution_metrics(&self, ships: &[Ship], targets: &[Waypoint]) -> DistributionMetrics {
        let average_distance = if ships.is_empty() {
            0.0
        } else {
            ships
                .iter()
                .map(|ship| nearest_target_distance(ship, targets))
                .sum::<f64>()
                / ships.len() as f64
        };

        let (is_clustered, clustered_at) = detect_cluster(ships);

        DistributionMetrics {
            average_distance,
            is_clustered,
            clustered_at,
        }
    }
}

// ==========================================
// 纯计算函数 (供态势引擎复用)
// ==========================================

/// 舰船到最近目标的距离 (调用方保证 targets 非空)
pub(crate) fn nearest_target_distance(ship: &Ship, targets: &[Waypoint]) -> f64 {
    targets
        .iter()
        .map(|target| ship.distance_to_waypoint(target))
        .fold(f64::INFINITY, f64::min)
}

/// 集群检测: 多数舰船 (> 50%) 位于同一航点
///
/// # 返回
/// (是否集群, 集群航点标识)
/// 单舰或空舰队不构成集群; 计数并列时取标识最小的组 (确定性)
pub(crate) fn detect_cluster(ships: &[Ship]) -> (bool, Option<String>) {
    if ships.len() <= 1 {
        return (false, None);
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for ship in ships {
        *counts.entry(ship.waypoint_symbol.as_str()).or_insert(0) += 1;
    }

    let mut largest: Option<(&str, usize)> = None;
    for (symbol, count) in counts {
        largest = match largest {
            None => Some((symbol, count)),
            Some((best_symbol, best_count)) => match count.cmp(&best_count) {
                Ordering::Greater => Some((symbol, count)),
                Ordering::Equal if symbol < best_symbol => Some((symbol, count)),
                _ => Some((best_symbol, best_count)),
            },
        };
    }

    match largest {
        // 严格多数才算集群
        Some((symbol, count)) if count * 2 > ships.len() => (true, Some(symbol.to_string())),
        _ => (false, None),
    }
}
