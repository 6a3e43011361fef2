// ==========================================
// 星际舰队调度系统 - 舰队态势引擎
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 7. Fleet Posture Engine
// 依据: Fleet_Dev_Master_Spec.md - PART G 运行判定
// ==========================================
// 职责: 驾驶舱指标生成
// 输入: 舰队快照 + 目标航点列表 + 调度参数
// 输出: FleetPostureSnapshot (态势快照)
// ==========================================

use crate::config::dispatch_profile::{defaults, DispatchParameters};
use crate::domain::dispatch::FleetPostureSnapshot;
use crate::domain::fleet::{Ship, Waypoint};
use crate::domain::types::{NavStatus, PostureLevel};
use crate::engine::fleet_assigner::{detect_cluster, nearest_target_distance};
use chrono::Utc;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

// ==========================================
// FleetPostureEngine - 舰队态势引擎
// ==========================================
pub struct FleetPostureEngine {
    // 无状态引擎,不需要注入依赖
    // 快照持久化由调用方处理
}

impl FleetPostureEngine {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 FleetPostureEngine 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成舰队态势快照
    ///
    /// # 参数
    /// - `ships`: 舰队快照
    /// - `targets`: 目标航点列表 (可为空,分布指标将缺省)
    /// - `params`: 调度参数 (阈值来源)
    ///
    /// # 返回
    /// FleetPostureSnapshot 态势快照
    #[instrument(skip(self, ships, targets, params), fields(
        ships_count = ships.len(),
        targets_count = targets.len()
    ))]
    pub fn generate_snapshot(
        &self,
        ships: &[Ship],
        targets: &[Waypoint],
        params: &DispatchParameters,
    ) -> FleetPostureSnapshot {
        // 1. 舰队规模统计
        let (docked_count, in_orbit_count, in_transit_count) = self.count_by_status(ships);

        // 2. 货舱指标
        let (cargo_units_total, cargo_capacity_total, cargo_utilization) =
            self.calculate_cargo_metrics(ships);

        // 3. 燃料指标
        let average_fuel_ratio = self.calculate_average_fuel_ratio(ships);

        // 4. 分布指标
        let average_distance = if targets.is_empty() || ships.is_empty() {
            None
        } else {
            Some(
                ships
                    .iter()
                    .map(|ship| nearest_target_distance(ship, targets))
                    .sum::<f64>()
                    / ships.len() as f64,
            )
        };
        let (is_clustered, clustered_at) = detect_cluster(ships);

        // 5. 评估态势等级
        let (posture_level, posture_reason) = self.assess_posture_level(
            ships.len() as i64,
            in_transit_count,
            cargo_utilization,
            average_fuel_ratio,
            average_distance,
            is_clustered,
            params,
        );

        // 6. 构造快照
        FleetPostureSnapshot {
            snapshot_id: Uuid::new_v4().to_string(),
            total_ships: ships.len() as i64,
            docked_count,
            in_orbit_count,
            in_transit_count,
            cargo_units_total,
            cargo_capacity_total,
            cargo_utilization,
            average_fuel_ratio,
            average_distance,
            is_clustered,
            clustered_at,
            posture_level,
            posture_reason,
            generated_at: Utc::now(),
        }
    }

    // ==========================================
    // 指标计算
    // ==========================================

    /// 按导航状态统计 (停靠, 在轨, 航行中)
    fn count_by_status(&self, ships: &[Ship]) -> (i64, i64, i64) {
        let mut docked = 0;
        let mut in_orbit = 0;
        let mut in_transit = 0;
        for ship in ships {
            match ship.nav_status {
                NavStatus::Docked => docked += 1,
                NavStatus::InOrbit => in_orbit += 1,
                NavStatus::InTransit => in_transit += 1,
            }
        }
        (docked, in_orbit, in_transit)
    }

    /// 全舰队货舱指标 (已用单位, 总容量, 利用率)
    fn calculate_cargo_metrics(&self, ships: &[Ship]) -> (i64, i64, f64) {
        let units: i64 = ships.iter().map(|s| s.cargo.units).sum();
        let capacity: i64 = ships.iter().map(|s| s.cargo.capacity).sum();
        let utilization = if capacity > 0 {
            units as f64 / capacity as f64
        } else {
            0.0
        };
        (units, capacity, utilization)
    }

    /// 平均燃料比例 (空舰队按满燃料计,避免误报)
    fn calculate_average_fuel_ratio(&self, ships: &[Ship]) -> f64 {
        if ships.is_empty() {
            return 1.0;
        }
        ships.iter().map(|s| s.fuel_ratio()).sum::<f64>() / ships.len() as f64
    }

    // ==========================================
    // 态势判定
    // ==========================================

    /// 评估态势等级
    ///
    /// 判定规则 (级联取最高,全部因素写入 reason):
    /// - RED:    全员航行中 / 平均燃料低于临界值
    /// - ORANGE: 货舱利用率超饱和阈值 / 集群且平均距离超再平衡阈值
    /// - YELLOW: 舰队为空 / 单项退化 (集群、距离超阈值、燃料偏低)
    /// - GREEN:  以上均未触发
    #[allow(clippy::too_many_arguments)]
    fn assess_posture_level(
        &self,
        total_ships: i64,
        in_transit_count: i64,
        cargo_utilization: f64,
        average_fuel_ratio: f64,
        average_distance: Option<f64>,
        is_clustered: bool,
        params: &DispatchParameters,
    ) -> (PostureLevel, String) {
        let distance_threshold = params
            .distance_threshold
            .unwrap_or(defaults::DISTANCE_THRESHOLD);
        let fuel_critical = params
            .fuel_critical_ratio
            .unwrap_or(defaults::FUEL_CRITICAL_RATIO);
        let cargo_saturation = params
            .cargo_saturation_ratio
            .unwrap_or(defaults::CARGO_SATURATION_RATIO);

        let mut level = PostureLevel::Green;
        let mut factors: Vec<String> = Vec::new();
        let raise = |level_ref: &mut PostureLevel, at_least: PostureLevel| {
            if *level_ref < at_least {
                *level_ref = at_least;
            }
        };

        if total_ships == 0 {
            factors.push("舰队为空,无在役舰船".to_string());
            raise(&mut level, PostureLevel::Yellow);
        } else {
            if in_transit_count == total_ships {
                factors.push("全员航行中,无可调度舰船".to_string());
                raise(&mut level, PostureLevel::Red);
            }
            if average_fuel_ratio < fuel_critical {
                factors.push(format!(
                    "平均燃料比例 {:.2} 低于临界值 {:.2}",
                    average_fuel_ratio, fuel_critical
                ));
                raise(&mut level, PostureLevel::Red);
            } else if average_fuel_ratio < fuel_critical * 2.0 {
                factors.push(format!("平均燃料比例 {:.2} 偏低", average_fuel_ratio));
                raise(&mut level, PostureLevel::Yellow);
            }
            if cargo_utilization > cargo_saturation {
                factors.push(format!(
                    "货舱利用率 {:.2} 超出饱和阈值 {:.2}",
                    cargo_utilization, cargo_saturation
                ));
                raise(&mut level, PostureLevel::Orange);
            }
            if let Some(distance) = average_distance {
                if distance > distance_threshold {
                    if is_clustered {
                        factors.push(format!(
                            "舰队集群且平均距离 {:.1} 超出阈值 {:.1}",
                            distance, distance_threshold
                        ));
                        raise(&mut level, PostureLevel::Orange);
                    } else {
                        factors.push(format!(
                            "平均距离 {:.1} 超出阈值 {:.1}",
                            distance, distance_threshold
                        ));
                        raise(&mut level, PostureLevel::Yellow);
                    }
                }
            }
            if is_clustered && level < PostureLevel::Yellow {
                factors.push("多数舰船集群于同一航点".to_string());
                raise(&mut level, PostureLevel::Yellow);
            }
        }

        if factors.is_empty() {
            factors.push("各项指标正常".to_string());
        }

        let reason = json!({
            "level": level.to_string(),
            "factors": factors,
        })
        .to_string();

        (level, reason)
    }
}

// ==========================================
// 单元测试
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fleet::{Cargo, CargoItem};
    use crate::domain::spatial::Position;

    fn test_ship(
        symbol: &str,
        waypoint: &str,
        x: f64,
        status: NavStatus,
        fuel: i64,
        cargo_units: i64,
    ) -> Ship {
        Ship {
            ship_symbol: symbol.to_string(),
            player_id: "PLAYER-1".to_string(),
            waypoint_symbol: waypoint.to_string(),
            position: Position::new(x, 0.0),
            nav_status: status,
            fuel_current: fuel,
            fuel_capacity: 100,
            cargo: Cargo {
                capacity: 100,
                units: cargo_units,
                items: vec![CargoItem {
                    trade_symbol: "IRON_ORE".to_string(),
                    units: cargo_units,
                }],
            },
            engine_speed: 30.0,
        }
    }

    #[test]
    fn test_healthy_fleet_is_green() {
        let engine = FleetPostureEngine::new();
        let ships = vec![
            test_ship("SHIP-1", "X1-A1", 0.0, NavStatus::Docked, 90, 10),
            test_ship("SHIP-2", "X1-B1", 10.0, NavStatus::InOrbit, 80, 20),
        ];
        let targets = vec![
            Waypoint::new("X1-A1", 0.0, 0.0),
            Waypoint::new("X1-B1", 10.0, 0.0),
        ];

        let snapshot =
            engine.generate_snapshot(&ships, &targets, &DispatchParameters::default());

        assert_eq!(snapshot.posture_level, PostureLevel::Green);
        assert_eq!(snapshot.total_ships, 2);
        assert_eq!(snapshot.docked_count, 1);
        assert_eq!(snapshot.in_orbit_count, 1);
        assert_eq!(snapshot.average_distance, Some(0.0));
    }

    #[test]
    fn test_all_in_transit_is_red() {
        let engine = FleetPostureEngine::new();
        let ships = vec![
            test_ship("SHIP-1", "X1-A1", 0.0, NavStatus::InTransit, 90, 0),
            test_ship("SHIP-2", "X1-A1", 0.0, NavStatus::InTransit, 90, 0),
        ];

        let snapshot = engine.generate_snapshot(&ships, &[], &DispatchParameters::default());

        assert_eq!(snapshot.posture_level, PostureLevel::Red);
        assert!(snapshot.posture_reason.contains("全员航行中"));
        // 无目标时分布指标缺省
        assert!(snapshot.average_distance.is_none());
    }

    #[test]
    fn test_critical_fuel_is_red() {
        let engine = FleetPostureEngine::new();
        let ships = vec![
            test_ship("SHIP-1", "X1-A1", 0.0, NavStatus::Docked, 5, 0),
            test_ship("SHIP-2", "X1-B1", 10.0, NavStatus::Docked, 10, 0),
        ];

        let snapshot = engine.generate_snapshot(&ships, &[], &DispatchParameters::default());

        assert_eq!(snapshot.posture_level, PostureLevel::Red);
        assert!(snapshot.posture_reason.contains("低于临界值"));
    }

    #[test]
    fn test_saturated_cargo_is_orange() {
        let engine = FleetPostureEngine::new();
        let ships = vec![
            test_ship("SHIP-1", "X1-A1", 0.0, NavStatus::Docked, 90, 95),
            test_ship("SHIP-2", "X1-B1", 10.0, NavStatus::InOrbit, 90, 95),
        ];

        let snapshot = engine.generate_snapshot(&ships, &[], &DispatchParameters::default());

        assert_eq!(snapshot.posture_level, PostureLevel::Orange);
        assert!((snapshot.cargo_utilization - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_empty_fleet_is_yellow() {
        let engine = FleetPostureEngine::new();

        let snapshot = engine.generate_snapshot(&[], &[], &DispatchParameters::default());

        assert_eq!(snapshot.posture_level, PostureLevel::Yellow);
        assert_eq!(snapshot.total_ships, 0);
        assert!(snapshot.posture_reason.contains("舰队为空"));
    }
}
