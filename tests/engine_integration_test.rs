// ==========================================
// 引擎间集成测试
// ==========================================
// 职责: 验证多个引擎之间的协作和数据流转
// 场景: FleetAssigner → FleetPostureEngine → DispatchOrchestrator 组合测试
// ==========================================

mod helpers;

use fleet_dispatch::config::DispatchParameters;
use fleet_dispatch::domain::fleet::{Ship, Waypoint};
use fleet_dispatch::domain::types::{NavStatus, PostureLevel, SelectionReason};
use fleet_dispatch::domain::PostureAssessment;
use fleet_dispatch::engine::{DispatchOrchestrator, EngineError, FleetAssigner};
use helpers::test_data_builder::{make_waypoint, ShipBuilder};

// ==========================================
// 测试辅助函数
// ==========================================

/// 集群在原点的舰队 (远离目标)
fn clustered_fleet(n: usize) -> Vec<Ship> {
    (1..=n)
        .map(|i| {
            ShipBuilder::new(&format!("SHIP-{}", i))
                .at("X1-A1", 0.0, 0.0)
                .build()
        })
        .collect()
}

fn far_targets() -> Vec<Waypoint> {
    vec![
        make_waypoint("X1-T1", 300.0, 0.0),
        make_waypoint("X1-T2", 0.0, 300.0),
    ]
}

// ==========================================
// 再平衡方案全流程
// ==========================================

#[test]
fn test_plan_rebalance_full_flow_when_needed() {
    let orchestrator = DispatchOrchestrator::new();
    let ships = clustered_fleet(4);
    let targets = far_targets();
    let params = DispatchParameters::default();

    let plan = orchestrator
        .plan_rebalance(&ships, &targets, &params)
        .unwrap();

    // 判定: 集群且远离目标
    assert!(plan.needed);
    assert!(plan.metrics.is_clustered);
    assert_eq!(plan.metrics.clustered_at.as_deref(), Some("X1-A1"));
    assert!((plan.metrics.average_distance - 300.0).abs() < 1e-9);

    // 指派: 全员落位且均衡 (容量 ceil(4/2)=2)
    assert_eq!(plan.assignments.len(), 4);
    assert!(plan.unassigned_ships.is_empty());
    for target in &targets {
        let count = plan
            .assignments
            .iter()
            .filter(|a| a.target_symbol == target.waypoint_symbol)
            .count();
        assert_eq!(count, 2);
    }

    // 质量与态势同步产出
    let quality = plan.quality.unwrap();
    assert!((0.0..=1.0).contains(&quality));
    assert_eq!(plan.posture.total_ships, 4);
    assert!(plan.posture.is_clustered);
    // 集群 + 距离超阈值 => 至少 Orange,需要人工关注
    assert!(plan.posture.needs_attention());
}

#[test]
fn test_plan_rebalance_skips_assignment_when_not_needed() {
    let orchestrator = DispatchOrchestrator::new();
    let ships = vec![
        ShipBuilder::new("SHIP-1").at("X1-T1", 0.0, 0.0).build(),
        ShipBuilder::new("SHIP-2").at("X1-T2", 50.0, 0.0).build(),
    ];
    let targets = vec![
        make_waypoint("X1-T1", 0.0, 0.0),
        make_waypoint("X1-T2", 50.0, 0.0),
    ];

    let plan = orchestrator
        .plan_rebalance(&ships, &targets, &DispatchParameters::default())
        .unwrap();

    assert!(!plan.needed);
    assert!(plan.assignments.is_empty());
    assert!(plan.unassigned_ships.is_empty());
    // 贴靠目标且均衡,满分
    assert!((plan.quality.unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(plan.posture.posture_level, PostureLevel::Green);
}

#[test]
fn test_plan_rebalance_propagates_engine_errors() {
    let orchestrator = DispatchOrchestrator::new();
    let ships = clustered_fleet(2);

    assert!(matches!(
        orchestrator.plan_rebalance(&[], &[], &DispatchParameters::default()),
        Err(EngineError::EmptyInput)
    ));
    assert!(matches!(
        orchestrator.plan_rebalance(&ships, &[], &DispatchParameters::default()),
        Err(EngineError::NoTargets)
    ));
}

#[test]
fn test_plan_rebalance_with_empty_fleet_has_no_quality() {
    let orchestrator = DispatchOrchestrator::new();
    let targets = far_targets();

    let plan = orchestrator
        .plan_rebalance(&[], &targets, &DispatchParameters::default())
        .unwrap();

    assert!(!plan.needed);
    assert!(plan.quality.is_none());
    assert!(plan.assignments.is_empty());
    assert_eq!(plan.posture.total_ships, 0);
}

#[test]
fn test_plan_rebalance_deterministic_decision_outputs() {
    // 快照ID/时间戳之外的决策输出必须逐次一致
    let orchestrator = DispatchOrchestrator::new();
    let ships = clustered_fleet(5);
    let targets = far_targets();
    let params = DispatchParameters::default();

    let first = orchestrator
        .plan_rebalance(&ships, &targets, &params)
        .unwrap();
    for _ in 0..5 {
        let again = orchestrator
            .plan_rebalance(&ships, &targets, &params)
            .unwrap();
        assert_eq!(first.needed, again.needed);
        assert_eq!(first.metrics, again.metrics);
        assert_eq!(first.assignments, again.assignments);
        assert_eq!(first.unassigned_ships, again.unassigned_ships);
        assert_eq!(
            first.quality.unwrap().to_bits(),
            again.quality.unwrap().to_bits()
        );
    }
}

#[test]
fn test_custom_threshold_changes_decision() {
    // 参数化阈值: 同一舰队在宽松阈值下不再触发
    let orchestrator = DispatchOrchestrator::new();
    let ships = clustered_fleet(3);
    let targets = far_targets();

    let strict = DispatchParameters {
        distance_threshold: Some(50.0),
        ..Default::default()
    };
    let loose = DispatchParameters {
        distance_threshold: Some(500.0),
        ..Default::default()
    };

    let strict_plan = orchestrator.plan_rebalance(&ships, &targets, &strict).unwrap();
    let loose_plan = orchestrator.plan_rebalance(&ships, &targets, &loose).unwrap();

    assert!(strict_plan.needed);
    assert!(!loose_plan.needed);
    // 度量本身与阈值无关
    assert_eq!(strict_plan.metrics, loose_plan.metrics);
}

// ==========================================
// 指派 → 选船 协作
// ==========================================

#[test]
fn test_assignment_then_task_dispatch() {
    // 再平衡指派后,针对单一目标的送货任务选船
    let orchestrator = DispatchOrchestrator::new();
    let assigner = FleetAssigner::new();

    let ships = vec![
        ShipBuilder::new("SHIP-1")
            .at("X1-A1", 0.0, 0.0)
            .cargo_item("IRON_ORE", 30)
            .build(),
        ShipBuilder::new("SHIP-2").at("X1-A2", 250.0, 0.0).build(),
        ShipBuilder::new("SHIP-3")
            .at("X1-A3", 40.0, 0.0)
            .status(NavStatus::InTransit)
            .build(),
    ];
    let targets = far_targets();

    // 指派输出与编排器内部一致
    let assignments = assigner.assign_ships_to_targets(&ships, &targets).unwrap();
    let plan = orchestrator
        .plan_rebalance(&ships, &targets, &DispatchParameters::default())
        .unwrap();
    assert_eq!(plan.assignments, assignments);

    // 送货任务: 要求已载 IRON_ORE,命中 SHIP-1
    let delivery_target = make_waypoint("X1-T9", 100.0, 100.0);
    let result = orchestrator
        .select_for_task(&ships, Some(&delivery_target), Some("IRON_ORE"))
        .unwrap();
    assert_eq!(result.ship.ship_symbol, "SHIP-1");
    assert_eq!(result.reason, SelectionReason::HasRequiredCargo);

    // 无货要求: 航行中的 SHIP-3 虽更近也被排除
    let result = orchestrator
        .select_for_task(&ships, Some(&delivery_target), None)
        .unwrap();
    assert_eq!(result.reason, SelectionReason::ClosestAvailable);
    assert_ne!(result.ship.nav_status, NavStatus::InTransit);
}

#[test]
fn test_posture_flags_fuel_and_cargo_pressure() {
    // 燃料临界 + 货舱饱和,方案照常生成,态势标红供人工关注
    let orchestrator = DispatchOrchestrator::new();
    let ships = vec![
        ShipBuilder::new("SHIP-1")
            .at("X1-A1", 0.0, 0.0)
            .fuel(5, 100)
            .cargo_capacity(10)
            .cargo_item("IRON_ORE", 10)
            .build(),
        ShipBuilder::new("SHIP-2")
            .at("X1-B1", 20.0, 0.0)
            .fuel(10, 100)
            .cargo_capacity(10)
            .cargo_item("IRON_ORE", 10)
            .build(),
    ];
    let targets = far_targets();

    let plan = orchestrator
        .plan_rebalance(&ships, &targets, &DispatchParameters::default())
        .unwrap();

    assert_eq!(plan.posture.posture_level, PostureLevel::Red);
    assert!((plan.posture.cargo_utilization - 1.0).abs() < 1e-9);
    assert!((plan.posture.average_fuel_ratio - 0.075).abs() < 1e-9);
    assert!(plan.posture.posture_reason.contains("低于临界值"));
    // 态势退化不阻断指派输出
    assert_eq!(plan.assignments.len(), 2);
}

// ==========================================
// 态势快照对比
// ==========================================

#[test]
fn test_posture_comparison_across_plans() {
    let orchestrator = DispatchOrchestrator::new();
    let targets = far_targets();

    let healthy_plan = orchestrator
        .plan_rebalance(
            &[
                ShipBuilder::new("SHIP-1").at("X1-T1", 300.0, 0.0).build(),
                ShipBuilder::new("SHIP-2").at("X1-T2", 0.0, 300.0).build(),
            ],
            &targets,
            &DispatchParameters::default(),
        )
        .unwrap();

    let degraded_plan = orchestrator
        .plan_rebalance(&clustered_fleet(4), &targets, &DispatchParameters::default())
        .unwrap();

    assert!(degraded_plan.posture.is_worse_than(&healthy_plan.posture));
    assert!(!healthy_plan.posture.is_worse_than(&degraded_plan.posture));
}
