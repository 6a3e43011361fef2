// ==========================================
// 星际舰队调度系统 - 舰队快照模型
// ==========================================
// 依据: Fleet_Dev_Master_Spec.md - PART C 数据与状态体系
// 依据: Dispatch_Engine_Specs_v0.2.md - 2. 舰队快照
// ==========================================
// 红线: 快照只读,引擎不得修改、不得持久化
// 用途: 调用方 (存储适配层) 每次调用时完整提供
// ==========================================

use crate::domain::spatial::Position;
use crate::domain::types::NavStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// Waypoint - 命名航点
// ==========================================
// 对齐: 外部星图数据 waypoint 记录
// 约束: 等值判断与查找均以 waypoint_symbol 为准
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub waypoint_symbol: String, // 航点唯一标识 (如 X1-A1)
    pub position: Position,      // 系统坐标
}

impl Waypoint {
    /// 构造函数
    pub fn new(waypoint_symbol: &str, x: f64, y: f64) -> Self {
        Self {
            waypoint_symbol: waypoint_symbol.to_string(),
            position: Position::new(x, y),
        }
    }
}

impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.waypoint_symbol == other.waypoint_symbol
    }
}

impl Eq for Waypoint {}

// ==========================================
// CargoItem - 货舱条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    pub trade_symbol: String, // 货物标识 (如 IRON_ORE)
    pub units: i64,           // 单位数 (>= 0)
}

// ==========================================
// Cargo - 货舱
// ==========================================
// 约束: units <= capacity 且 units == 条目单位数之和
// 约束: trade_symbol 在条目集内唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub capacity: i64,        // 货舱容量
    pub units: i64,           // 已用单位数
    pub items: Vec<CargoItem>, // 货舱条目 (顺序无关)
}

impl Cargo {
    /// 构造空货舱
    pub fn empty(capacity: i64) -> Self {
        Self {
            capacity,
            units: 0,
            items: Vec::new(),
        }
    }

    /// 查询指定货物的单位数 (不存在时为 0)
    pub fn units_of(&self, trade_symbol: &str) -> i64 {
        self.items
            .iter()
            .find(|item| item.trade_symbol == trade_symbol)
            .map(|item| item.units)
            .unwrap_or(0)
    }

    /// 判断是否载有指定货物 (units > 0)
    pub fn has_item(&self, trade_symbol: &str) -> bool {
        self.units_of(trade_symbol) > 0
    }

    /// 货舱利用率 (0.0 ~ 1.0, 容量为 0 时视为 0.0)
    pub fn utilization_ratio(&self) -> f64 {
        if self.capacity <= 0 {
            return 0.0;
        }
        self.units as f64 / self.capacity as f64
    }

    /// 校验货舱不变量
    ///
    /// # 校验项
    /// 1) capacity >= 0, units >= 0, units <= capacity
    /// 2) units == 条目单位数之和
    /// 3) 条目单位数均 >= 0, trade_symbol 唯一
    pub fn is_consistent(&self) -> bool {
        if self.capacity < 0 || self.units < 0 || self.units > self.capacity {
            return false;
        }

        let mut sum: i64 = 0;
        for (i, item) in self.items.iter().enumerate() {
            if item.units < 0 {
                return false;
            }
            // trade_symbol 唯一性
            if self.items[..i]
                .iter()
                .any(|prev| prev.trade_symbol == item.trade_symbol)
            {
                return false;
            }
            sum += item.units;
        }

        sum == self.units
    }
}

// ==========================================
// Ship - 舰船快照
// ==========================================
// 红线: 引擎永不构造、永不持久化舰船,只读取
// 对齐: 外部舰队查询接口 ship 记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    // ===== 标识 =====
    pub ship_symbol: String,     // 舰船唯一标识
    pub player_id: String,       // 所属玩家标识 (由上游服务层解析,引擎不做归属判断)

    // ===== 位置 =====
    pub waypoint_symbol: String, // 当前所在航点标识
    pub position: Position,      // 当前坐标 (与所在航点一致)

    // ===== 导航状态 =====
    pub nav_status: NavStatus,   // DOCKED / IN_ORBIT / IN_TRANSIT

    // ===== 燃料 =====
    pub fuel_current: i64,       // 当前燃料
    pub fuel_capacity: i64,      // 燃料容量

    // ===== 货舱 =====
    pub cargo: Cargo,            // 货舱快照

    // ===== 引擎参数 =====
    pub engine_speed: f64,       // 引擎速度 (预留的平局裁决因子,当前不参与排序)
}

impl Ship {
    /// 判断是否载有指定货物 (units > 0)
    pub fn has_cargo(&self, trade_symbol: &str) -> bool {
        self.cargo.has_item(trade_symbol)
    }

    /// 燃料比例 (0.0 ~ 1.0, 容量为 0 时视为满)
    ///
    /// 说明: 无燃料舱的舰船 (如探测器) 视为不受燃料约束
    pub fn fuel_ratio(&self) -> f64 {
        if self.fuel_capacity <= 0 {
            return 1.0;
        }
        (self.fuel_current as f64 / self.fuel_capacity as f64).clamp(0.0, 1.0)
    }

    /// 到指定航点的距离
    pub fn distance_to_waypoint(&self, waypoint: &Waypoint) -> f64 {
        self.position.distance_to(&waypoint.position)
    }
}

// ==========================================
// 单元测试
// ==========================================
