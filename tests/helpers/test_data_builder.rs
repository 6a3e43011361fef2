// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use fleet_dispatch::domain::fleet::{Cargo, CargoItem, Ship, Waypoint};
use fleet_dispatch::domain::spatial::Position;
use fleet_dispatch::domain::types::NavStatus;

// ==========================================
// Ship 构建器
// ==========================================

pub struct ShipBuilder {
    ship_symbol: String,
    player_id: String,
    waypoint_symbol: String,
    x: f64,
    y: f64,
    nav_status: NavStatus,
    fuel_current: i64,
    fuel_capacity: i64,
    cargo_capacity: i64,
    cargo_items: Vec<(String, i64)>,
    engine_speed: f64,
}

impl ShipBuilder {
    pub fn new(ship_symbol: &str) -> Self {
        Self {
            ship_symbol: ship_symbol.to_string(),
            player_id: "PLAYER-1".to_string(),
            waypoint_symbol: "X1-A1".to_string(),
            x: 0.0,
            y: 0.0,
            nav_status: NavStatus::InOrbit,
            fuel_current: 100,
            fuel_capacity: 100,
            cargo_capacity: 40,
            cargo_items: Vec::new(),
            engine_speed: 30.0,
        }
    }

    pub fn player(mut self, player_id: &str) -> Self {
        self.player_id = player_id.to_string();
        self
    }

    pub fn at(mut self, waypoint_symbol: &str, x: f64, y: f64) -> Self {
        self.waypoint_symbol = waypoint_symbol.to_string();
        self.x = x;
        self.y = y;
        self
    }

    pub fn status(mut self, nav_status: NavStatus) -> Self {
        self.nav_status = nav_status;
        self
    }

    pub fn fuel(mut self, current: i64, capacity: i64) -> Self {
        self.fuel_current = current;
        self.fuel_capacity = capacity;
        self
    }

    pub fn cargo_capacity(mut self, capacity: i64) -> Self {
        self.cargo_capacity = capacity;
        self
    }

    pub fn cargo_item(mut self, trade_symbol: &str, units: i64) -> Self {
        self.cargo_items.push((trade_symbol.to_string(), units));
        self
    }

    pub fn engine_speed(mut self, speed: f64) -> Self {
        self.engine_speed = speed;
        self
    }

    pub fn build(self) -> Ship {
        let items: Vec<CargoItem> = self
            .cargo_items
            .into_iter()
            .map(|(trade_symbol, units)| CargoItem { trade_symbol, units })
            .collect();
        let units = items.iter().map(|item| item.units).sum();

        Ship {
            ship_symbol: self.ship_symbol,
            player_id: self.player_id,
            waypoint_symbol: self.waypoint_symbol,
            position: Position::new(self.x, self.y),
            nav_status: self.nav_status,
            fuel_current: self.fuel_current,
            fuel_capacity: self.fuel_capacity,
            cargo: Cargo {
                capacity: self.cargo_capacity,
                units,
                items,
            },
            engine_speed: self.engine_speed,
        }
    }
}

// ==========================================
// Waypoint 辅助函数
// ==========================================

pub fn make_waypoint(waypoint_symbol: &str, x: f64, y: f64) -> Waypoint {
    Waypoint::new(waypoint_symbol, x, y)
}
