// ==========================================
// 星际舰队调度系统 - 空间模型
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 1. 空间模型
// ==========================================
// 职责: 二维坐标与欧氏距离
// 红线: 纯值类型,不可变,无任何外部依赖
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Position - 二维坐标
// ==========================================
// 用途: 舰船/航点的系统坐标,调用方快照提供
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64, // X 坐标
    pub y: f64, // Y 坐标
}

impl Position {
    /// 构造函数
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 计算到另一坐标的欧氏距离
    ///
    /// # 参数
    /// - `other`: 目标坐标
    ///
    /// # 返回
    /// 距离 (坐标单位): sqrt((x1-x2)² + (y1-y2)²)
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// ==========================================
// 单元测试
// ==========================================
