// ==========================================
// 星际舰队调度系统 - 调度参数档案
// ==========================================
// 依据: Dispatch_Engine_Specs_v0.2.md - 9. 配置项全集
// ==========================================
// 职责: 引擎阈值/权重的加载、校验、默认值回退
// 存储: 调用方提供 JSON (文件或字符串),引擎只读
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// 内置默认值
// ==========================================
// 参数未设置时引擎回退到这里的取值
pub mod defaults {
    /// 再平衡距离阈值 (坐标单位)
    pub const DISTANCE_THRESHOLD: f64 = 100.0;

    /// 质量评分: 距离项权重
    pub const DISTANCE_WEIGHT: f64 = 0.6;

    /// 质量评分: 均衡项权重
    pub const BALANCE_WEIGHT: f64 = 0.4;

    /// 选船时是否默认剔除航行中舰船
    pub const EXCLUDE_IN_TRANSIT: bool = true;

    /// 态势判定: 平均燃料临界比例
    pub const FUEL_CRITICAL_RATIO: f64 = 0.15;

    /// 态势判定: 货舱饱和比例
    pub const CARGO_SATURATION_RATIO: f64 = 0.9;
}

// ==========================================
// DispatchProfile - 调度参数档案 (持久化对象)
// ==========================================

/// 调度参数档案
///
/// 由调用方维护的命名参数集,引擎按档案内参数运行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchProfile {
    /// 档案 ID (用于选择/引用)
    pub profile_id: String,

    /// 显示名称 (中文)
    pub title: String,

    /// 说明 (可选)
    #[serde(default)]
    pub description: Option<String>,

    /// 参数 (阈值/权重,后续可扩展)
    #[serde(default)]
    pub parameters: DispatchParameters,
}

/// 调度参数 (未设置的项回退内置默认值)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DispatchParameters {
    /// 再平衡距离阈值 (>= 0)
    #[serde(default)]
    pub distance_threshold: Option<f64>,

    /// 质量评分: 距离项权重 (0 ~ 1)
    #[serde(default)]
    pub distance_weight: Option<f64>,

    /// 质量评分: 均衡项权重 (0 ~ 1)
    #[serde(default)]
    pub balance_weight: Option<f64>,

    /// 选船时是否剔除航行中舰船
    #[serde(default)]
    pub exclude_in_transit: Option<bool>,

    /// 态势判定: 平均燃料临界比例 (0 ~ 1)
    #[serde(default)]
    pub fuel_critical_ratio: Option<f64>,

    /// 态势判定: 货舱饱和比例 (0 ~ 1)
    #[serde(default)]
    pub cargo_saturation_ratio: Option<f64>,
}

impl DispatchProfile {
    /// 从 JSON 字符串解析档案
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// 从 JSON 文件加载档案
    ///
    /// # 参数
    /// - `path`: 档案文件路径 (由调用方决定存放位置)
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let profile = Self::from_json_str(&raw)?;
        profile.validate().map_err(anyhow::Error::msg)?;
        Ok(profile)
    }

    /// 校验档案参数
    ///
    /// # 校验项
    /// 1) profile_id 非空
    /// 2) 阈值非负
    /// 3) 各比例/权重落在 [0, 1]
    pub fn validate(&self) -> Result<(), String> {
        if self.profile_id.trim().is_empty() {
            return Err("profile_id 不能为空".to_string());
        }
        self.parameters.validate()
    }
}

impl DispatchParameters {
    /// 校验参数取值范围
    pub fn validate(&self) -> Result<(), String> {
        if let Some(threshold) = self.distance_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(format!("distance_threshold 必须为非负有限值: {}", threshold));
            }
        }

        let ratio_fields = [
            ("distance_weight", self.distance_weight),
            ("balance_weight", self.balance_weight),
            ("fuel_critical_ratio", self.fuel_critical_ratio),
            ("cargo_saturation_ratio", self.cargo_saturation_ratio),
        ];
        for (name, value) in ratio_fields {
            if let Some(v) = value {
                if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                    return Err(format!("{} 必须落在 [0, 1]: {}", name, v));
                }
            }
        }

        Ok(())
    }

    /// 是否设置了任一参数 (全部未设置时等价于默认档案)
    pub fn has_any(&self) -> bool {
        self.distance_threshold.is_some()
            || self.distance_weight.is_some()
            || self.balance_weight.is_some()
            || self.exclude_in_transit.is_some()
            || self.fuel_critical_ratio.is_some()
            || self.cargo_saturation_ratio.is_some()
    }
}
