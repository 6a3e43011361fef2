// 分布质量评分的纯计算部分
//
// 两个子评分均落在 (0, 1],对各自因子严格单调:
// - distance_score: 平均距离越大评分越低
// - balance_score:  各目标指派数越不均衡 (变异系数越大) 评分越低

/// 距离子评分: 1 / (1 + 平均最近目标距离)
pub(super) fn distance_score(average_distance: f64) -> f64 {
    1.0 / (1.0 + average_distance.max(0.0))
}

/// 均衡子评分: 1 / (1 + 变异系数)
///
/// 变异系数 = 各目标指派数的标准差 / 均值
/// 完全均衡时为 0 (评分 1.0); 无指派时视为均衡 (调用方已排除空舰队)
pub(super) fn balance_score(per_target_counts: &[usize]) -> f64 {
    if per_target_counts.is_empty() {
        return 1.0;
    }

    let total: usize = per_target_counts.iter().sum();
    if total == 0 {
        return 1.0;
    }

    let mean = total as f64 / per_target_counts.len() as f64;
    let variance = per_target_counts
        .iter()
        .map(|&count| {
            let delta = count as f64 - mean;
            delta * delta
        })
        .sum::<f64>()
        / per_target_counts.len() as f64;
    let cv = variance.sqrt() / mean;

    1.0 / (1.0 + cv)
}

/// 综合质量评分 = w_d * distance_score + w_b * balance_score, 截断到 [0, 1]
pub(super) fn compute_quality_score(
    average_distance: f64,
    per_target_counts: &[usize],
    distance_weight: f64,
    balance_weight: f64,
) -> f64 {
    let score = distance_weight * distance_score(average_distance)
        + balance_weight * balance_score(per_target_counts);
    score.clamp(0.0, 1.0)
}
