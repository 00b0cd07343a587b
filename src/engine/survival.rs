// ==========================================
// 非常食在庫通知 - 残日数估算
// ==========================================
// 规则: survival_days = floor(living_total / 3)
// 红线: 整数向下取整,不向上取整
// ==========================================

/// 每日消费量（食/日）
pub const DAILY_CONSUMPTION: u64 = 3;

pub struct SurvivalEstimator;

impl SurvivalEstimator {
    /// 估算可维持天数
    pub fn estimate(living_total: u64) -> u64 {
        living_total / DAILY_CONSUMPTION
    }
}
