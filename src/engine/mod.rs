// ==========================================
// 非常食在庫通知 - 引擎层
// ==========================================
// 职责: 库存分类、残日数估算、通知内容构建、流程编排
// 红线: 引擎不读文件、不读环境变量
// ==========================================

pub mod classifier;
pub mod content_builder;
pub mod orchestrator;
pub mod survival;

// 重导出核心引擎
pub use classifier::{middle_limit, StockClassifier, LOOKAHEAD_MONTHS};
pub use content_builder::{
    should_alert, ContentBuilder, SURVIVAL_URGENT_DAYS, SURVIVAL_WARNING_DAYS,
};
pub use orchestrator::{AlertOrchestrator, RunOutcome};
pub use survival::{SurvivalEstimator, DAILY_CONSUMPTION};
