// ==========================================
// 非常食在庫通知 - 领域模型层
// ==========================================
// 职责: 定义库存实体、分类结果、通知文档模型
// 红线: 不含文件读取逻辑,不含渲染逻辑
// ==========================================

pub mod document;
pub mod stock;

// 重导出核心类型
pub use document::{Block, Inline};
pub use stock::{ClassificationResult, Stock, StockRow};
