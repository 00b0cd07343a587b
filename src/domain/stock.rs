// ==========================================
// 非常食在庫通知 - 库存实体
// ==========================================
// StockRow: 数据源原始行（未校验）
// Stock: 分类后的库存条目（不可变）
// ClassificationResult: 分类器输出
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// StockRow - 原始库存行
// ==========================================
// 日期保持原始文本,由分类器解析（解析失败即数据错误）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    pub row_number: usize,  // 表格行号（表头为第 1 行）
    pub expiry: String,     // 期限（原始文本）
    pub quantity: u32,      // 数量（食）
    pub name: String,       // 品名
}

impl StockRow {
    pub fn new(row_number: usize, expiry: &str, quantity: u32, name: &str) -> Self {
        Self {
            row_number,
            expiry: expiry.to_string(),
            quantity,
            name: name.to_string(),
        }
    }
}

// ==========================================
// Stock - 库存条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub name: String,
    pub amount: u32,
    pub good_thru: NaiveDate,
}

// ==========================================
// ClassificationResult - 分类结果
// ==========================================
// soon_expired 是 living 的子集标记,其数量已计入 living_total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub dead: Vec<Stock>,
    pub soon_expired: Vec<Stock>,
    pub living_total: u64,
}

impl ClassificationResult {
    pub fn has_dead(&self) -> bool {
        !self.dead.is_empty()
    }

    pub fn has_soon_expired(&self) -> bool {
        !self.soon_expired.is_empty()
    }
}
