// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{Duration, NaiveDate};
use stock_alert::domain::StockRow;

// ==========================================
// StockRow 构建器
// ==========================================
// 行号从 2 开始（第 1 行为表头）
pub struct StockRowsBuilder {
    rows: Vec<StockRow>,
}

impl StockRowsBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    fn next_row_number(&self) -> usize {
        self.rows.len() + 2
    }

    pub fn row(mut self, expiry: &str, quantity: u32, name: &str) -> Self {
        let n = self.next_row_number();
        self.rows.push(StockRow::new(n, expiry, quantity, name));
        self
    }

    /// 相对基准日偏移 days 天的期限
    pub fn expiring_in(self, reference: NaiveDate, days: i64, quantity: u32, name: &str) -> Self {
        let date = reference + Duration::days(days);
        self.row(&date.format("%Y-%m-%d").to_string(), quantity, name)
    }

    pub fn build(self) -> Vec<StockRow> {
        self.rows
    }
}
