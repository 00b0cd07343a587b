// ==========================================
// 非常食在庫通知 - 库存分类引擎
// ==========================================
// 职责: 原始库存行 → 期限切れ / 期限間近 / 存活
// 输入: StockRow 列表 + 基准日
// 输出: ClassificationResult (dead, soon_expired, living_total)
// ==========================================
// 红线: 期限 == 基准日 仍视为存活（含当天）
// 红线: soon_expired 是存活集合上的标记,数量已计入 living_total
// ==========================================

use crate::domain::stock::{ClassificationResult, Stock, StockRow};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use chrono::{Datelike, Months, NaiveDate};
use tracing::{debug, info, instrument};

/// 期限間近判定的前瞻月数
pub const LOOKAHEAD_MONTHS: u32 = 4;

/// 期限間近上限: 基准日所在月 + 4 个月的 1 日
///
/// 例: 5/10 → 9/1, 2024-01-15 → 2024-05-01
pub fn middle_limit(reference_date: NaiveDate) -> NaiveDate {
    reference_date
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(LOOKAHEAD_MONTHS)))
        .unwrap_or(NaiveDate::MAX)
}

// ==========================================
// StockClassifier - 库存分类引擎
// ==========================================
pub struct StockClassifier {
    cleaner: DataCleaner,
}

impl Default for StockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl StockClassifier {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    /// 批量分类
    ///
    /// 任意一行期限无法解析 → 整体失败（不产生部分结果）
    #[instrument(skip(self, rows), fields(count = rows.len(), reference_date = %reference_date))]
    pub fn classify(
        &self,
        rows: &[StockRow],
        reference_date: NaiveDate,
    ) -> ImportResult<ClassificationResult> {
        let limit = middle_limit(reference_date);
        let mut result = ClassificationResult::default();

        for row in rows {
            debug!(row = row.row_number, expiry = %row.expiry, quantity = row.quantity, name = %row.name, "Row");

            let stock = Stock {
                name: row.name.clone(),
                amount: row.quantity,
                good_thru: self.cleaner.parse_expiry(&row.expiry, row.row_number)?,
            };

            if stock.good_thru >= reference_date {
                result.living_total += u64::from(stock.amount);
                if stock.good_thru <= limit {
                    result.soon_expired.push(stock);
                }
            } else {
                result.dead.push(stock);
            }
        }

        info!(
            living_total = result.living_total,
            dead = result.dead.len(),
            soon_expired = result.soon_expired.len(),
            middle_limit = %limit,
            "库存分类完成"
        );

        Ok(result)
    }
}
