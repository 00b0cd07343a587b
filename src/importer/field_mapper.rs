// ==========================================
// 非常食在庫通知 - 字段映射器
// ==========================================
// 职责: 原始行（按列位置）→ StockRow
// 列顺序: A=期限, B=数量, C=品名
// ==========================================

use crate::domain::stock::StockRow;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;

/// 列位置
pub const COL_EXPIRY: usize = 0;
pub const COL_QUANTITY: usize = 1;
pub const COL_NAME: usize = 2;

/// 文件解析后的原始行（按列位置保存单元格文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub row_number: usize,
    pub cells: Vec<String>,
}

impl RawRecord {
    pub fn cell(&self, col: usize) -> &str {
        self.cells.get(col).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMapper {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    /// 原始行 → StockRow
    ///
    /// 期限保持原始文本（由分类器解析）,数量在此解析
    pub fn map_to_stock_row(&self, record: &RawRecord) -> ImportResult<StockRow> {
        let quantity = self
            .cleaner
            .parse_quantity(record.cell(COL_QUANTITY), record.row_number)?;

        Ok(StockRow {
            row_number: record.row_number,
            expiry: self.cleaner.clean_text(record.cell(COL_EXPIRY)),
            quantity,
            name: self.cleaner.clean_text(record.cell(COL_NAME)),
        })
    }

    /// 批量映射（遇到第一个错误即中止）
    pub fn map_all(&self, records: &[RawRecord]) -> ImportResult<Vec<StockRow>> {
        records
            .iter()
            .filter(|r| !r.is_blank())
            .map(|r| self.map_to_stock_row(r))
            .collect()
    }
}
