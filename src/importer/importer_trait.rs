// ==========================================
// 非常食在庫通知 - 导入 Trait
// ==========================================
// 职责: 定义数据源接口（不包含实现）
// ==========================================

use crate::domain::stock::StockRow;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::RawRecord;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: CsvParser, ExcelParser
pub trait FileParser {
    /// 解析文件为原始行记录（跳过表头行与完全空白行）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<RawRecord>): 行记录列表（按列位置）
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>>;
}

// ==========================================
// RowSource Trait
// ==========================================
// 用途: 库存表数据源（外部协作者）
// 实现者: FileRowSource, InMemoryRowSource
pub trait RowSource {
    /// 读取全部库存行（表头已排除）
    ///
    /// 单次调用,失败即整个运行失败
    fn read_rows(&self) -> ImportResult<Vec<StockRow>>;

    /// 表格链接（原样写入通知正文）
    fn link(&self) -> String;
}
