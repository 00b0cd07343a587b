// ==========================================
// 非常食在庫通知 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls/.ods) / CSV (.csv)
// 读取方式: 按列位置,第一行为表头
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::RawRecord;
use crate::importer::importer_trait::FileParser;
use crate::render::format_date;
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        let path = file_path;

        // 检查文件存在
        ensure_exists(path)?;

        // 检查扩展名
        let ext = extension_of(path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 CSV 文件（表头由 csv reader 跳过）
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_number = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_idx + 2);

            let raw = RawRecord {
                row_number,
                cells: record.iter().map(|v| v.trim().to_string()).collect(),
            };

            // 跳过完全空白的行
            if raw.is_blank() {
                continue;
            }

            records.push(raw);
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
#[derive(Default)]
pub struct ExcelParser {
    /// 工作表名（None 时读取第一个工作表）
    pub sheet_name: Option<String>,
}

impl ExcelParser {
    pub fn with_sheet(sheet_name: Option<String>) -> Self {
        Self { sheet_name }
    }
}

/// 单元格 → 文本
///
/// 日期单元格转为 YYYY-MM-DD（时刻舍去）;无法换算的序列值原样输出,由 DataCleaner 报错
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => format_date(datetime.date()),
            None => dt.as_f64().to_string(),
        },
        other => other.to_string().trim().to_string(),
    }
}

/// 表格行号（1 起算）: 区域起始行 + 区域内下标
fn sheet_row_number(first_row: usize, idx: usize) -> usize {
    first_row + idx + 1
}

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>> {
        let path = file_path;

        // 检查文件存在
        ensure_exists(path)?;

        // 检查扩展名
        let ext = extension_of(path);
        if !matches!(ext.as_str(), "xlsx" | "xls" | "xlsm" | "ods") {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(path)?;

        let sheet_name = match &self.sheet_name {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?,
        };

        let range = workbook.worksheet_range(&sheet_name)?;
        let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

        // 第一行为表头,跳过
        let mut records = Vec::new();
        for (idx, data_row) in range.rows().enumerate().skip(1) {
            let raw = RawRecord {
                row_number: sheet_row_number(first_row, idx),
                cells: data_row.iter().map(cell_to_string).collect(),
            };

            // 跳过完全空白的行
            if raw.is_blank() {
                continue;
            }

            records.push(raw);
        }

        Ok(records)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
#[derive(Default)]
pub struct UniversalFileParser {
    pub sheet_name: Option<String>,
}

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRecord>> {
        let path = file_path.as_ref();

        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" | "xlsm" | "ods" => {
                ExcelParser::with_sheet(self.sheet_name.clone()).parse_to_raw_records(path)
            }
            ext => Err(ImportError::UnsupportedFormat(ext.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = csv_file(&["期限,数量,品名", "2025-03-01,12,アルファ米", "2025-04-01,6,水"]);

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].row_number, 2);
        assert_eq!(records[0].cell(0), "2025-03-01");
        assert_eq!(records[1].cell(2), "水");
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_raw_records(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let temp_file = csv_file(&["期限,数量,品名", "2025-03-01,1,A", ",,", "2025-04-01,2,B"]);

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();

        // 应跳过空行,行号保持表格位置
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].row_number, 4);
    }

    #[test]
    fn test_cell_to_string_date_cell() {
        use calamine::{ExcelDateTime, ExcelDateTimeType};

        // 45292 = 2024-01-01,小数部分为时刻
        let cell = Data::DateTime(ExcelDateTime::new(45292.75, ExcelDateTimeType::DateTime, false));
        assert_eq!(cell_to_string(&cell), "2024-01-01");

        let cleaner = crate::importer::data_cleaner::DataCleaner;
        assert_eq!(
            cleaner.parse_expiry(&cell_to_string(&cell), 2).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_cell_to_string_plain_cells() {
        let cleaner = crate::importer::data_cleaner::DataCleaner;

        // 数量列的浮点单元格
        let quantity = cell_to_string(&Data::Float(10.0));
        assert_eq!(cleaner.parse_quantity(&quantity, 2).unwrap(), 10);

        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("  水 ".to_string())), "水");

        // 期限列に書式なしの数値 → 日付として扱わない
        let bare = cell_to_string(&Data::Float(2025.0));
        assert!(cleaner.parse_expiry(&bare, 2).is_err());
    }

    #[test]
    fn test_sheet_row_number() {
        // 区域从 A1 开始: 表头为第 1 行,首个数据行 (idx 1) 为第 2 行
        assert_eq!(sheet_row_number(0, 1), 2);
        // 区域从第 3 行开始（前两行为空）
        assert_eq!(sheet_row_number(2, 1), 4);
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let temp_file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalFileParser::default().parse(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
    }
}
