// ==========================================
// 非常食在庫通知 - 数据源实现
// ==========================================
// FileRowSource: 本地 CSV / Excel 库存表
// InMemoryRowSource: 内存行（测试/嵌入调用）
// ==========================================

use crate::domain::stock::StockRow;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::RowSource;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

// ==========================================
// FileRowSource
// ==========================================
pub struct FileRowSource {
    path: PathBuf,
    sheet_name: Option<String>,
    mapper: FieldMapper,
}

impl FileRowSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet_name: None,
            mapper: FieldMapper::new(),
        }
    }

    /// 指定 Excel 工作表（CSV 忽略）
    pub fn with_sheet(mut self, sheet_name: Option<String>) -> Self {
        self.sheet_name = sheet_name;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for FileRowSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_rows(&self) -> ImportResult<Vec<StockRow>> {
        let parser = UniversalFileParser {
            sheet_name: self.sheet_name.clone(),
        };
        let records = parser.parse(&self.path)?;
        debug!(count = records.len(), "原始行读取完成");

        self.mapper.map_all(&records)
    }

    /// file:// 链接（优先绝对路径）
    fn link(&self) -> String {
        let absolute = self
            .path
            .canonicalize()
            .unwrap_or_else(|_| self.path.clone());
        format!("file://{}", absolute.display())
    }
}

// ==========================================
// InMemoryRowSource
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryRowSource {
    rows: Vec<StockRow>,
    link: String,
}

impl InMemoryRowSource {
    pub fn new(rows: Vec<StockRow>, link: &str) -> Self {
        Self {
            rows,
            link: link.to_string(),
        }
    }
}

impl RowSource for InMemoryRowSource {
    fn read_rows(&self) -> ImportResult<Vec<StockRow>> {
        Ok(self.rows.clone())
    }

    fn link(&self) -> String {
        self.link.clone()
    }
}
