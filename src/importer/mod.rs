// ==========================================
// 非常食在庫通知 - 导入层
// ==========================================
// 职责: 外部库存表读取,生成 StockRow
// 支持: Excel, CSV, 内存行
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod row_source;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper, RawRecord};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use row_source::{FileRowSource, InMemoryRowSource};

// 重导出 Trait 接口
pub use importer_trait::{FileParser, RowSource};
