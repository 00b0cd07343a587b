// ==========================================
// 非常食在庫通知 - 数据清洗器
// ==========================================
// 职责: TRIM / 空值判定 / 期限日期解析 / 数量解析
// 红线: 无法解析的输入直接报错,不猜测意图
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 支持的纯日期格式（按顺序尝试）
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// 支持的日期时间格式（取日期部分）
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    pub fn is_blank(&self, value: &str) -> bool {
        value.trim().is_empty()
    }

    /// 解析期限日期
    ///
    /// # 支持格式
    /// - YYYY-MM-DD / YYYY/MM/DD / YYYY/M/D / YYYYMMDD
    /// - 带时间的 ISO 8601 / RFC 3339（取日期部分）
    ///
    /// 纯数字（"2025"、"45292"）不视为日期;Excel 日期单元格由 ExcelParser 转为 ISO 文本
    pub fn parse_expiry(&self, value: &str, row: usize) -> ImportResult<NaiveDate> {
        let trimmed = value.trim();
        let err = || ImportError::DateFormatError {
            row,
            field: "期限".to_string(),
            value: value.to_string(),
        };

        if trimmed.is_empty() {
            return Err(err());
        }

        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
                return Ok(date);
            }
        }

        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Ok(dt.date());
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.date_naive());
        }

        Err(err())
    }

    /// 解析数量（非负整数;表格中的 "10.0" 视为 10）
    pub fn parse_quantity(&self, value: &str, row: usize) -> ImportResult<u32> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ImportError::MissingField {
                row,
                field: "数量".to_string(),
            });
        }

        if let Ok(n) = trimmed.parse::<u32>() {
            return Ok(n);
        }

        let conversion_err = |message: String| ImportError::TypeConversionError {
            row,
            field: "数量".to_string(),
            message,
        };

        let float = trimmed
            .parse::<f64>()
            .map_err(|_| conversion_err(format!("无法解析为整数: {}", trimmed)))?;

        if float < 0.0 {
            return Err(conversion_err(format!("数量不能为负数: {}", trimmed)));
        }
        if float.fract() != 0.0 || float > u32::MAX as f64 {
            return Err(conversion_err(format!("无法解析为整数: {}", trimmed)));
        }

        Ok(float as u32)
    }
}
