// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的日期、临时库存表、临时属性文件
// ==========================================
#![allow(dead_code)]

use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 创建临时 CSV 库存表（含表头）
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn write_stock_csv(rows: &[(&str, u32, &str)]) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("创建临时 CSV 失败");
    writeln!(temp_file, "期限,数量,品名").unwrap();
    for (expiry, quantity, name) in rows {
        writeln!(temp_file, "{},{},{}", expiry, quantity, name).unwrap();
    }
    temp_file.flush().unwrap();
    temp_file
}

/// 创建临时属性文件（JSON）
pub fn write_properties(json: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("创建临时属性文件失败");
    write!(temp_file, "{}", json).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
