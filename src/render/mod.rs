// ==========================================
// 非常食在庫通知 - 渲染层
// ==========================================
// 职责: Block 文档 → Markdown 文本 / HTML 文本
// 红线: 两个渲染器相互独立,不共享渲染逻辑
// ==========================================

pub mod html;
pub mod markdown;

use chrono::NaiveDate;

pub use html::{render_html, wrap_html};
pub use markdown::render_markdown;

/// 日期格式: YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
