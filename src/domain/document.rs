// ==========================================
// 非常食在庫通知 - 通知文档模型
// ==========================================
// 职责: Block/Inline 抽象语法,供 ContentBuilder 构建、渲染器遍历
// 红线: 仅支持标题/段落/无序列表 + 固定行内元素,不是通用模板
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Inline - 行内元素
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Date(NaiveDate),
    Bold(String),
    Italic(String),
    Link { body: Vec<Inline>, href: String },
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    pub fn link(body: Vec<Inline>, href: impl Into<String>) -> Self {
        Inline::Link {
            body,
            href: href.into(),
        }
    }
}

impl From<&str> for Inline {
    fn from(s: &str) -> Self {
        Inline::Text(s.to_string())
    }
}

impl From<String> for Inline {
    fn from(s: String) -> Self {
        Inline::Text(s)
    }
}

impl From<NaiveDate> for Inline {
    fn from(date: NaiveDate) -> Self {
        Inline::Date(date)
    }
}

// ==========================================
// Block - 块级元素
// ==========================================
// 一份文档 = Vec<Block>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// 无序列表,每项一组行内元素
    List(Vec<Vec<Inline>>),
    /// 标题,level >= 1（直接构造的 0 由渲染器按 1 级输出）
    Heading { body: Vec<Inline>, level: u8 },
    Paragraph(Vec<Inline>),
}

impl Block {
    /// 构造标题（level 为 0 时按 1 处理）
    pub fn heading(body: Vec<Inline>, level: u8) -> Self {
        Block::Heading {
            body,
            level: level.max(1),
        }
    }

    pub fn paragraph(body: Vec<Inline>) -> Self {
        Block::Paragraph(body)
    }
}
