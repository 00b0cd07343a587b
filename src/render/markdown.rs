// ==========================================
// 非常食在庫通知 - Markdown 渲染器
// ==========================================
// heading   → "#" × level + " " + 文本
// paragraph → 行内文本（无包裹）
// list      → 每项一行 "- " 前缀
// bold/italic → **x** / *x*
// link      → 仅子元素文本（不输出 href）
// 块之间以空行分隔
// ==========================================

use super::format_date;
use crate::domain::document::{Block, Inline};

fn render_inline(inline: &Inline) -> String {
    match inline {
        Inline::Text(s) => s.clone(),
        Inline::Date(date) => format_date(*date),
        Inline::Bold(s) => format!("**{}**", s),
        Inline::Italic(s) => format!("*{}*", s),
        // 纯文本正文不带链接地址
        Inline::Link { body, .. } => render_inlines(body),
    }
}

fn render_inlines(inlines: &[Inline]) -> String {
    inlines.iter().map(render_inline).collect()
}

fn render_block(block: &Block) -> String {
    match block {
        Block::List(items) => items
            .iter()
            .map(|item| format!("- {}", render_inlines(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        // level 0 按 1 级输出
        Block::Heading { body, level } => {
            let level = usize::from((*level).max(1));
            format!("{} {}", "#".repeat(level), render_inlines(body))
        }
        Block::Paragraph(body) => render_inlines(body),
    }
}

/// 渲染为 Markdown 文本
pub fn render_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_styles() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let text = render_inlines(&[
            Inline::text("a"),
            Inline::Bold("b".into()),
            Inline::Italic("c".into()),
            Inline::Date(date),
        ]);
        assert_eq!(text, "a**b***c*2024-03-05");
    }

    #[test]
    fn test_link_drops_href() {
        let link = Inline::link(
            vec![Inline::text("シート"), Inline::Bold("へ".into())],
            "https://example.com",
        );
        assert_eq!(render_inline(&link), "シート**へ**");
    }

    #[test]
    fn test_blocks() {
        let blocks = vec![
            Block::heading(vec![Inline::text("見出し")], 2),
            Block::paragraph(vec![Inline::text("本文")]),
            Block::List(vec![vec![Inline::text("一")], vec![Inline::text("二")]]),
        ];
        assert_eq!(render_markdown(&blocks), "## 見出し\n\n本文\n\n- 一\n- 二");
    }

    #[test]
    fn test_heading_level_zero_renders_as_h1() {
        let block = Block::Heading {
            body: vec![Inline::text("見出し")],
            level: 0,
        };
        assert_eq!(render_block(&block), "# 見出し");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render_markdown(&[]), "");
    }
}
