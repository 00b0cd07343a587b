// ==========================================
// 非常食在庫通知 - HTML 渲染器
// ==========================================
// heading   → <hN>...</hN>
// paragraph → <p>...</p>
// list      → <ul><li>...</li>...</ul>
// bold/italic → <b> / <em>
// link      → <a href="...">...</a>
// 块之间以换行分隔;文本与属性值做 HTML 转义
// ==========================================

use super::format_date;
use crate::domain::document::{Block, Inline};

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_inline(inline: &Inline) -> String {
    match inline {
        Inline::Text(s) => escape(s),
        Inline::Date(date) => format_date(*date),
        Inline::Bold(s) => format!("<b>{}</b>", escape(s)),
        Inline::Italic(s) => format!("<em>{}</em>", escape(s)),
        Inline::Link { body, href } => {
            format!("<a href=\"{}\">{}</a>", escape(href), render_inlines(body))
        }
    }
}

fn render_inlines(inlines: &[Inline]) -> String {
    inlines.iter().map(render_inline).collect()
}

fn render_block(block: &Block) -> String {
    match block {
        Block::List(items) => {
            let lis: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_inlines(item)))
                .collect();
            format!("<ul>{}</ul>", lis)
        }
        // level 0 按 <h1> 输出
        Block::Heading { body, level } => {
            let level = (*level).max(1);
            format!("<h{level}>{}</h{level}>", render_inlines(body))
        }
        Block::Paragraph(body) => format!("<p>{}</p>", render_inlines(body)),
    }
}

/// 渲染为 HTML 片段
pub fn render_html(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 包裹为最小 HTML 文档
pub fn wrap_html(body: &str) -> String {
    ["<html>", "<head>", "</head>", "<body>", body, "</body>", "</html>"].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_styles() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let html = render_inlines(&[
            Inline::text("a"),
            Inline::Bold("b".into()),
            Inline::Italic("c".into()),
            Inline::Date(date),
        ]);
        assert_eq!(html, "a<b>b</b><em>c</em>2024-03-05");
    }

    #[test]
    fn test_link_keeps_href() {
        let link = Inline::link(vec![Inline::text("シート")], "https://example.com/?a=1&b=2");
        assert_eq!(
            render_inline(&link),
            "<a href=\"https://example.com/?a=1&amp;b=2\">シート</a>"
        );
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(
            render_inline(&Inline::text("<水> & \"缶\"")),
            "&lt;水&gt; &amp; &quot;缶&quot;"
        );
    }

    #[test]
    fn test_heading_level_zero_renders_as_h1() {
        let block = Block::Heading {
            body: vec![Inline::text("見出し")],
            level: 0,
        };
        assert_eq!(render_block(&block), "<h1>見出し</h1>");
    }

    #[test]
    fn test_blocks() {
        let blocks = vec![
            Block::heading(vec![Inline::text("見出し")], 2),
            Block::paragraph(vec![Inline::text("本文")]),
            Block::List(vec![vec![Inline::text("一")], vec![Inline::text("二")]]),
        ];
        assert_eq!(
            render_html(&blocks),
            "<h2>見出し</h2>\n<p>本文</p>\n<ul><li>一</li><li>二</li></ul>"
        );
    }

    #[test]
    fn test_wrap_html() {
        assert_eq!(
            wrap_html("<p>x</p>"),
            "<html>\n<head>\n</head>\n<body>\n<p>x</p>\n</body>\n</html>"
        );
    }
}
