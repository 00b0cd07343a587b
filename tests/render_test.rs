// ==========================================
// 通知渲染集成测试
// ==========================================
// 测试目标: ContentBuilder → Markdown / HTML 完整输出
// ==========================================

#[path = "test_helpers.rs"]
mod test_helpers;

use pretty_assertions::assert_eq;
use stock_alert::domain::{Block, ClassificationResult, Inline, Stock};
use stock_alert::engine::ContentBuilder;
use stock_alert::render::{render_html, render_markdown, wrap_html};
use test_helpers::ymd;

fn sample_document() -> Vec<Block> {
    let today = ymd(2024, 1, 15);
    let result = ClassificationResult {
        dead: vec![Stock {
            name: "乾パン".to_string(),
            amount: 6,
            good_thru: ymd(2024, 1, 10),
        }],
        soon_expired: vec![
            Stock {
                name: "水".to_string(),
                amount: 3,
                good_thru: ymd(2024, 1, 15),
            },
            Stock {
                name: "アルファ米".to_string(),
                amount: 5,
                good_thru: ymd(2024, 1, 16),
            },
        ],
        living_total: 8,
    };

    ContentBuilder::default()
        .build(&result, 2, today, "https://example.com/sheet")
        .unwrap()
}

#[test]
fn test_markdown_document() {
    let expected = "\
# 非常食在庫通知 - 2024-01-15

## ❗️非常食の残りが三日と保ちません

残り 2 日（8食）

## ⚠️期限切れの非常食があります

- 乾パン （残6食、期限：2024-01-10）

## ⚠️期限が近づいている非常食があります

- 水 （残3食、期限：2024-01-15）
- アルファ米 （残5食、期限：2024-01-16、残り 1 日）

## シートのリンク

シートへのリンク";

    assert_eq!(render_markdown(&sample_document()), expected);
}

#[test]
fn test_html_document() {
    let expected = "\
<h1>非常食在庫通知 - 2024-01-15</h1>
<h2>❗️非常食の残りが三日と保ちません</h2>
<p>残り 2 日（8食）</p>
<h2>⚠️期限切れの非常食があります</h2>
<ul><li>乾パン （残6食、期限：2024-01-10）</li></ul>
<h2>⚠️期限が近づいている非常食があります</h2>
<ul><li>水 （残3食、期限：2024-01-15）</li><li>アルファ米 （残5食、期限：2024-01-16、残り 1 日）</li></ul>
<h2>シートのリンク</h2>
<p><a href=\"https://example.com/sheet\">シートへのリンク</a></p>";

    let html = render_html(&sample_document());
    assert_eq!(html, expected);

    let wrapped = wrap_html(&html);
    assert!(wrapped.starts_with("<html>\n<head>\n</head>\n<body>\n<h1>"));
    assert!(wrapped.ends_with("</p>\n</body>\n</html>"));
}

#[test]
fn test_link_child_text_agrees() {
    let doc = vec![Block::paragraph(vec![Inline::link(
        vec![Inline::text("表"), Inline::Italic("へ".into())],
        "https://example.com/s",
    )])];

    assert_eq!(render_markdown(&doc), "表*へ*");
    assert_eq!(render_html(&doc), "<p><a href=\"https://example.com/s\">表<em>へ</em></a></p>");
}
