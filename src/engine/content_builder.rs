// ==========================================
// 非常食在庫通知 - 通知内容构建
// ==========================================
// 职责: 分类结果 + 残日数 → Block 文档
// 规则:
// 1) survival_days < 7 → 残日数章节（< 3 为紧急文案,否则为警告文案）
// 2) dead 非空 → 期限切れ章节
// 3) soon_expired 非空 → 期限間近章节
// 4) 任一命中 → 前置 h1 标题（含基准日）,后置表格链接章节
// 5) 均未命中 → None（不发送）
// ==========================================

use crate::domain::document::{Block, Inline};
use crate::domain::stock::{ClassificationResult, Stock};
use crate::i18n::{normalize_locale, t, t_with_args};
use chrono::NaiveDate;

/// 残日数低于该值时发出警告
pub const SURVIVAL_WARNING_DAYS: u64 = 7;

/// 残日数低于该值时使用紧急文案
pub const SURVIVAL_URGENT_DAYS: u64 = 3;

/// 是否需要发送通知
pub fn should_alert(result: &ClassificationResult, survival_days: u64) -> bool {
    survival_days < SURVIVAL_WARNING_DAYS || result.has_dead() || result.has_soon_expired()
}

// ==========================================
// ContentBuilder
// ==========================================
pub struct ContentBuilder {
    locale: &'static str,
}

impl Default for ContentBuilder {
    fn default() -> Self {
        Self::new(crate::i18n::DEFAULT_LOCALE)
    }
}

impl ContentBuilder {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: normalize_locale(locale),
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// 构建通知文档
    ///
    /// # 返回
    /// - Some(blocks): 需要通知
    /// - None: 无需通知
    pub fn build(
        &self,
        result: &ClassificationResult,
        survival_days: u64,
        reference_date: NaiveDate,
        sheet_url: &str,
    ) -> Option<Vec<Block>> {
        if !should_alert(result, survival_days) {
            return None;
        }

        let mut blocks = vec![Block::heading(
            vec![
                Inline::text(t(self.locale, "alert.title")),
                Inline::Date(reference_date),
            ],
            1,
        )];

        if survival_days < SURVIVAL_WARNING_DAYS {
            let key = if survival_days < SURVIVAL_URGENT_DAYS {
                "alert.survival_urgent"
            } else {
                "alert.survival_warning"
            };
            blocks.push(Block::heading(vec![Inline::text(t(self.locale, key))], 2));
            blocks.push(Block::paragraph(vec![Inline::text(t_with_args(
                self.locale,
                "alert.survival_detail",
                &[
                    ("days", survival_days.to_string().as_str()),
                    ("total", result.living_total.to_string().as_str()),
                ],
            ))]));
        }

        if result.has_dead() {
            blocks.push(Block::heading(
                vec![Inline::text(t(self.locale, "alert.dead_heading"))],
                2,
            ));
            blocks.push(self.make_stock_list(&result.dead, reference_date));
        }

        if result.has_soon_expired() {
            blocks.push(Block::heading(
                vec![Inline::text(t(self.locale, "alert.soon_heading"))],
                2,
            ));
            blocks.push(self.make_stock_list(&result.soon_expired, reference_date));
        }

        blocks.push(Block::heading(
            vec![Inline::text(t(self.locale, "alert.link_heading"))],
            2,
        ));
        blocks.push(Block::paragraph(vec![Inline::link(
            vec![Inline::text(t(self.locale, "alert.link_text"))],
            sheet_url,
        )]));

        Some(blocks)
    }

    /// 库存列表
    pub fn make_stock_list(&self, stocks: &[Stock], reference_date: NaiveDate) -> Block {
        Block::List(
            stocks
                .iter()
                .map(|stock| self.make_stock_item(stock, reference_date))
                .collect(),
        )
    }

    /// 单个列表项: "<品名> （残<数量>食、期限：" + 日期 + [、残り N 日] + "）"
    ///
    /// 期限严格晚于基准日时才附加剩余天数
    pub fn make_stock_item(&self, stock: &Stock, reference_date: NaiveDate) -> Vec<Inline> {
        let left = if stock.good_thru > reference_date {
            let days_left = (stock.good_thru - reference_date).num_days();
            t_with_args(
                self.locale,
                "alert.item_days_left",
                &[("days", days_left.to_string().as_str())],
            )
        } else {
            String::new()
        };

        vec![
            Inline::text(t_with_args(
                self.locale,
                "alert.item_head",
                &[("name", stock.name.as_str()), ("amount", stock.amount.to_string().as_str())],
            )),
            Inline::Date(stock.good_thru),
            Inline::text(left),
            Inline::text(t(self.locale, "alert.item_tail")),
        ]
    }
}
