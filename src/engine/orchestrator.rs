// ==========================================
// 非常食在庫通知 - 引擎编排器
// ==========================================
// 用途: 分类 → 残日数 → 内容构建 → 渲染 → 投递
// 红线: 收件地址缺失时,在读取数据前中止
// 红线: 无需通知时不调用投递接口
// ==========================================

use crate::config::AlertSettings;
use crate::domain::document::Block;
use crate::engine::{ContentBuilder, StockClassifier, SurvivalEstimator};
use crate::error::{AlertError, AlertResult};
use crate::i18n::t_with_args;
use crate::importer::RowSource;
use crate::mail::{MailMessage, MailSender};
use crate::render::{format_date, render_html, render_markdown, wrap_html};
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

// ==========================================
// RunOutcome - 单次运行结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 已投递通知
    Sent(MailMessage),
    /// 无需通知
    NoAlert,
}

// ==========================================
// AlertOrchestrator - 引擎编排器
// ==========================================
#[derive(Default)]
pub struct AlertOrchestrator {
    classifier: StockClassifier,
}

impl AlertOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 执行一次通知流程
    ///
    /// # 参数
    /// - source: 库存表数据源
    /// - mailer: 邮件投递
    /// - settings: 运行配置（收件地址、表格链接、语言）
    /// - reference_date: 基准日
    #[instrument(skip_all, fields(reference_date = %reference_date))]
    pub fn run(
        &self,
        source: &dyn RowSource,
        mailer: &dyn MailSender,
        settings: &AlertSettings,
        reference_date: NaiveDate,
    ) -> AlertResult<RunOutcome> {
        let to = settings
            .destination
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(AlertError::MissingDestination)?;

        // ==========================================
        // 步骤1: 分类 + 残日数
        // ==========================================
        let rows = source.read_rows()?;
        let result = self.classifier.classify(&rows, reference_date)?;
        let survival_days = SurvivalEstimator::estimate(result.living_total);
        info!(
            living_total = result.living_total,
            survival_days, "残日数估算完成"
        );

        // ==========================================
        // 步骤2: 内容构建
        // ==========================================
        let sheet_url = settings.sheet_url.clone().unwrap_or_else(|| source.link());
        let builder = ContentBuilder::new(&settings.locale);
        let blocks = match builder.build(&result, survival_days, reference_date, &sheet_url) {
            Some(blocks) => blocks,
            None => {
                info!("No alert needed");
                return Ok(RunOutcome::NoAlert);
            }
        };
        debug!(blocks = blocks.len(), "通知文档构建完成");

        // ==========================================
        // 步骤3: 渲染 + 投递
        // ==========================================
        let message = self.compose(&blocks, to, settings, builder.locale(), reference_date);
        message.validate()?;
        mailer.send(&message)?;

        info!(to = %message.to, subject = %message.subject, "通知已发送");
        Ok(RunOutcome::Sent(message))
    }

    fn compose(
        &self,
        blocks: &[Block],
        to: &str,
        settings: &AlertSettings,
        locale: &str,
        reference_date: NaiveDate,
    ) -> MailMessage {
        MailMessage {
            name: settings.sender_name.clone(),
            subject: t_with_args(
                locale,
                "mail.subject",
                &[("date", format_date(reference_date).as_str())],
            ),
            to: to.to_string(),
            html_body: wrap_html(&render_html(blocks)),
            body: render_markdown(blocks),
        }
    }
}
