// ==========================================
// 非常食在庫通知 - 核心库
// ==========================================
// 技术栈: Rust + CSV/Excel (csv, calamine)
// 系统定位: 定期库存检查,生成 Markdown + HTML 通知邮件
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与文档模型
pub mod domain;

// 引擎层 - 分类 / 残日数 / 内容构建 / 编排
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 渲染层 - Markdown / HTML
pub mod render;

// 配置层 - 属性读取
pub mod config;

// 邮件层 - 通知投递
pub mod mail;

// 运行错误
pub mod error;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{Block, ClassificationResult, Inline, Stock, StockRow};

pub use engine::{
    AlertOrchestrator, ContentBuilder, RunOutcome, StockClassifier, SurvivalEstimator,
};

pub use config::{AlertSettings, ConfigManager};
pub use error::{AlertError, AlertResult};
pub use importer::{FileRowSource, InMemoryRowSource, RowSource};
pub use mail::{MailMessage, MailSender};
pub use render::{render_html, render_markdown, wrap_html};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "非常食在庫通知";
