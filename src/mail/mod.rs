// ==========================================
// 非常食在庫通知 - 邮件层
// ==========================================
// 职责: 通知邮件结构、校验、投递接口
// 投递: 单次尝试,不重试
// ==========================================

pub mod error;
pub mod message;
pub mod sender;

pub use error::MailError;
pub use message::MailMessage;
pub use sender::{LogMailer, MailSender, MemoryMailer, OutboxMailer};
