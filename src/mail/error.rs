// ==========================================
// 非常食在庫通知 - 邮件模块错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("缺少必填字段: {0}")]
    MissingField(&'static str),

    #[error("收件地址无效: {0}")]
    InvalidAddress(String),

    #[error("出箱写入失败 ({path}): {message}")]
    OutboxWriteError { path: String, message: String },

    #[error("邮件序列化失败: {0}")]
    SerializeError(#[from] serde_json::Error),
}
