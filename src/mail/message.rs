// ==========================================
// 非常食在庫通知 - 通知邮件
// ==========================================
// 字段: name / subject / to / htmlBody / body
// ==========================================

use crate::mail::error::MailError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailMessage {
    /// 发件人显示名
    pub name: String,
    pub subject: String,
    pub to: String,
    /// HTML 正文（已包裹为完整文档）
    pub html_body: String,
    /// 纯文本正文（Markdown）
    pub body: String,
}

impl MailMessage {
    /// 校验邮件
    pub fn validate(&self) -> Result<(), MailError> {
        if self.to.trim().is_empty() {
            return Err(MailError::MissingField("to"));
        }
        if !is_valid_email(&self.to) {
            return Err(MailError::InvalidAddress(self.to.clone()));
        }
        if self.subject.is_empty() {
            return Err(MailError::MissingField("subject"));
        }
        if self.body.is_empty() && self.html_body.is_empty() {
            return Err(MailError::MissingField("body"));
        }
        Ok(())
    }
}

/// 校验收件地址（支持 "Name <addr@domain>" 格式）
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let address = match (email.find('<'), email.rfind('>')) {
        (Some(start), Some(end)) if start < end => &email[start + 1..end],
        _ => email,
    };

    email_address::EmailAddress::is_valid(address.trim())
}
