// ==========================================
// 非常食在庫通知 - 邮件投递
// ==========================================
// MailSender: 投递接口（外部协作者）
// OutboxMailer: 每封邮件写入出箱目录一个 JSON 文件,交由外部 MTA 发送
// LogMailer: 试运行,仅记录日志
// MemoryMailer: 内存收集（测试/嵌入调用）
// ==========================================

use crate::mail::error::MailError;
use crate::mail::message::MailMessage;
use chrono::Local;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// MailSender Trait
// ==========================================
pub trait MailSender {
    /// 投递邮件（单次尝试）
    fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}

// ==========================================
// OutboxMailer
// ==========================================
pub struct OutboxMailer {
    dir: PathBuf,
}

impl OutboxMailer {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(&self) -> String {
        format!(
            "{}-{}.json",
            Local::now().format("%Y%m%dT%H%M%S"),
            Uuid::new_v4()
        )
    }
}

impl MailSender for OutboxMailer {
    fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let write_err = |path: &Path, e: std::io::Error| MailError::OutboxWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        std::fs::create_dir_all(&self.dir).map_err(|e| write_err(&self.dir, e))?;

        let path = self.dir.join(self.file_name());
        let json = serde_json::to_string_pretty(message)?;
        std::fs::write(&path, json).map_err(|e| write_err(&path, e))?;

        info!(path = %path.display(), to = %message.to, subject = %message.subject, "邮件已写入出箱");
        Ok(())
    }
}

// ==========================================
// LogMailer
// ==========================================
#[derive(Debug, Default)]
pub struct LogMailer;

impl MailSender for LogMailer {
    fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        info!(to = %message.to, subject = %message.subject, "试运行: 未实际投递");
        debug!(body = %message.body, "邮件正文");
        Ok(())
    }
}

// ==========================================
// MemoryMailer
// ==========================================
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: RefCell<Vec<MailMessage>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.borrow().clone()
    }
}

impl MailSender for MemoryMailer {
    fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}
