// ==========================================
// 非常食在庫通知 - 运行错误类型
// ==========================================
// 分类:
// - 配置错误（收件地址缺失）: 分类前中止,退出码 1
// - 输入错误（日期/数量无法解析）: 中止,不发送部分通知
// - 投递错误: 直接上抛,不重试
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use crate::mail::MailError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("未配置收件地址 (EMAIL)")]
    MissingDestination,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Mail(#[from] MailError),
}

impl AlertError {
    /// 进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            AlertError::MissingDestination => 1,
            _ => 2,
        }
    }
}

pub type AlertResult<T> = Result<T, AlertError>;
