// ==========================================
// 非常食在庫通知 - 配置模块错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败 ({source_name}): {message}")]
    ReadError { source_name: String, message: String },

    #[error("配置解析失败 ({source_name}): {message}")]
    ParseError { source_name: String, message: String },

    #[error("配置值格式错误 (key: {key}): {message}")]
    ValueError { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
