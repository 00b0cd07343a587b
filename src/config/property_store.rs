// ==========================================
// 非常食在庫通知 - 属性存储
// ==========================================
// 职责: 键值属性读取（收件地址、表格链接等）
// 实现:
// - EnvPropertyStore: 环境变量 STOCK_ALERT_<KEY>
// - FilePropertyStore: 扁平 JSON 对象文件
// - MemoryPropertyStore: 内存键值（测试/嵌入调用）
// 红线: 只读,不写回
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "STOCK_ALERT_";

// ==========================================
// PropertyStore Trait
// ==========================================
pub trait PropertyStore {
    /// 读取属性
    ///
    /// # 返回
    /// - Ok(Some(value)): 属性存在
    /// - Ok(None): 属性不存在
    /// - Err: 存储读取失败
    fn get_property(&self, key: &str) -> ConfigResult<Option<String>>;

    /// 存储描述（日志用）
    fn describe(&self) -> String;
}

// ==========================================
// EnvPropertyStore
// ==========================================
#[derive(Debug, Clone)]
pub struct EnvPropertyStore {
    prefix: String,
}

impl Default for EnvPropertyStore {
    fn default() -> Self {
        Self::with_prefix(ENV_PREFIX)
    }
}

impl EnvPropertyStore {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_uppercase())
    }
}

impl PropertyStore for EnvPropertyStore {
    fn get_property(&self, key: &str) -> ConfigResult<Option<String>> {
        match std::env::var(self.var_name(key)) {
            Ok(v) => Ok(Some(v)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::ValueError {
                key: key.to_string(),
                message: "环境变量不是合法的 UTF-8".to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("env:{}*", self.prefix)
    }
}

// ==========================================
// FilePropertyStore
// ==========================================
// 文件格式: {"EMAIL": "someone@example.com", "SHEET_URL": "https://..."}
#[derive(Debug, Clone)]
pub struct FilePropertyStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePropertyStore {
    /// 加载 JSON 属性文件
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })?;

        let json: HashMap<String, serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                source_name: path.display().to_string(),
                message: e.to_string(),
            })?;

        // 标量统一转为字符串,null 视为未设置
        let values = json
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some((k, s)),
                other => Some((k, other.to_string())),
            })
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }
}

impl PropertyStore for FilePropertyStore {
    fn get_property(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

// ==========================================
// MemoryPropertyStore
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MemoryPropertyStore {
    values: HashMap<String, String>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn get_property(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
