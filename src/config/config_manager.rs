// ==========================================
// 非常食在庫通知 - 配置管理器
// ==========================================
// 职责: 多个属性存储分层查询（先命中者优先）,生成 AlertSettings
// 红线: 编排器只接收 AlertSettings,不直接读取环境
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::property_store::PropertyStore;
use crate::i18n::normalize_locale;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// 默认发件人名称
pub const DEFAULT_SENDER_NAME: &str = "Stock Alert";

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 收件地址（必填）
    pub const EMAIL: &str = "EMAIL";

    // 表格链接（未设置时使用数据源链接）
    pub const SHEET_URL: &str = "SHEET_URL";

    // 发件人名称
    pub const SENDER_NAME: &str = "SENDER_NAME";

    // 通知语言 (ja / en)
    pub const LOCALE: &str = "LOCALE";
}

// ==========================================
// AlertSettings - 单次运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertSettings {
    pub destination: Option<String>,
    pub sheet_url: Option<String>,
    pub sender_name: String,
    pub locale: String,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            destination: None,
            sheet_url: None,
            sender_name: DEFAULT_SENDER_NAME.to_string(),
            locale: crate::i18n::DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AlertSettings {
    pub fn with_destination(mut self, destination: &str) -> Self {
        self.destination = Some(destination.to_string());
        self
    }

    pub fn with_sheet_url(mut self, sheet_url: &str) -> Self {
        self.sheet_url = Some(sheet_url.to_string());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = normalize_locale(locale).to_string();
        self
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Default)]
pub struct ConfigManager {
    stores: Vec<Box<dyn PropertyStore>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加属性存储（越早加入优先级越高）
    pub fn with_store(mut self, store: Box<dyn PropertyStore>) -> Self {
        self.stores.push(store);
        self
    }

    /// 读取配置值（空白值视为未设置）
    pub fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        for store in &self.stores {
            if let Some(value) = store.get_property(key)? {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    debug!(key, store = %store.describe(), "配置命中");
                    return Ok(Some(trimmed.to_string()));
                }
            }
        }
        Ok(None)
    }

    /// 读取配置值，带默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 生成单次运行配置
    pub fn load_settings(&self) -> ConfigResult<AlertSettings> {
        let locale =
            self.get_config_or_default(config_keys::LOCALE, crate::i18n::DEFAULT_LOCALE)?;

        Ok(AlertSettings {
            destination: self.get_config_value(config_keys::EMAIL)?,
            sheet_url: self.get_config_value(config_keys::SHEET_URL)?,
            sender_name: self
                .get_config_or_default(config_keys::SENDER_NAME, DEFAULT_SENDER_NAME)?,
            locale: normalize_locale(&locale).to_string(),
        })
    }
}

/// 默认属性文件路径
///
/// 优先使用环境变量 STOCK_ALERT_PROPERTIES,否则为 <config_dir>/stock-alert/properties.json
pub fn get_default_properties_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STOCK_ALERT_PROPERTIES") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    dirs::config_dir().map(|dir| dir.join("stock-alert").join("properties.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::property_store::MemoryPropertyStore;

    #[test]
    fn test_layered_lookup() {
        let manager = ConfigManager::new()
            .with_store(Box::new(MemoryPropertyStore::new().with("EMAIL", "  ")))
            .with_store(Box::new(
                MemoryPropertyStore::new()
                    .with("EMAIL", "b@example.com")
                    .with("LOCALE", "en-GB"),
            ));

        let settings = manager.load_settings().unwrap();
        // 空白值跳过,落到下一层
        assert_eq!(settings.destination, Some("b@example.com".to_string()));
        assert_eq!(settings.locale, "en");
        assert_eq!(settings.sender_name, DEFAULT_SENDER_NAME);
        assert_eq!(settings.sheet_url, None);
    }

    #[test]
    fn test_first_store_wins() {
        let manager = ConfigManager::new()
            .with_store(Box::new(MemoryPropertyStore::new().with("EMAIL", "a@example.com")))
            .with_store(Box::new(MemoryPropertyStore::new().with("EMAIL", "b@example.com")));

        assert_eq!(
            manager.get_config_value(config_keys::EMAIL).unwrap(),
            Some("a@example.com".to_string())
        );
    }

    #[test]
    fn test_empty_manager_defaults() {
        let settings = ConfigManager::new().load_settings().unwrap();
        assert_eq!(settings, AlertSettings::default());
    }
}
