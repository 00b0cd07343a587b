// ==========================================
// 非常食在庫通知 - 配置层
// ==========================================
// 职责: 属性读取（环境变量 / JSON 文件 / 内存）,生成运行配置
// ==========================================

pub mod config_manager;
pub mod error;
pub mod property_store;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, get_default_properties_path, AlertSettings, ConfigManager, DEFAULT_SENDER_NAME,
};
pub use error::{ConfigError, ConfigResult};
pub use property_store::{EnvPropertyStore, FilePropertyStore, MemoryPropertyStore, PropertyStore};
