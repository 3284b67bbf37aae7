//! 应用配置
//! 默认值 + 环境变量覆盖

use log::LevelFilter;
use std::path::PathBuf;

use crate::utils::default_data_dir;

pub const ENV_DATA_DIR: &str = "CODE_PRACTICE_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "CODE_PRACTICE_LOG";
pub const ENV_LOG_FILE: &str = "CODE_PRACTICE_LOG_FILE";

const DEFAULT_DB_FILE: &str = "code_practice.db";

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database_file: DEFAULT_DB_FILE.to_string(),
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// 读取环境变量覆盖默认配置，无法识别的日志级别保持默认
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match level.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("ignoring unknown log level '{}'", level),
            }
        }
        if let Some(file) = lookup(ENV_LOG_FILE).filter(|f| !f.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.database_path().ends_with(DEFAULT_DB_FILE));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_DATA_DIR, "/tmp/practice"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FILE, "/tmp/practice/app.log"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_path(), PathBuf::from("/tmp/practice/code_practice.db"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/practice/app.log")));
    }

    #[test]
    fn test_bad_log_level_keeps_default() {
        let config = AppConfig::from_lookup(|key| {
            (key == ENV_LOG_LEVEL).then(|| "chatty".to_string())
        });
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
