//! 应用共享状态
//! 题库、提交历史、设置和评测器，由宿主外壳持有并传给各个命令

use anyhow::{Context, Result};
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::error::StoreResult;
use crate::services::{Evaluator, HistoryStore, KvStore, ProblemStore, SettingsService};

pub struct AppState {
    pub problems: Mutex<ProblemStore>,
    pub history: Mutex<HistoryStore>,
    pub settings: SettingsService,
    pub evaluator: Evaluator,
}

impl AppState {
    /// 打开配置指定的数据库文件
    pub fn open(config: &AppConfig) -> Result<Self> {
        let db_path = config.database_path();
        let kv = KvStore::open(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
        Self::from_store(kv).context("Failed to load persisted state")
    }

    /// 仅用于测试和临时会话
    pub fn in_memory() -> Result<Self> {
        let kv = KvStore::in_memory().context("Failed to open in-memory database")?;
        Self::from_store(kv).context("Failed to load persisted state")
    }

    fn from_store(kv: KvStore) -> StoreResult<Self> {
        Ok(Self {
            problems: Mutex::new(ProblemStore::load(kv.clone())?),
            history: Mutex::new(HistoryStore::load(kv.clone())?),
            settings: SettingsService::new(kv),
            evaluator: Evaluator::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_file_backed_state() {
        let dir = std::env::temp_dir().join(format!("code-practice-state-{}", std::process::id()));
        let config = AppConfig {
            data_dir: dir.clone(),
            ..AppConfig::default()
        };

        let state = AppState::open(&config).unwrap();
        assert_eq!(state.problems.lock().unwrap().list().len(), 3);
        assert!(state.history.lock().unwrap().is_empty());
        assert!(config.database_path().exists());

        drop(state);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_in_memory_state() {
        let state = AppState::in_memory().unwrap();
        assert_eq!(
            state.evaluator.heuristic_names(),
            vec!["hello-world", "sum", "factorial", "unrecognized"]
        );
    }
}
