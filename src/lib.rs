//! 本地刷题练习核心
//!
//! 题库与提交历史保存在 SQLite 键值表中，评测器按启发式规则推算输出并逐个比对测试用例。
//! 界面层（题目列表、编辑器、弹窗）不在本 crate 内，它通过 [`commands`] 调用核心。

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use config::AppConfig;
pub use error::{EvaluationFault, StoreError, ValidationError};
pub use models::{Difficulty, NewProblem, Problem, Submission, TestCase, TestResult, Theme};
pub use services::{build_submission, Evaluator, HistoryStore, ProblemStore};
pub use state::AppState;

/// 初始化日志并打开应用状态
pub fn init(config: &AppConfig) -> anyhow::Result<AppState> {
    logging::init(config.log_level, config.log_file.as_deref())?;
    log::info!(
        "code-practice {} starting on {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );
    AppState::open(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sets_up_logging_and_state() {
        let dir = std::env::temp_dir().join(format!("code-practice-init-{}", std::process::id()));
        let log_file = dir.join("logs").join("app.log");
        let config = AppConfig {
            data_dir: dir.clone(),
            log_level: log::LevelFilter::Debug,
            log_file: Some(log_file.clone()),
            ..AppConfig::default()
        };

        let state = init(&config).unwrap();
        assert_eq!(state.problems.lock().unwrap().list().len(), 3);
        assert!(log_file.exists());

        // 全局日志只能初始化一次
        assert!(logging::init(log::LevelFilter::Info, None).is_err());

        drop(state);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
