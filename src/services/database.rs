// 键值存储服务
// 基于 SQLite 的持久化键值表，每次写入整体替换旧值

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{StoreError, StoreResult};

/// 题库
pub const PROBLEMS_KEY: &str = "codingProblems";
/// 提交历史（最新在前）
pub const HISTORY_KEY: &str = "submissionHistory";
/// 界面主题
pub const THEME_KEY: &str = "theme";

/// 键值存储
#[derive(Clone)]
pub struct KvStore {
    conn: Arc<Mutex<Connection>>,
    db_path: Option<PathBuf>,
}

impl KvStore {
    /// 打开（或创建）数据库文件
    pub fn open(db_path: &Path) -> StoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        let journal_mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        log::debug!("journal mode: {}", journal_mode);

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: Some(db_path.to_path_buf()),
        };
        store.initialize()?;
        log::info!("opened key-value store at {}", db_path.display());
        Ok(store)
    }

    /// 内存数据库，进程结束即丢弃
    pub fn in_memory() -> StoreResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(Connection::open_in_memory()?)),
            db_path: None,
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    fn initialize(&self) -> StoreResult<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::Lock)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// 读取原始字符串值
    pub fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self.conn.lock().map_err(|_| StoreError::Lock)?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?",
                rusqlite::params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 写入原始字符串值，替换旧值
    pub fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::Lock)?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// 读取并反序列化 JSON 值，格式不符时报告损坏
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupt {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }

    #[cfg(test)]
    pub(crate) fn execute_sql(&self, sql: &str) -> StoreResult<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::Lock)?;
        conn.execute_batch(sql)?;
        Ok(())
    }
}
