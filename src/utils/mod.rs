use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};

#[cfg(target_os = "macos")]
const DATA_SUBDIR: &str = "Library/Application Support/code-practice";

#[cfg(not(target_os = "macos"))]
const DATA_SUBDIR: &str = ".local/share/code-practice";

pub fn default_data_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(DATA_SUBDIR),
        None => PathBuf::from("data"),
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// 以创建时间（毫秒）作为 id，同一毫秒内递增保证不重复
pub fn next_timestamp_id() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let next = if now > last { now } else { last + 1 };
        match LAST_ID.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

/// 已加载的 id 也要纳入单调序列，避免与持久化记录冲突
pub fn observe_id(id: i64) {
    LAST_ID.fetch_max(id, Ordering::SeqCst);
}

/// 截取前 `max_chars` 个字符，超出部分以 "..." 结尾
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
