// 日志初始化
// fern 分发到 stderr，可选追加写入日志文件

use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::Path;

/// 初始化全局日志，重复调用返回错误
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("rusqlite", LevelFilter::Warn)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log dir {}", parent.display()))?;
        }
        let file = fern::log_file(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Logger already initialized")?;
    Ok(())
}
