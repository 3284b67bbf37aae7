// 界面设置
// 主题保存在 theme 键下，值为 "light" 或 "dark"

use crate::error::StoreResult;
use crate::models::Theme;
use crate::services::database::{KvStore, THEME_KEY};

pub struct SettingsService {
    kv: KvStore,
}

impl SettingsService {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// 未保存或无法识别时为浅色主题
    pub fn theme(&self) -> StoreResult<Theme> {
        let theme = match self.kv.get_raw(THEME_KEY)?.as_deref().map(str::trim) {
            Some("dark") | Some("\"dark\"") => Theme::Dark,
            Some("light") | Some("\"light\"") | None => Theme::Light,
            Some(other) => {
                log::warn!("unknown theme '{}', using light", other);
                Theme::Light
            }
        };
        Ok(theme)
    }

    pub fn set_theme(&self, theme: Theme) -> StoreResult<()> {
        self.kv.set_raw(THEME_KEY, theme.as_str())
    }

    pub fn toggle_theme(&self) -> StoreResult<Theme> {
        let next = self.theme()?.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
