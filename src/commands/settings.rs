// 设置命令模块

use serde::{Deserialize, Serialize};

use crate::models::Theme;
use crate::state::AppState;

/// 主题传输对象
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
    pub theme: Theme,
    pub editor_theme: String,
}

impl From<Theme> for ThemeDto {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            editor_theme: theme.editor_theme().to_string(),
        }
    }
}

/// 获取当前主题
pub async fn get_theme(state: &AppState) -> Result<ThemeDto, String> {
    state
        .settings
        .theme()
        .map(ThemeDto::from)
        .map_err(|e| e.to_string())
}

/// 切换深浅主题
pub async fn toggle_theme(state: &AppState) -> Result<ThemeDto, String> {
    state
        .settings
        .toggle_theme()
        .map(ThemeDto::from)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toggle_theme() {
        let state = AppState::in_memory().unwrap();
        assert_eq!(get_theme(&state).await.unwrap().theme, Theme::Light);

        let toggled = toggle_theme(&state).await.unwrap();
        assert_eq!(toggled.theme, Theme::Dark);
        assert_eq!(toggled.editor_theme, "vs-dark");
        assert_eq!(get_theme(&state).await.unwrap().theme, Theme::Dark);
    }
}
