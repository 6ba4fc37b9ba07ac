//! 配置服务

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ui_marker_catalog::CatalogConfig;
use ui_marker_core::ControllerConfig;

use crate::view::theme::Theme;

/// 配置文件路径环境变量
pub const CONFIG_ENV: &str = "UI_MARKER_CONFIG";

/// 默认表单提交地址
pub const DEFAULT_FORM_ACTION: &str = "http://127.0.0.1:5000/ui_marker/pages";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 选项数据源
    pub catalog: CatalogConfig,
    /// 响应排序策略
    pub controller: ControllerConfig,
    /// 搜索表单的 action
    pub form_action: String,
    /// 日志文件，缺省时写入配置目录
    pub log_file: Option<PathBuf>,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            controller: ControllerConfig::default(),
            form_action: DEFAULT_FORM_ACTION.to_string(),
            log_file: None,
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 实际使用的日志文件路径
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| config_dir().join("ui-marker.log"))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;

    /// 配置是否已存在
    fn exists(&self) -> bool;

    /// 加载配置；首次运行时写出默认配置，便于用户修改
    fn load_or_create(&self) -> Result<AppConfig> {
        if self.exists() {
            return self.load();
        }
        let config = AppConfig::default();
        self.save(&config)?;
        Ok(config)
    }
}

/// 本地 JSON 配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$UI_MARKER_CONFIG`，否则为配置目录下的 `config.json`
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map_or_else(|| config_dir().join("config.json"), PathBuf::from);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.exists() {
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config {}", self.path.display()))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ui-marker-tui")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_marker_core::ResponseOrdering;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("absent.json"));
        let config = service.load().unwrap();
        assert_eq!(config.form_action, DEFAULT_FORM_ACTION);
        assert_eq!(
            config.controller.response_ordering,
            ResponseOrdering::LatestRequestWins
        );
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"catalog":{"kind":"file","path":"/tmp/catalog.json"},"controller":{"responseOrdering":"last_arrival_wins"}}"#,
        )
        .unwrap();

        let config = LocalConfigService::new(&path).load().unwrap();
        assert!(matches!(config.catalog, CatalogConfig::File { .. }));
        assert_eq!(config.controller, ControllerConfig::legacy());
        assert_eq!(config.form_action, DEFAULT_FORM_ACTION);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("nested/config.json"));
        let mut config = AppConfig::default();
        config.form_action = "http://intranet/pages".into();
        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap().form_action, "http://intranet/pages");
    }

    #[test]
    fn first_run_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("ui-marker/config.json"));
        assert!(!service.exists());

        let config = service.load_or_create().unwrap();
        assert!(service.exists());
        assert_eq!(config.form_action, DEFAULT_FORM_ACTION);

        let written = std::fs::read_to_string(service.path()).unwrap();
        assert!(written.contains("\"formAction\""));
        assert_eq!(service.load().unwrap().form_action, DEFAULT_FORM_ACTION);
    }

    #[test]
    fn existing_config_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"formAction":"http://intranet/pages"}"#).unwrap();

        let config = LocalConfigService::new(&path).load_or_create().unwrap();
        assert_eq!(config.form_action, "http://intranet/pages");
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"formAction":"http://intranet/pages"}"#
        );
    }
}
