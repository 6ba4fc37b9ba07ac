//! 组装核心服务上下文

use std::sync::Arc;

use anyhow::{Context, Result};
use ui_marker_catalog::create_catalog;
use ui_marker_core::{SelectionController, ServiceContext};

use super::config_service::AppConfig;
use super::{NavigationSubmitter, StatusErrorSink};

/// 前端持有的后端句柄
pub struct CoreService {
    pub controller: SelectionController,
    pub submitter: NavigationSubmitter,
    pub failures: StatusErrorSink,
}

impl CoreService {
    /// 按配置创建数据源并加载应用列表
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let catalog = create_catalog(&config.catalog)
            .await
            .context("Failed to open catalog")?;
        let submitter = NavigationSubmitter::new(config.form_action.clone());
        let failures = StatusErrorSink::new();

        let ctx = ServiceContext::new(
            catalog,
            Arc::new(submitter.clone()),
            Arc::new(failures.clone()),
        );
        let controller = SelectionController::bootstrap(ctx, &config.controller)
            .await
            .context("Failed to load applications")?;

        Ok(Self {
            controller,
            submitter,
            failures,
        })
    }
}
