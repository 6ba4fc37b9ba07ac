//! 表单提交：生成导航地址

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ui_marker_core::{CoreError, CoreResult, FormSubmitter, SearchQuery};
use url::Url;

/// 按 GET 表单的方式提交：把三个参数拼到 action 上，保存导航地址
///
/// 终端里没有浏览器可以跳转，地址在退出时打印出来。
#[derive(Clone)]
pub struct NavigationSubmitter {
    form_action: String,
    target: Arc<Mutex<Option<Url>>>,
}

impl NavigationSubmitter {
    pub fn new(form_action: impl Into<String>) -> Self {
        Self {
            form_action: form_action.into(),
            target: Arc::new(Mutex::new(None)),
        }
    }

    /// 取出最近一次提交的导航地址
    pub fn take_target(&self) -> Option<Url> {
        self.target.lock().ok().and_then(|mut t| t.take())
    }
}

#[async_trait]
impl FormSubmitter for NavigationSubmitter {
    async fn submit(&self, query: &SearchQuery) -> CoreResult<()> {
        let url = query.to_url(&self.form_action)?;
        log::info!("Navigating to {url}");
        let mut target = self
            .target
            .lock()
            .map_err(|e| CoreError::SubmitFailed(e.to_string()))?;
        *target = Some(url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_navigation_url() {
        let submitter = NavigationSubmitter::new("http://127.0.0.1:5000/ui_marker/pages");
        submitter
            .submit(&SearchQuery {
                application_id: "APP1".into(),
                module_id: "M1".into(),
                function_id: "F1".into(),
            })
            .await
            .unwrap();

        let url = submitter.take_target().unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/ui_marker/pages?application_id=APP1&module_id=M1&function_id=F1"
        );
        assert!(submitter.take_target().is_none());
    }

    #[tokio::test]
    async fn bad_action_is_config_error() {
        let submitter = NavigationSubmitter::new("not a url");
        let result = submitter
            .submit(&SearchQuery {
                application_id: "A".into(),
                module_id: "M".into(),
                function_id: "F".into(),
            })
            .await;
        assert!(matches!(result, Err(CoreError::ConfigError(_))));
    }
}
