//! 拉取失败上报：写日志并留给状态栏显示

use std::sync::{Arc, Mutex};

use ui_marker_core::{ErrorSink, FetchFailure, LogErrorSink};

#[derive(Clone, Default)]
pub struct StatusErrorSink {
    last: Arc<Mutex<Option<String>>>,
}

impl StatusErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次失败的描述
    pub fn last_failure(&self) -> Option<String> {
        self.last.lock().ok().and_then(|l| l.clone())
    }

    pub fn clear(&self) {
        if let Ok(mut last) = self.last.lock() {
            *last = None;
        }
    }
}

impl ErrorSink for StatusErrorSink {
    fn report(&self, failure: &FetchFailure) {
        LogErrorSink.report(failure);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(failure.to_string());
        }
    }
}
