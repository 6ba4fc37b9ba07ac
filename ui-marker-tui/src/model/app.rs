//!
//! src/model/app.rs
//! 应用主状态
//!
//! App {
//!     should_quit,            // 是否退出
//!     focus,                  // 焦点所在列表
//!     cursors,                // 三个列表各自的光标
//!     status_message,         // 状态栏消息
//!     navigate_to,            // 提交后的导航地址，退出时打印
//!     core,                   // 控制器、提交器、失败上报
//!     runtime,                // tokio 运行时句柄，搜索提交时阻塞等待
//! }
//!

use tokio::runtime::Handle;
use ui_marker_core::{FieldKind, SelectField, SelectionState};
use url::Url;

use super::{FocusPanel, ListCursor};
use crate::backend::CoreService;

pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点列表
    pub focus: FocusPanel,

    /// 按 `FieldKind::index` 排列的光标
    pub cursors: [ListCursor; 3],

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 提交成功后的导航地址
    pub navigate_to: Option<Url>,

    pub core: CoreService,

    pub runtime: Handle,
}

impl App {
    /// 创建新的应用实例
    pub fn new(core: CoreService, runtime: Handle) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::default(),
            cursors: [ListCursor::default(); 3],
            status_message: None,
            navigate_to: None,
            core,
            runtime,
        };
        app.sync_cursors();
        app
    }

    pub fn selection(&self) -> &SelectionState {
        self.core.controller.state()
    }

    pub fn field(&self, kind: FieldKind) -> &SelectField {
        self.selection().field(kind)
    }

    pub fn cursor(&self, kind: FieldKind) -> ListCursor {
        self.cursors[kind.index()]
    }

    pub fn cursor_mut(&mut self, kind: FieldKind) -> &mut ListCursor {
        &mut self.cursors[kind.index()]
    }

    pub fn is_loading(&self, kind: FieldKind) -> bool {
        self.core.controller.is_loading(kind)
    }

    /// 应用所有已完成的拉取结果
    pub fn pump(&mut self) -> usize {
        let applied = self.core.controller.drain_ready();
        if applied > 0 {
            self.sync_cursors();
        }
        applied
    }

    /// 让光标跟随被重建的选项列表
    pub fn sync_cursors(&mut self) {
        for kind in FieldKind::ALL {
            let field = self.core.controller.state().field(kind);
            self.cursors[kind.index()].sync(field);
        }
    }

    /// 最近一次拉取失败
    pub fn last_failure(&self) -> Option<String> {
        self.core.failures.last_failure()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.core.failures.clear();
    }
}
