//! 焦点状态

use ui_marker_core::FieldKind;

/// 当前焦点所在的选择列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    #[default]
    Application,
    Module,
    Function,
}

impl FocusPanel {
    /// 下一个列表（循环）
    pub fn next(self) -> Self {
        match self {
            FocusPanel::Application => FocusPanel::Module,
            FocusPanel::Module => FocusPanel::Function,
            FocusPanel::Function => FocusPanel::Application,
        }
    }

    /// 上一个列表（循环）
    pub fn prev(self) -> Self {
        match self {
            FocusPanel::Application => FocusPanel::Function,
            FocusPanel::Module => FocusPanel::Application,
            FocusPanel::Function => FocusPanel::Module,
        }
    }

    pub fn field(self) -> FieldKind {
        match self {
            FocusPanel::Application => FieldKind::Application,
            FocusPanel::Module => FieldKind::Module,
            FocusPanel::Function => FieldKind::Function,
        }
    }

    pub fn from_field(field: FieldKind) -> Self {
        match field {
            FieldKind::Application => FocusPanel::Application,
            FieldKind::Module => FocusPanel::Module,
            FieldKind::Function => FocusPanel::Function,
        }
    }
}
