//! 列表光标

use ui_marker_core::SelectField;

/// 列表中高亮的行，与字段的当前值相互独立
///
/// 字段的选项被清空重建后（`revision` 变化），光标跳回字段的当前值。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub index: usize,
    revision: u64,
}

impl ListCursor {
    /// 跟随字段的选项变化
    pub fn sync(&mut self, field: &SelectField) {
        if self.revision != field.revision() {
            self.revision = field.revision();
            self.index = field.selected_index().unwrap_or(0);
        }
        let last = field.options().len().saturating_sub(1);
        self.index = self.index.min(last);
    }

    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }
}
