//! 应用主消息枚举

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个列表
    FocusNext,

    /// 焦点移到上一个列表
    FocusPrev,

    /// 光标上移
    CursorUp,

    /// 光标下移
    CursorDown,

    /// 光标到第一项
    CursorFirst,

    /// 光标到最后一项
    CursorLast,

    /// 把光标所在的选项设为当前值
    Commit,

    /// 提交搜索
    Search,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
