//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, _app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::SEARCH.matches(&key) || DefaultKeymap::SEARCH_ALT.matches(&key) {
        return AppMessage::Search;
    }

    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }

    // 部分终端把 Shift+Tab 报告为不带修饰键的 BackTab
    if DefaultKeymap::FOCUS_PREV.matches(&key)
        || (key.modifiers == KeyModifiers::NONE && key.code == KeyCode::BackTab)
        || DefaultKeymap::FOCUS_LEFT.matches(&key)
    {
        return AppMessage::FocusPrev;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) || DefaultKeymap::FOCUS_RIGHT.matches(&key) {
        return AppMessage::FocusNext;
    }

    handle_list_keys(key)
}

/// 处理焦点列表内的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    // ↑ 或 k: 上移
    if DefaultKeymap::NAV_UP.matches(&key) || DefaultKeymap::NAV_UP_VIM.matches(&key) {
        return AppMessage::CursorUp;
    }

    // ↓ 或 j: 下移
    if DefaultKeymap::NAV_DOWN.matches(&key) || DefaultKeymap::NAV_DOWN_VIM.matches(&key) {
        return AppMessage::CursorDown;
    }

    if DefaultKeymap::NAV_FIRST.matches(&key) {
        return AppMessage::CursorFirst;
    }

    if DefaultKeymap::NAV_LAST.matches(&key) {
        return AppMessage::CursorLast;
    }

    // Enter / 空格: 选定
    if DefaultKeymap::NAV_CONFIRM.matches(&key) || DefaultKeymap::NAV_CONFIRM_ALT.matches(&key) {
        return AppMessage::Commit;
    }

    AppMessage::Noop
}
