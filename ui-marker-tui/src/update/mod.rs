//!
//! src/update/mod.rs
//! Update 层：根据 Message 更新 Model
//!
//!     Commit  → 控制器的 on_*_change，拉取在后台进行
//!     Search  → 控制器的 on_search_triggered，提交成功后退出
//!

use ui_marker_core::FieldKind;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            app.focus = app.focus.next();
        }

        AppMessage::FocusPrev => {
            app.focus = app.focus.prev();
        }

        AppMessage::CursorUp => {
            app.cursor_mut(app.focus.field()).up();
        }

        AppMessage::CursorDown => {
            let kind = app.focus.field();
            let len = app.field(kind).options().len();
            app.cursor_mut(kind).down(len);
        }

        AppMessage::CursorFirst => {
            app.cursor_mut(app.focus.field()).first();
        }

        AppMessage::CursorLast => {
            let kind = app.focus.field();
            let len = app.field(kind).options().len();
            app.cursor_mut(kind).last(len);
        }

        AppMessage::Commit => commit(app),

        AppMessage::Search => search(app),

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 把光标所在的选项设为焦点列表的当前值
fn commit(app: &mut App) {
    let kind = app.focus.field();
    let index = app.cursor(kind).index;
    let Some(value) = app
        .field(kind)
        .options()
        .get(index)
        .map(|option| option.value.clone())
    else {
        return;
    };

    // 重选当前值不触发级联，子列表保持不变
    let result = if value == app.field(kind).value() {
        Ok(())
    } else {
        let controller = &mut app.core.controller;
        match kind {
            FieldKind::Application => controller.on_application_change(&value),
            FieldKind::Module => controller.on_module_change(&value),
            FieldKind::Function => controller.on_function_change(&value),
        }
    };

    match result {
        Ok(()) => {
            app.status_message = None;
            app.sync_cursors();
            if let Some(child) = kind.child().filter(|_| !value.is_empty()) {
                app.focus = FocusPanel::from_field(child);
            }
        }
        Err(e) => {
            log::warn!("Rejected {kind} change: {e}");
            app.set_status(e.to_string());
        }
    }
}

/// 三项齐全时提交，否则忽略并提示
fn search(app: &mut App) {
    let result = app
        .runtime
        .block_on(app.core.controller.on_search_triggered());

    match result {
        Ok(true) => {
            app.navigate_to = app.core.submitter.take_target();
            app.should_quit = true;
        }
        Ok(false) => {
            app.set_status("Select an application, module and function first");
        }
        Err(e) => {
            log::error!("Search failed: {e}");
            app.set_status(e.to_string());
        }
    }
}
