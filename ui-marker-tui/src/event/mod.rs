//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!     · poll_event      事件轮询，受 app.rs 调用
//!     · handle_event    事件分发，返回 AppMessage
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
