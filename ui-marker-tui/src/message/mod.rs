//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，
//! Update 层根据 Message 来更新 Model。
//!

mod app;

pub use app::AppMessage;
