//!
//! src/util/mod.rs
//! Util 层：终端的初始化和恢复
//!
//! 无论程序是正常退出还是发生错误，都必须调用 `restore_terminal`，
//! 否则终端会保持在原始模式。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
