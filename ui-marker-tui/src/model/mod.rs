//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! 选择状态本身由核心库的 `SelectionController` 持有，
//! 这里只保存界面相关的部分：焦点、光标和状态栏消息。
//!

mod app;
mod cursor;
mod focus;

pub use app::App;
pub use cursor::ListCursor;
pub use focus::FocusPanel;
