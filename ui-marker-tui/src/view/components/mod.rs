//! 界面组件

pub mod select;
pub mod statusbar;
