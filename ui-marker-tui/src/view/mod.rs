//!
//! src/view/mod.rs
//! View 层：只读取 Model，渲染到终端
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
