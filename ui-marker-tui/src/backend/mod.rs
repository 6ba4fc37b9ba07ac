//!
//! src/backend/mod.rs
//! Backend 层：配置、数据源与核心控制器的装配
//!

mod catalog_service;
mod config_service;
mod error_sink;
mod submitter;

pub use catalog_service::CoreService;
pub use config_service::{ConfigService, LocalConfigService};
pub use error_sink::StatusErrorSink;
pub use submitter::NavigationSubmitter;
