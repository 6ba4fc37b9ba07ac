mod common;
mod file;
mod http;

pub use file::FileCatalog;
pub use http::HttpCatalog;
