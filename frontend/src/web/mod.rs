//! 浏览器 API 封装模块
//!
//! 所有对 window / fetch / localStorage / history 的访问都集中在此模块，
//! 组件层只依赖这里暴露的接口。

mod dialog;
mod http;
pub mod route;
pub mod router;
mod storage;

pub use dialog::{alert, confirm};
pub use http::{FetchHttpClient, read_file_part};
pub use storage::BrowserStorage;
