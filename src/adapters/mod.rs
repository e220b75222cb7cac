// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod http;
pub mod page;
pub mod storage;

/// 固定的資料檔名
pub const PROJECTS_FILE: &str = "projects.json";
