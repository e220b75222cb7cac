pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    file::FileFetcher, http::HttpFetcher, page::HtmlPage, storage::LocalStorage, PROJECTS_FILE,
};
pub use config::site_config::SiteConfig;
pub use core::escape::escape_html;
pub use core::loader::{LoadOutcome, ProjectLoader, ReloadGuard};
pub use core::render::{render_card, render_cards};
pub use domain::model::{ProjectDocument, ProjectLinks, ProjectRecord};
pub use domain::ports::{ConfigProvider, DocumentFetcher, Page, Storage};
pub use utils::error::{CardsError, Result};
