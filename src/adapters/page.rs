use crate::core::escape::escape_html;
use crate::domain::ports::Page;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const CONTAINER_ID: &str = "projectsGrid";
pub const ERROR_ID: &str = "projectsError";

#[derive(Debug, Default)]
struct PageState {
    container: String,
    error_text: String,
    error_visible: bool,
}

/// 記憶體中的頁面：一個卡片容器和一個預設隱藏的錯誤提示
#[derive(Debug)]
pub struct HtmlPage {
    title: String,
    state: Mutex<PageState>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: Mutex::new(PageState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn container_html(&self) -> String {
        self.state().container.clone()
    }

    pub fn error_text(&self) -> String {
        self.state().error_text.clone()
    }

    pub fn error_visible(&self) -> bool {
        self.state().error_visible
    }

    /// 輸出完整的 HTML 文件
    pub fn render_document(&self) -> String {
        let state = self.state();
        let title = escape_html(&self.title);
        let display = if state.error_visible { "block" } else { "none" };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <main>
    <h1>{title}</h1>
    <p id="{ERROR_ID}" class="error" style="display: {display}">{error}</p>
    <div id="{CONTAINER_ID}" class="grid">{container}</div>
  </main>
</body>
</html>
"#,
            error = escape_html(&state.error_text),
            container = state.container,
        )
    }
}

impl Page for HtmlPage {
    fn replace_container(&self, html: String) {
        self.state().container = html;
    }

    fn show_error(&self, message: &str) {
        let mut state = self.state();
        state.error_text = message.to_string();
        state.error_visible = true;
    }
}
