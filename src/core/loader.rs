use crate::core::render::{render_cards, NO_PROJECTS_HTML};
use crate::domain::model::{ProjectDocument, ProjectRecord};
use crate::domain::ports::{DocumentFetcher, Page};
use crate::utils::error::{CardsError, Result, GENERIC_LOAD_ERROR};
use std::sync::atomic::{AtomicU64, Ordering};

/// 一次載入的結果
#[derive(Debug)]
pub enum LoadOutcome {
    /// 已寫入指定數量的卡片
    Rendered(usize),
    /// 沒有專案，容器顯示提示訊息
    Empty,
    /// 載入失敗，錯誤提示已顯示，容器未變動
    Failed(CardsError),
    /// 已有較新的請求，本次結果被丟棄
    Stale,
}

impl LoadOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

/// 發放遞增的請求編號，只有最新的請求可以寫入頁面
#[derive(Debug, Default)]
pub struct ReloadGuard {
    latest: AtomicU64,
}

impl ReloadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

pub struct ProjectLoader<F: DocumentFetcher> {
    fetcher: F,
}

impl<F: DocumentFetcher> ProjectLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// 取得並解析專案清單；形狀不符時回傳空清單
    pub async fn load(&self) -> Result<Vec<ProjectRecord>> {
        let body = self.fetcher.fetch().await?;
        tracing::debug!("Fetched project data ({} bytes)", body.len());

        let value: serde_json::Value = serde_json::from_str(&body)?;
        let document = ProjectDocument::from_value(&value);

        tracing::debug!("Parsed {} projects", document.projects.len());
        Ok(document.projects)
    }

    /// 載入並寫入頁面。同時觸發多次時各自執行，最後寫入者為準。
    pub async fn load_and_render<P: Page + ?Sized>(&self, page: &P) -> LoadOutcome {
        let loaded = self.load().await;
        apply(loaded, page)
    }

    /// 同 [`load_and_render`](Self::load_and_render)，但過期的結果不會寫入頁面
    pub async fn reload<P: Page + ?Sized>(&self, guard: &ReloadGuard, page: &P) -> LoadOutcome {
        let token = guard.begin();
        let loaded = self.load().await;

        if !guard.is_current(token) {
            tracing::debug!("Discarding stale load (request #{})", token);
            return LoadOutcome::Stale;
        }

        apply(loaded, page)
    }
}

fn apply<P: Page + ?Sized>(loaded: Result<Vec<ProjectRecord>>, page: &P) -> LoadOutcome {
    match loaded {
        Ok(projects) if projects.is_empty() => {
            tracing::info!("No projects found");
            page.replace_container(NO_PROJECTS_HTML.to_string());
            LoadOutcome::Empty
        }
        Ok(projects) => {
            page.replace_container(render_cards(&projects));
            tracing::info!("✅ Rendered {} project cards", projects.len());
            LoadOutcome::Rendered(projects.len())
        }
        Err(e) => {
            tracing::error!("❌ Failed to load projects: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 {}", e.recovery_suggestion());
            page.show_error(GENERIC_LOAD_ERROR);
            LoadOutcome::Failed(e)
        }
    }
}
