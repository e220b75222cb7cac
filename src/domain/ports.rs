use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_location(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_title(&self) -> &str;
}

/// 取得 `projects.json` 原始內容。
///
/// 每次呼叫都必須繞過快取；非成功狀態回傳 `CardsError::Fetch`。
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self) -> Result<String>;
}

/// 頁面上的兩個元素：卡片容器與錯誤提示
pub trait Page: Send + Sync {
    fn replace_container(&self, html: String);
    fn show_error(&self, message: &str);
}

#[async_trait]
impl<T: DocumentFetcher + ?Sized> DocumentFetcher for Box<T> {
    async fn fetch(&self) -> Result<String> {
        (**self).fetch().await
    }
}
