use crate::domain::model::{DocsSnapshot, DocsUpdate, UpdateReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Paths are relative to the storage root.
pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_to_string(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// File names (not paths) directly inside `dir` whose extension is in `extensions`.
    fn list_files(
        &self,
        dir: &str,
        extensions: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn src_dir(&self) -> &str;
    fn readme_path(&self) -> &str;
    fn template_path(&self) -> &str;
    fn start_marker(&self) -> &str;
    fn end_marker(&self) -> &str;
    fn extensions(&self) -> &[String];
    fn max_description_chars(&self) -> usize;
    fn max_key_items(&self) -> usize;
    fn dry_run(&self) -> bool;
    fn write_template(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<DocsSnapshot>;
    async fn transform(&self, snapshot: DocsSnapshot) -> Result<DocsUpdate>;
    async fn load(&self, update: DocsUpdate) -> Result<UpdateReport>;
}
