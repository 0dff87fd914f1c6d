use crate::core::Pipeline;
use crate::domain::model::UpdateReport;
use crate::utils::error::Result;

pub struct DocsEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DocsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<UpdateReport> {
        tracing::info!("Scanning source files...");
        let snapshot = self.pipeline.extract().await?;
        tracing::info!(
            "Found {} source files ({} new)",
            snapshot.entries.len(),
            snapshot.new_files.len()
        );

        tracing::info!("Regenerating alphabetical section...");
        let update = self.pipeline.transform(snapshot).await?;
        tracing::debug!("README changed: {}", update.readme_changed);

        tracing::info!("Writing documentation...");
        let report = self.pipeline.load(update).await?;
        tracing::info!("README: {}", report.readme_path);

        Ok(report)
    }
}
