use crate::core::docs::{
    render_alphabetical_section, render_index_template, sort_file_names, splice_section,
    unreadable_entry, DescriptionExtractor, ListingOptions, ReferenceScanner,
};
use crate::core::{ConfigProvider, DocsSnapshot, DocsUpdate, Pipeline, Storage, UpdateReport};
use crate::utils::error::{Result, ToolkitError};
use std::path::Path;

/// Regenerates the alphabetical listing in a README from a source directory.
pub struct ReadmePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    extractor: DescriptionExtractor,
    scanner: ReferenceScanner,
}

impl<S: Storage, C: ConfigProvider> ReadmePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let extractor = DescriptionExtractor::new(config.max_description_chars())?;
        let scanner = ReferenceScanner::new(config.extensions())?;
        Ok(Self {
            storage,
            config,
            extractor,
            scanner,
        })
    }

    fn source_path(&self, file_name: &str) -> String {
        Path::new(self.config.src_dir())
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }

    fn link_dir(&self) -> String {
        self.config.src_dir().replace('\\', "/")
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReadmePipeline<S, C> {
    async fn extract(&self) -> Result<DocsSnapshot> {
        let src_dir = self.config.src_dir();
        let readme_path = self.config.readme_path();

        if !self.storage.exists(src_dir).await {
            return Err(ToolkitError::SourceDirNotFound {
                path: src_dir.to_string(),
            });
        }
        if !self.storage.exists(readme_path).await {
            return Err(ToolkitError::ReadmeNotFound {
                path: readme_path.to_string(),
            });
        }

        let mut names = self
            .storage
            .list_files(src_dir, self.config.extensions())
            .await?;
        sort_file_names(&mut names);
        tracing::debug!("Source files: {:?}", names);

        let mut entries = Vec::with_capacity(names.len());
        for name in &names {
            let path = self.source_path(name);
            match self.storage.read_to_string(&path).await {
                Ok(content) => entries.push(self.extractor.entry(name, &content)),
                Err(e) => {
                    tracing::warn!("Could not read {}: {}", path, e);
                    entries.push(unreadable_entry(name));
                }
            }
        }

        let readme = self.storage.read_to_string(readme_path).await?;
        let new_files = self.scanner.new_files(&names, &readme);

        Ok(DocsSnapshot {
            entries,
            readme,
            new_files,
        })
    }

    async fn transform(&self, snapshot: DocsSnapshot) -> Result<DocsUpdate> {
        let link_dir = self.link_dir();
        let section = render_alphabetical_section(
            &snapshot.entries,
            &ListingOptions {
                heading: self.config.start_marker(),
                link_dir: &link_dir,
                max_key_items: self.config.max_key_items(),
            },
        );

        let readme = splice_section(
            &snapshot.readme,
            self.config.start_marker(),
            self.config.end_marker(),
            &section,
        )?;
        let readme_changed = readme != snapshot.readme;

        let index_template = if snapshot.new_files.is_empty() {
            None
        } else {
            let new_entries: Vec<_> = snapshot
                .entries
                .iter()
                .filter(|entry| snapshot.new_files.contains(&entry.file_name))
                .cloned()
                .collect();
            Some(render_index_template(&new_entries, &link_dir))
        };

        Ok(DocsUpdate {
            readme,
            readme_changed,
            new_files: snapshot.new_files,
            index_template,
            total_files: snapshot.entries.len(),
        })
    }

    async fn load(&self, update: DocsUpdate) -> Result<UpdateReport> {
        let readme_path = self.config.readme_path().to_string();
        let dry_run = self.config.dry_run();

        let readme_written = !dry_run && update.readme_changed;
        if readme_written {
            self.storage
                .write_file(&readme_path, update.readme.as_bytes())
                .await?;
        } else if dry_run {
            tracing::info!("Dry run: README left untouched");
        } else {
            tracing::info!("README already up to date");
        }

        let mut template_path = None;
        if let Some(template) = &update.index_template {
            if !dry_run && self.config.write_template() {
                let path = self.config.template_path().to_string();
                self.storage.write_file(&path, template.as_bytes()).await?;
                template_path = Some(path);
            }
        }

        Ok(UpdateReport {
            readme_path,
            readme_written,
            readme_changed: update.readme_changed,
            template_path,
            index_template: update.index_template,
            new_files: update.new_files,
            total_files: update.total_files,
        })
    }
}
