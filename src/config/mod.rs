pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::DocsConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "update-docs")]
#[command(about = "Regenerate the alphabetical example listing in README.md")]
pub struct CliConfig {
    /// Project root; src/ and README.md are resolved against it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the source directory (relative to the root)
    #[arg(long)]
    pub src_dir: Option<String>,

    /// Override the README path (relative to the root)
    #[arg(long)]
    pub readme: Option<String>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not write INDEX_UPDATE_TEMPLATE.txt when new files are found
    #[arg(long)]
    pub no_template: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any) and layers command-line overrides on top.
    pub fn to_docs_config(&self) -> Result<DocsConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                DocsConfig::from_file(path)?
            }
            None => DocsConfig::default(),
        };

        if let Some(src_dir) = &self.src_dir {
            config.paths.src_dir = src_dir.clone();
        }
        if let Some(readme) = &self.readme {
            config.paths.readme = readme.clone();
        }
        config.run.dry_run = self.dry_run;
        config.run.write_template = !self.no_template;

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_arguments() {
        let cli = CliConfig::parse_from(["update-docs"]);
        assert_eq!(cli.root, PathBuf::from("."));

        let config = cli.to_docs_config().unwrap();
        assert_eq!(config.src_dir(), "src");
        assert_eq!(config.readme_path(), "README.md");
        assert!(!config.dry_run());
        assert!(config.write_template());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[paths]\nsrc_dir = \"from_file\"\nreadme = \"FILE.md\"\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "update-docs",
            "--config",
            &path,
            "--src-dir",
            "from_flag",
            "--dry-run",
            "--no-template",
        ]);
        let config = cli.to_docs_config().unwrap();
        assert_eq!(config.src_dir(), "from_flag");
        assert_eq!(config.readme_path(), "FILE.md");
        assert!(config.dry_run());
        assert!(!config.write_template());
    }
}
