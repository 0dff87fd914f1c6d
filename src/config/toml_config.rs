use crate::core::docs::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ToolkitError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 100;
pub const DEFAULT_MAX_KEY_ITEMS: usize = 2;

/// Settings for the README updater. Every section is optional in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub paths: PathsConfig,
    pub markers: MarkersConfig,
    pub scan: ScanConfig,
    pub listing: ListingConfig,
    /// Runtime-only switches, never read from the file.
    #[serde(skip)]
    pub run: RunOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub src_dir: String,
    pub readme: String,
    pub index_template: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            src_dir: "src".to_string(),
            readme: "README.md".to_string(),
            index_template: "INDEX_UPDATE_TEMPLATE.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkersConfig {
    pub start: String,
    pub end: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["cpp".to_string(), "cppm".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub max_description_chars: usize,
    pub max_key_items: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_description_chars: DEFAULT_MAX_DESCRIPTION_CHARS,
            max_key_items: DEFAULT_MAX_KEY_ITEMS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub dry_run: bool,
    pub write_template: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            write_template: true,
        }
    }
}

impl DocsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToolkitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("paths.src_dir", &self.paths.src_dir)?;
        validation::validate_path("paths.readme", &self.paths.readme)?;
        validation::validate_path("paths.index_template", &self.paths.index_template)?;

        validation::validate_non_empty_string("markers.start", &self.markers.start)?;
        validation::validate_non_empty_string("markers.end", &self.markers.end)?;
        validation::validate_distinct("markers", &self.markers.start, &self.markers.end)?;

        validation::validate_extensions("scan.extensions", &self.scan.extensions)?;

        validation::validate_positive_number(
            "listing.max_description_chars",
            self.listing.max_description_chars,
            1,
        )?;
        validation::validate_positive_number("listing.max_key_items", self.listing.max_key_items, 1)?;

        Ok(())
    }
}

impl ConfigProvider for DocsConfig {
    fn src_dir(&self) -> &str {
        &self.paths.src_dir
    }

    fn readme_path(&self) -> &str {
        &self.paths.readme
    }

    fn template_path(&self) -> &str {
        &self.paths.index_template
    }

    fn start_marker(&self) -> &str {
        &self.markers.start
    }

    fn end_marker(&self) -> &str {
        &self.markers.end
    }

    fn extensions(&self) -> &[String] {
        &self.scan.extensions
    }

    fn max_description_chars(&self) -> usize {
        self.listing.max_description_chars
    }

    fn max_key_items(&self) -> usize {
        self.listing.max_key_items
    }

    fn dry_run(&self) -> bool {
        self.run.dry_run
    }

    fn write_template(&self) -> bool {
        self.run.write_template
    }
}

impl Validate for DocsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DocsConfig::from_toml_str("").unwrap();
        assert_eq!(config.src_dir(), "src");
        assert_eq!(config.readme_path(), "README.md");
        assert_eq!(config.start_marker(), DEFAULT_START_MARKER);
        assert_eq!(config.extensions(), ["cpp", "cppm"]);
        assert_eq!(config.max_key_items(), 2);
        assert!(!config.dry_run());
        assert!(config.write_template());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r###"
[paths]
src_dir = "examples"

[markers]
start = "## Examples"
end = "## Layout"

[listing]
max_key_items = 3
"###;

        let config = DocsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.src_dir(), "examples");
        assert_eq!(config.readme_path(), "README.md");
        assert_eq!(config.start_marker(), "## Examples");
        assert_eq!(config.max_key_items(), 3);
        assert_eq!(config.max_description_chars(), 100);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DOCS_TEST_SRC_DIR", "cpp_src");

        let toml_content = r#"
[paths]
src_dir = "${DOCS_TEST_SRC_DIR}"
readme = "${DOCS_TEST_UNSET_VARIABLE}"
"#;

        let config = DocsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.src_dir(), "cpp_src");
        assert_eq!(config.readme_path(), "${DOCS_TEST_UNSET_VARIABLE}");

        std::env::remove_var("DOCS_TEST_SRC_DIR");
    }

    #[test]
    fn test_config_validation() {
        let same_markers = DocsConfig::from_toml_str("[markers]\nstart = \"## A\"\nend = \"## A\"\n").unwrap();
        assert!(same_markers.validate().is_err());

        let no_exts = DocsConfig::from_toml_str("[scan]\nextensions = []\n").unwrap();
        assert!(no_exts.validate().is_err());

        let zero_items = DocsConfig::from_toml_str("[listing]\nmax_key_items = 0\n").unwrap();
        assert!(zero_items.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = DocsConfig::from_toml_str("[paths\nsrc_dir = 1").unwrap_err();
        assert!(matches!(err, ToolkitError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[paths]\nreadme = \"docs/README.md\"\n")
            .unwrap();

        let config = DocsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.readme_path(), "docs/README.md");
    }
}
