use serde::{Deserialize, Serialize};

/// One scanned source file and what was pulled out of its header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub file_name: String,
    pub description: String,
    pub key_items: Vec<String>,
}

/// Everything the extract step read from disk.
#[derive(Debug, Clone)]
pub struct DocsSnapshot {
    /// Sorted case-insensitively by file name.
    pub entries: Vec<SourceEntry>,
    pub readme: String,
    /// Source files not yet referenced in the README, sorted.
    pub new_files: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DocsUpdate {
    pub readme: String,
    pub readme_changed: bool,
    pub new_files: Vec<String>,
    pub index_template: Option<String>,
    pub total_files: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    pub readme_path: String,
    pub readme_written: bool,
    pub readme_changed: bool,
    pub template_path: Option<String>,
    pub index_template: Option<String>,
    pub new_files: Vec<String>,
    pub total_files: usize,
}
