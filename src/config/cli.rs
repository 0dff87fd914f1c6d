use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at the project directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    async fn read_to_string(&self, path: &str) -> Result<String> {
        let content = fs::read_to_string(self.resolve(path))?;
        Ok(content)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    /// Hidden files (leading `.`) are skipped.
    async fn list_files(&self, dir: &str, extensions: &[String]) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.resolve(dir))? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if !has_extension(&path, extensions) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed == ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested.cpp")).unwrap();
        fs::write(src.join("A.cpp"), "").unwrap();
        fs::write(src.join("B.cppm"), "").unwrap();
        fs::write(src.join("notes.md"), "").unwrap();
        fs::write(src.join("C.hpp"), "").unwrap();
        fs::write(src.join(".scratch.cpp"), "").unwrap();

        let storage = LocalStorage::new(dir.path());
        let exts = vec!["cpp".to_string(), "cppm".to_string()];
        let mut names = tokio_test::block_on(storage.list_files("src", &exts)).unwrap();
        names.sort();
        assert_eq!(names, vec!["A.cpp", "B.cppm"]);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        tokio_test::block_on(storage.write_file("docs/out.txt", b"hello")).unwrap();
        assert!(tokio_test::block_on(storage.exists("docs/out.txt")));
        assert_eq!(
            tokio_test::block_on(storage.read_to_string("docs/out.txt")).unwrap(),
            "hello"
        );
        assert!(!tokio_test::block_on(storage.exists("missing.txt")));
    }
}
