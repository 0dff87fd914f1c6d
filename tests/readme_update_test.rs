use anyhow::Result;
use example_tools::core::docs::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use example_tools::{DocsConfig, DocsEngine, LocalStorage, ReadmePipeline, ToolkitError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PREAMBLE: &str = "# Modern C++ Examples\n\nIntro text that must survive.\n\n";
const TAIL: &str = "## 🏗️ **Project Structure**\n\n```\nsrc/\n```\n";

fn write_project(root: &Path, readme: &str) -> Result<()> {
    let src = root.join("src");
    fs::create_dir_all(&src)?;
    fs::write(
        src.join("MoveSemantics.cpp"),
        "/**\n * ====\n * Move semantics walkthrough\n */\nnamespace demo {}\nclass Buffer {\n};\nvoid run() {}\n",
    )?;
    fs::write(
        src.join("lambdaCaptures.cpp"),
        "// Lambda capture modes\nint main() { return 0; }\n",
    )?;
    fs::write(src.join("Modules.cppm"), "export module demo;\n")?;
    fs::write(src.join("README.txt"), "not a source file")?;
    fs::write(root.join("README.md"), readme)?;
    Ok(())
}

fn readme_with_listing(listing: &str) -> String {
    format!(
        "{}{}\n\n{}\n{}",
        PREAMBLE, DEFAULT_START_MARKER, listing, TAIL
    )
}

async fn run(root: &Path, config: DocsConfig) -> example_tools::Result<example_tools::domain::model::UpdateReport> {
    let storage = LocalStorage::new(root);
    let pipeline = ReadmePipeline::new(storage, config)?;
    DocsEngine::new(pipeline).run().await
}

#[tokio::test]
async fn test_updates_section_and_preserves_surroundings() -> Result<()> {
    let dir = TempDir::new()?;
    let readme = readme_with_listing("1. **[MoveSemantics.cpp](src/MoveSemantics.cpp)**\n");
    write_project(dir.path(), &readme)?;

    let report = run(dir.path(), DocsConfig::default()).await?;

    assert_eq!(report.total_files, 3);
    assert!(report.readme_written);
    assert_eq!(report.new_files, vec!["Modules.cppm", "lambdaCaptures.cpp"]);

    let updated = fs::read_to_string(dir.path().join("README.md"))?;
    assert!(updated.starts_with(&format!("{}{}", PREAMBLE, DEFAULT_START_MARKER)));
    assert!(updated.ends_with(&format!("\n---\n\n{}", TAIL)));

    // case-insensitive order: lambdaCaptures, Modules, MoveSemantics
    let lambda = updated.find("1. **[lambdaCaptures.cpp](src/lambdaCaptures.cpp)**").unwrap();
    let modules = updated.find("2. **[Modules.cppm](src/Modules.cppm)**").unwrap();
    let moves = updated.find("3. **[MoveSemantics.cpp](src/MoveSemantics.cpp)**").unwrap();
    assert!(lambda < modules && modules < moves);

    assert!(updated.contains("### L\n"));
    assert!(updated.contains("### M\n"));
    assert!(updated.contains("   - Lambda capture modes\n"));
    assert!(updated.contains("   - Move semantics walkthrough\n   - Namespaces: demo\n   - Classes: Buffer\n"));
    assert!(!updated.contains("Functions: run"));
    assert!(!updated.contains("README.txt"));

    let template_path = report.template_path.expect("template should be written");
    let template = fs::read_to_string(dir.path().join(template_path))?;
    assert!(template.contains("### Modules.cppm"));
    assert!(template.contains("### lambdaCaptures.cpp"));
    assert!(!template.contains("### MoveSemantics.cpp"));

    Ok(())
}

#[tokio::test]
async fn test_second_run_is_stable() -> Result<()> {
    let dir = TempDir::new()?;
    write_project(dir.path(), &readme_with_listing("old\n"))?;

    run(dir.path(), DocsConfig::default()).await?;
    let first = fs::read_to_string(dir.path().join("README.md"))?;

    let report = run(dir.path(), DocsConfig::default()).await?;
    let second = fs::read_to_string(dir.path().join("README.md"))?;

    assert_eq!(first, second);
    assert!(!report.readme_changed);
    assert!(!report.readme_written);
    assert!(report.new_files.is_empty());
    assert!(report.index_template.is_none());
    Ok(())
}

#[tokio::test]
async fn test_missing_marker_leaves_readme_untouched() -> Result<()> {
    let dir = TempDir::new()?;
    let readme = format!("{}{}\nlist\n", PREAMBLE, DEFAULT_START_MARKER);
    write_project(dir.path(), &readme)?;

    let err = run(dir.path(), DocsConfig::default()).await.unwrap_err();
    assert!(matches!(err, ToolkitError::MarkerNotFound { ref marker } if marker == DEFAULT_END_MARKER));
    assert_eq!(err.exit_code(), 1);

    assert_eq!(fs::read_to_string(dir.path().join("README.md"))?, readme);
    assert!(!dir.path().join("INDEX_UPDATE_TEMPLATE.txt").exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_inputs_are_reported() -> Result<()> {
    let dir = TempDir::new()?;
    let err = run(dir.path(), DocsConfig::default()).await.unwrap_err();
    assert!(matches!(err, ToolkitError::SourceDirNotFound { .. }));

    fs::create_dir_all(dir.path().join("src"))?;
    let err = run(dir.path(), DocsConfig::default()).await.unwrap_err();
    assert!(matches!(err, ToolkitError::ReadmeNotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn test_dry_run_writes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let readme = readme_with_listing("stale\n");
    write_project(dir.path(), &readme)?;

    let mut config = DocsConfig::default();
    config.run.dry_run = true;
    let report = run(dir.path(), config).await?;

    assert!(report.readme_changed);
    assert!(!report.readme_written);
    assert!(report.template_path.is_none());
    assert!(report.index_template.is_some());
    assert_eq!(fs::read_to_string(dir.path().join("README.md"))?, readme);
    assert!(!dir.path().join("INDEX_UPDATE_TEMPLATE.txt").exists());
    Ok(())
}

#[tokio::test]
async fn test_custom_markers_and_source_dir() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir_all(dir.path().join("cpp"))?;
    fs::write(dir.path().join("cpp/Alpha.cpp"), "// Alpha example\n")?;
    fs::write(
        dir.path().join("README.md"),
        "## Examples\n[Alpha.cpp](cpp/Alpha.cpp)\n## Layout\nrest\n",
    )?;

    let config = DocsConfig::from_toml_str(
        "[paths]\nsrc_dir = \"cpp\"\n[markers]\nstart = \"## Examples\"\nend = \"## Layout\"\n",
    )?;
    let report = run(dir.path(), config).await?;
    assert!(report.new_files.is_empty());

    let updated = fs::read_to_string(dir.path().join("README.md"))?;
    assert!(updated.starts_with("## Examples\n\n"));
    assert!(updated.contains("1. **[Alpha.cpp](cpp/Alpha.cpp)**\n   - Alpha example\n"));
    assert!(updated.ends_with("\n---\n\n## Layout\nrest\n"));
    Ok(())
}

#[tokio::test]
async fn test_unreadable_source_gets_generic_description() -> Result<()> {
    let dir = TempDir::new()?;
    write_project(dir.path(), &readme_with_listing("old\n"))?;
    fs::write(dir.path().join("src/Broken.cpp"), [0xff, 0xfe, 0x00, 0xc3])?;

    let report = run(dir.path(), DocsConfig::default()).await?;
    assert_eq!(report.total_files, 4);
    assert!(report.new_files.contains(&"Broken.cpp".to_string()));

    let updated = fs::read_to_string(dir.path().join("README.md"))?;
    assert!(updated.contains("1. **[Broken.cpp](src/Broken.cpp)**\n   - C++ example file\n"));
    assert!(updated.contains("### B\n"));
    Ok(())
}
