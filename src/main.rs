use clap::Parser;
use example_tools::domain::model::UpdateReport;
use example_tools::utils::{logger, validation::Validate};
use example_tools::{CliConfig, DocsEngine, LocalStorage, ReadmePipeline, ToolkitError};

const BANNER_WIDTH: usize = 70;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{}", rule);
    println!("Modern C++ Examples - Documentation Updater");
    println!("{}\n", rule);

    match run(&cli).await {
        Ok(report) => print_summary(&report),
        Err(e) => {
            tracing::error!(
                "❌ Documentation update failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: &CliConfig) -> Result<UpdateReport, ToolkitError> {
    let config = cli.to_docs_config()?;
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let storage = LocalStorage::new(cli.root.clone());
    let pipeline = ReadmePipeline::new(storage, config)?;
    DocsEngine::new(pipeline).run().await
}

fn print_summary(report: &UpdateReport) {
    if report.new_files.is_empty() {
        println!("ℹ️  No new files detected\n");
    } else {
        println!("🔍 Found {} new file(s):", report.new_files.len());
        for name in &report.new_files {
            println!("   - {}", name);
        }
        println!();
    }

    if report.readme_written {
        println!("✅ Updated {}\n", report.readme_path);
    } else if report.readme_changed {
        println!("📝 {} would change (dry run)\n", report.readme_path);
    } else {
        println!("✅ {} already up to date\n", report.readme_path);
    }

    if let Some(template) = &report.index_template {
        println!("{}", template);
        match &report.template_path {
            Some(path) => {
                println!("✅ Template saved to: {}", path);
                println!("\n⚠️  ACTION REQUIRED:");
                println!("   1. Review the template above");
                println!("   2. Add new files to appropriate sections in INDEX.md");
                println!("   3. Delete {} when done\n", path);
            }
            None => println!("ℹ️  Template not written\n"),
        }
    }

    let rule = "=".repeat(BANNER_WIDTH);
    println!("{}", rule);
    println!("SUMMARY");
    println!("{}", rule);
    println!("✅ Total source files: {}", report.total_files);
    println!(
        "✅ README.md: {}",
        if report.readme_written { "Updated" } else { "Unchanged" }
    );
    if report.new_files.is_empty() {
        println!("✅ INDEX.md: No updates needed");
    } else {
        println!(
            "⚠️  INDEX.md: Manual update needed for {} new file(s)",
            report.new_files.len()
        );
        if let Some(path) = &report.template_path {
            println!("   See: {}", path);
        }
    }
    println!("{}\n", rule);
}
