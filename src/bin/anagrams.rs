use clap::Parser;
use example_tools::core::anagram::{load_dictionary, render_report, AnagramIndex};
use example_tools::utils::logger;
use example_tools::ToolkitError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anagrams")]
#[command(about = "Group dictionary words by their sorted-character signature")]
struct Args {
    /// Whitespace-separated word list to use instead of the built-in dictionary
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Also list the anagrams of this word
    #[arg(short, long, conflicts_with = "json")]
    word: Option<String>,

    /// Print the anagram groups as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    if let Err(e) = run(&args) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), ToolkitError> {
    let index = match &args.dictionary {
        Some(path) => {
            tracing::info!("📁 Loading dictionary from: {}", path.display());
            let text = std::fs::read_to_string(path)?;
            AnagramIndex::build(load_dictionary(&text)?)
        }
        None => AnagramIndex::default(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(index.groups())?);
    } else {
        print!("{}", render_report(&index));
    }

    if let Some(word) = &args.word {
        let anagrams = index.anagrams_of(word);
        if anagrams.is_empty() {
            println!("for the word = {}, no anagrams found", word);
        } else {
            println!("for the word = {}, its anagrams are : {}", word, anagrams.join(", "));
        }
    }

    Ok(())
}
