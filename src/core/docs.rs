//! Text-level operations behind the README updater: describing a source
//! file, rendering the alphabetical section, splicing it between markers,
//! and spotting files the README does not mention yet.

use crate::domain::model::SourceEntry;
use crate::utils::error::{Result, ToolkitError};
use regex::Regex;
use std::collections::HashSet;

pub const DEFAULT_START_MARKER: &str = "## 📋 **Complete Examples - Alphabetical Reference**";
pub const DEFAULT_END_MARKER: &str = "## 🏗️ **Project Structure**";

pub const UNREADABLE_DESCRIPTION: &str = "C++ example file";
pub const FALLBACK_DESCRIPTION: &str = "Modern C++ example demonstrating various features";

const SECTION_TRAILER: &str = "\n---\n\n";
const KEY_NAMES_PER_KIND: usize = 3;
const RULE_WIDTH: usize = 70;

const SUGGESTED_SECTIONS: [&str; 6] = [
    "C++ Standards Features (C++11/14/17/20/23)",
    "Design Patterns & Idioms",
    "Concurrency & Parallelism",
    "Real-Time & Embedded Systems",
    "Safety-Critical & Standards",
    "Other: _____________",
];

/// Pulls a one-line description and a few notable names out of a source file.
#[derive(Debug, Clone)]
pub struct DescriptionExtractor {
    block_comment: Regex,
    line_comment: Regex,
    namespace: Regex,
    class: Regex,
    function: Regex,
    max_chars: usize,
}

impl DescriptionExtractor {
    pub fn new(max_chars: usize) -> Result<Self> {
        Ok(Self {
            block_comment: Regex::new(r"(?s)/\*\*?(.*?)\*/")?,
            line_comment: Regex::new(r"(?m)^//\s*(.+?)(?:\n|$)")?,
            namespace: Regex::new(r"namespace\s+(\w+)")?,
            class: Regex::new(r"class\s+(\w+)(?:\s*[:{])")?,
            function: Regex::new(r"(?m)^(?:void|int|auto|bool)\s+(\w+)\s*\([^)]*\)")?,
            max_chars,
        })
    }

    /// Returns `(description, key_items)` for the given file contents.
    pub fn describe(&self, content: &str) -> (String, Vec<String>) {
        let description = self
            .block_description(content)
            .or_else(|| self.line_description(content))
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

        let mut key_items = Vec::new();
        for (label, re) in [
            ("Namespaces", &self.namespace),
            ("Classes", &self.class),
            ("Functions", &self.function),
        ] {
            let names = first_unique_captures(re, content, KEY_NAMES_PER_KIND);
            if !names.is_empty() {
                key_items.push(format!("{}: {}", label, names.join(", ")));
            }
        }

        (description, key_items)
    }

    pub fn entry(&self, file_name: &str, content: &str) -> SourceEntry {
        let (description, key_items) = self.describe(content);
        SourceEntry {
            file_name: file_name.to_string(),
            description,
            key_items,
        }
    }

    fn block_description(&self, content: &str) -> Option<String> {
        let body = self.block_comment.captures(content)?.get(1)?.as_str();
        body.split('\n')
            .map(|line| line.trim().trim_start_matches('*').trim())
            .find(|line| !line.is_empty() && !line.starts_with('='))
            .map(|line| truncate_chars(line, self.max_chars))
    }

    fn line_description(&self, content: &str) -> Option<String> {
        let text = self.line_comment.captures(content)?.get(1)?.as_str();
        let text = truncate_chars(text, self.max_chars);
        (!text.is_empty()).then_some(text)
    }
}

/// Entry used when a source file cannot be read at all.
pub fn unreadable_entry(file_name: &str) -> SourceEntry {
    SourceEntry {
        file_name: file_name.to_string(),
        description: UNREADABLE_DESCRIPTION.to_string(),
        key_items: Vec::new(),
    }
}

fn first_unique_captures(re: &Regex, content: &str, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    re.captures_iter(content)
        .take(limit)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Case-insensitive, stable ordering by file name.
pub fn sort_file_names(names: &mut [String]) {
    names.sort_by_cached_key(|name| name.to_lowercase());
}

#[derive(Debug, Clone)]
pub struct ListingOptions<'a> {
    pub heading: &'a str,
    /// Directory prefix used in entry links, e.g. `src`.
    pub link_dir: &'a str,
    pub max_key_items: usize,
}

/// Renders the alphabetical listing, grouped under one heading per first letter.
pub fn render_alphabetical_section(entries: &[SourceEntry], options: &ListingOptions<'_>) -> String {
    let mut out: Vec<String> = vec![
        format!("{}\n", options.heading),
        "Below is a complete alphabetical listing of all C++ example files in this repository. "
            .to_string(),
        "Each entry links to the source file with a brief description of its contents.\n"
            .to_string(),
    ];

    let mut current_letter: Option<String> = None;
    for (number, entry) in entries.iter().enumerate() {
        let letter = first_letter(&entry.file_name);
        if current_letter.as_deref() != Some(letter.as_str()) {
            if current_letter.is_some() {
                out.push(String::new());
            }
            out.push(format!("### {}\n", letter));
            current_letter = Some(letter);
        }

        out.push(format!(
            "{}. **[{}]({})**",
            number + 1,
            entry.file_name,
            link_path(options.link_dir, &entry.file_name)
        ));
        out.push(format!("   - {}", entry.description));
        for item in entry.key_items.iter().take(options.max_key_items) {
            out.push(format!("   - {}", item));
        }
        out.push(String::new());
    }

    out.join("\n")
}

fn first_letter(file_name: &str) -> String {
    file_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn link_path(dir: &str, file_name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        file_name.to_string()
    } else {
        format!("{}/{}", dir, file_name)
    }
}

/// Replaces `[start_marker, end_marker)` with `section` followed by a rule.
///
/// The end marker is searched for after the start marker. Text before the
/// start marker and from the end marker onward is copied unchanged.
pub fn splice_section(
    content: &str,
    start_marker: &str,
    end_marker: &str,
    section: &str,
) -> Result<String> {
    let start = content
        .find(start_marker)
        .ok_or_else(|| ToolkitError::MarkerNotFound {
            marker: start_marker.to_string(),
        })?;
    let after_start = start + start_marker.len();
    let end = content[after_start..]
        .find(end_marker)
        .map(|offset| after_start + offset)
        .ok_or_else(|| ToolkitError::MarkerNotFound {
            marker: end_marker.to_string(),
        })?;

    let mut spliced = String::with_capacity(content.len() + section.len());
    spliced.push_str(&content[..start]);
    spliced.push_str(section);
    spliced.push_str(SECTION_TRAILER);
    spliced.push_str(&content[end..]);
    Ok(spliced)
}

/// Finds `[name.ext]` link labels in a README.
#[derive(Debug, Clone)]
pub struct ReferenceScanner {
    pattern: Regex,
}

impl ReferenceScanner {
    pub fn new(extensions: &[String]) -> Result<Self> {
        let alternatives = extensions
            .iter()
            .map(|ext| regex::escape(ext))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\[(\w+\.(?:{}))\]", alternatives))?;
        Ok(Self { pattern })
    }

    pub fn referenced(&self, readme: &str) -> HashSet<String> {
        self.pattern
            .captures_iter(readme)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Source files missing from the README, in plain sorted order.
    pub fn new_files(&self, source_files: &[String], readme: &str) -> Vec<String> {
        let referenced = self.referenced(readme);
        let mut missing: Vec<String> = source_files
            .iter()
            .filter(|name| !referenced.contains(*name))
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        missing.sort();
        missing
    }
}

/// Builds the INDEX.md update template for newly detected files.
/// Returns an empty string when there is nothing new.
pub fn render_index_template(new_entries: &[SourceEntry], link_dir: &str) -> String {
    if new_entries.is_empty() {
        return String::new();
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = vec![
        format!("\n{}", rule),
        "NEW FILES DETECTED - INDEX.md UPDATE TEMPLATE".to_string(),
        rule.clone(),
        "\nAdd these files to appropriate sections in INDEX.md:\n".to_string(),
    ];

    for entry in new_entries {
        let name = &entry.file_name;
        out.push(format!("\n### {}", name));
        out.push(format!("- **File:** [{}]({})", name, link_path(link_dir, name)));
        out.push(format!("- **Description:** {}", entry.description));
        out.push("- **Topics:** [TODO: Add relevant topics/keywords]".to_string());
        out.push("- **Suggested Sections:**".to_string());
        for section in SUGGESTED_SECTIONS {
            out.push(format!("  - [ ] {}", section));
        }
        if !entry.key_items.is_empty() {
            out.push(format!("- **Key Items:** {}", entry.key_items.join(", ")));
        }
    }

    out.push(format!("\n{}", rule));
    out.push("Copy relevant sections above into INDEX.md".to_string());
    out.push(format!("{}\n", rule));
    out.join("\n")
}
