//! Regex extraction of marker-wrapped string literals.
//!
//! A marker call looks like `EASYTR("Hello")`. The captured text id keeps
//! the surrounding quotes (`"Hello"`) unless quote stripping is enabled.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use regex::Regex;

use super::table::TextIdTable;

/// How text ids are captured from a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Capture only the text between the quotes.
    pub strip_quotes: bool,
    /// Record every marker call on a line instead of only the first.
    pub all_matches: bool,
}

pub struct Extractor {
    pattern: Regex,
    all_matches: bool,
}

impl Extractor {
    pub fn new(marker: &str, options: ExtractOptions) -> Result<Self> {
        if marker.is_empty() {
            bail!("Marker must not be empty");
        }

        // Greedy `.*` stretches the first match to the last `")` on the line.
        let body = if options.all_matches { ".*?" } else { ".*" };
        let capture = if options.strip_quotes {
            format!(r#""({})""#, body)
        } else {
            format!(r#"("{}")"#, body)
        };
        let source = format!(r"{}\({}\)", regex::escape(marker), capture);
        let pattern = Regex::new(&source)
            .with_context(|| format!("Failed to build pattern for marker \"{}\"", marker))?;

        Ok(Self {
            pattern,
            all_matches: options.all_matches,
        })
    }

    /// Text ids found on a single line.
    pub fn extract_line<'a>(&self, line: &'a str) -> Vec<&'a str> {
        if self.all_matches {
            self.pattern
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .collect()
        } else {
            self.pattern
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| vec![m.as_str()])
                .unwrap_or_default()
        }
    }

    /// Scan `text` line by line, inserting every text id into `table`.
    ///
    /// Returns the number of matches, duplicates included.
    pub fn extract_text(&self, text: &str, table: &mut TextIdTable) -> usize {
        let mut count = 0;
        // `\r\n`, `\n` and a bare `\r` all end a line; the empty pieces never match
        for line in text.split(['\n', '\r']) {
            for id in self.extract_line(line) {
                table.insert(id);
                count += 1;
            }
        }
        count
    }

    /// Read `path` and extract its text ids into `table`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn extract_file(&self, path: &Path, table: &mut TextIdTable) -> Result<usize> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(self.extract_text(&text, table))
    }
}
