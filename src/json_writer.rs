use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::core::TextIdTable;

/// Render the table as a JSON object indented by `indent` spaces.
///
/// Keys come out in sorted order and non-ASCII text is written as-is.
pub fn render_table(table: &TextIdTable, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    table
        .entries()
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}

/// Write the table to `path`, creating parent directories as needed.
///
/// Adds a trailing newline.
pub fn write_table(path: &Path, table: &TextIdTable, indent: usize) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = render_table(table, indent)?;

    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

/// Load a previously written table. The root must be an object of strings.
pub fn load_table(path: &Path) -> Result<TextIdTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;

    let map: Map<String, Value> = match value {
        Value::Object(map) => map,
        _ => bail!("Root of JSON file must be an object: {}", path.display()),
    };

    let mut entries = std::collections::BTreeMap::new();
    for (key, value) in map {
        match value {
            Value::String(s) => {
                entries.insert(key, s);
            }
            other => bail!(
                "Value for \"{}\" must be a string, found {}: {}",
                key,
                other,
                path.display()
            ),
        }
    }

    Ok(TextIdTable::from(entries))
}
