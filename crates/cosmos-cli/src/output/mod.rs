use std::sync::OnceLock;

use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};

pub mod table;

pub use table::TableOptions;

/// Render a page model in the requested format.
///
/// JSON and raw output serialize `value`; the table layout is produced by
/// `table`, since every page decides its own columns.
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<String>
where
    T: Serialize,
    F: FnOnce(TableOptions) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(table(table_options())),
    }
}

/// Print a page model in the requested format.
pub fn output<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(TableOptions) -> String,
{
    let rendered = render(value, format, table)?;
    println!("{rendered}");
    Ok(())
}

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

/// Fix table options for the rest of the run. Later calls are ignored.
pub fn init(flags: &GlobalFlags) {
    let _ = TABLE_OPTIONS.set(TableOptions::from_env(flags));
}

fn table_options() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or_default()
}

/// `key: value` lines, for single-record pages.
#[must_use]
pub fn key_values(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(key, value)| format!("{key:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
