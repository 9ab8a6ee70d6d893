use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrowest `COLUMNS` value worth fitting a table into.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    /// Options for the current process: stdout tty, `NO_COLOR`, `COLUMNS`.
    #[must_use]
    pub fn from_env(flags: &GlobalFlags) -> Self {
        use std::io::IsTerminal;

        Self::detect(
            flags,
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var("COLUMNS").ok().as_deref(),
        )
    }

    /// Color only applies to table output; `auto` also needs a tty, no
    /// `NO_COLOR` and no `--quiet`.
    #[must_use]
    pub fn detect(
        flags: &GlobalFlags,
        is_tty: bool,
        no_color: bool,
        columns: Option<&str>,
    ) -> Self {
        let table = flags.format == OutputFormat::Table;
        let color = match flags.color {
            ColorMode::Always => table,
            ColorMode::Never => false,
            ColorMode::Auto => table && is_tty && !no_color && !flags.quiet,
        };
        let max_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);

        Self { max_width, color }
    }
}

/// Render an aligned table for string rows.
///
/// Columns shrink (widest first) to fit `max_width`; overflowing cells end
/// in `…`. Numeric-looking cells are right aligned.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    if rows.is_empty() {
        return String::from("(nothing to show)");
    }

    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let cell = pad(&truncate_text(value, *width), *width, looks_numeric(value));
                if options.color {
                    colorize(value, cell)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_WIDTH: usize = 4;

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap an already padded cell in an ANSI color chosen by its raw value.
fn colorize(raw: &str, cell: String) -> String {
    let lower = raw.to_ascii_lowercase();
    let code = match lower.as_str() {
        "graded" | "ok" | "remote" | "yes" => Some("32"),
        "submitted" | "pending" | "to do" | "placeholder" => Some("33"),
        "deadline" | "error" | "no" => Some("31"),
        "live class" | "meeting" => Some("36"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{cell}\u{1b}[0m"),
        None => cell,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "status", "title"];
        let rows = vec![
            vec!["1".to_string(), "pending".to_string(), "short".to_string()],
            vec![
                "200".to_string(),
                "submitted".to_string(),
                "a much longer title".to_string(),
            ],
        ];

        let table = render_rows(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // numeric ids are right aligned
        assert!(lines[2].starts_with("   1"));
        assert!(lines[3].ends_with("a much longer title"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["title", "grade"];
        let rows = vec![vec![
            "Robotics Ethics Essay and a very long subtitle".to_string(),
            "92/100 (92%)".to_string(),
        ]];

        let table = render_rows(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("data row");
        assert!(row.chars().count() <= 40);
        assert!(row.contains('…'));
        assert!(row.ends_with("92/100 (92%)"));
    }

    #[test]
    fn color_wraps_known_statuses_only() {
        let colored = colorize("Graded", "Graded  ".to_string());
        assert!(colored.starts_with("\u{1b}[32m"));
        assert_eq!(colorize("Intro", "Intro".to_string()), "Intro");
    }

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            color,
            api_url: None,
        }
    }

    #[test]
    fn auto_color_needs_tty_and_no_opt_out() {
        let table = flags(OutputFormat::Table, ColorMode::Auto, false);
        assert!(TableOptions::detect(&table, true, false, None).color);
        assert!(!TableOptions::detect(&table, false, false, None).color);
        assert!(!TableOptions::detect(&table, true, true, None).color);

        let quiet = flags(OutputFormat::Table, ColorMode::Auto, true);
        assert!(!TableOptions::detect(&quiet, true, false, None).color);
    }

    #[test]
    fn forced_color_applies_to_tables_only() {
        let always = flags(OutputFormat::Table, ColorMode::Always, false);
        assert!(TableOptions::detect(&always, false, true, None).color);

        let json = flags(OutputFormat::Json, ColorMode::Always, false);
        assert!(!TableOptions::detect(&json, true, false, None).color);

        let never = flags(OutputFormat::Table, ColorMode::Never, false);
        assert!(!TableOptions::detect(&never, true, false, None).color);
    }

    #[test]
    fn columns_below_minimum_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never, false);
        assert_eq!(
            TableOptions::detect(&table, true, false, Some("120")).max_width,
            Some(120)
        );
        assert_eq!(TableOptions::detect(&table, true, false, Some("20")).max_width, None);
        assert_eq!(TableOptions::detect(&table, true, false, Some("wide")).max_width, None);
    }

    #[test]
    fn empty_rows_render_placeholder_text() {
        assert_eq!(render_rows(&["a"], &[], PLAIN), "(nothing to show)");
    }
}
