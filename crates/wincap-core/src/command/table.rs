use std::io::{self, Write};

use crate::window::WindowDescriptor;

const MIN_WIDTH: usize = 2;
const MAX_WIDTH: usize = 50;

/// Box-drawn table with column widths fitted to the content
pub struct TableFormatter {
    headers: Vec<&'static str>,
    widths: Vec<usize>,
}

impl TableFormatter {
    pub fn new(headers: Vec<&'static str>, rows: &[Vec<String>]) -> Self {
        let widths = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(MIN_WIDTH)
                    .clamp(MIN_WIDTH, MAX_WIDTH)
            })
            .collect();

        Self { headers, widths }
    }

    pub fn write_table(&self, out: &mut dyn Write, rows: &[Vec<String>]) -> io::Result<()> {
        writeln!(out, "{}", self.border('┌', '┬', '┐'))?;
        let header: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        writeln!(out, "{}", self.row(&header))?;
        writeln!(out, "{}", self.border('├', '┼', '┤'))?;
        for row in rows {
            writeln!(out, "{}", self.row(row))?;
        }
        writeln!(out, "{}", self.border('└', '┴', '┘'))
    }

    fn row(&self, cells: &[String]) -> String {
        let body: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, width)| truncate(cells.get(i).map_or("", String::as_str), *width))
            .collect();
        format!("│ {} │", body.join(" │ "))
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        let separator = mid.to_string();
        format!("{}{}{}", left, segments.join(separator.as_str()), right)
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters rather than bytes so multi-byte titles are cut safely.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

fn yes_no(value: bool) -> String {
    let label = if value { "yes" } else { "no" };
    label.to_string()
}

/// Preview listing of windows
pub fn write_windows_table(out: &mut dyn Write, windows: &[WindowDescriptor]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = windows
        .iter()
        .map(|w| {
            vec![
                w.window_id().to_string(),
                w.owner_name().to_string(),
                w.title().to_string(),
                yes_no(w.is_on_screen()),
                yes_no(w.is_active()),
            ]
        })
        .collect();

    let table = TableFormatter::new(vec!["ID", "App", "Title", "On-screen", "Active"], &rows);
    table.write_table(out, &rows)
}

/// Numbered menu of windows for interactive selection
pub fn write_window_menu(out: &mut dyn Write, windows: &[&WindowDescriptor]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = windows
        .iter()
        .enumerate()
        .map(|(i, w)| {
            vec![
                (i + 1).to_string(),
                w.window_id().to_string(),
                w.owner_name().to_string(),
                w.title().to_string(),
            ]
        })
        .collect();

    let table = TableFormatter::new(vec!["#", "ID", "App", "Title"], &rows);
    table.write_table(out, &rows)
}

/// Numbered menu of application names for interactive selection
pub fn write_app_menu(out: &mut dyn Write, apps: &[String]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = apps
        .iter()
        .enumerate()
        .map(|(i, app)| vec![(i + 1).to_string(), app.clone()])
        .collect();

    let table = TableFormatter::new(vec!["#", "App"], &rows);
    table.write_table(out, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_truncate_pads_short_values() {
        assert_eq!(truncate("ab", 4), "ab  ");
    }

    #[test]
    fn test_truncate_shortens_long_values() {
        assert_eq!(truncate("abcdefgh", 6), "abc...");
    }

    #[test]
    fn test_truncate_handles_multibyte() {
        assert_eq!(truncate("日本語のタイトル", 5), "日本...");
    }

    #[test]
    fn test_windows_table_layout() {
        let windows = vec![
            WindowDescriptor::new(10, "Safari", "Home", true, true),
            WindowDescriptor::new(11, "Safari - Private", "Docs", true, false),
        ];
        let text = render(|out| write_windows_table(out, &windows));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[1].contains("ID") && lines[1].contains("On-screen"));
        assert!(lines[3].contains("10") && lines[3].contains("Home") && lines[3].contains("yes"));
        assert!(lines[4].contains("Safari - Private") && lines[4].contains("no"));
        assert!(lines[5].starts_with('└'));

        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged table: {widths:?}");
    }

    #[test]
    fn test_app_menu_is_numbered_from_one() {
        let apps = vec!["Finder".to_string(), "Safari".to_string()];
        let text = render(|out| write_app_menu(out, &apps));
        assert!(text.contains("│ 1  │ Finder"));
        assert!(text.contains("│ 2  │ Safari"));
    }

    #[test]
    fn test_window_menu_lists_ids() {
        let window = WindowDescriptor::new(77, "Terminal", "zsh", true, false);
        let text = render(|out| write_window_menu(out, &[&window]));
        assert!(text.contains("77"));
        assert!(text.contains("Terminal"));
    }
}
