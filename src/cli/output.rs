//! CLI output formatting utilities
//!
//! This module renders route listings as a fixed-width bordered table.

use crate::models::RouteListing;

const INDEX_WIDTH: usize = 4;
const ORIGIN_WIDTH: usize = 30;
const DESTINATION_WIDTH: usize = 20;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// This prevents panics when truncating strings with multi-byte UTF-8
/// characters. Truncated values end with "..." and fit the column width;
/// widths too narrow for the ellipsis get a hard cut instead.
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars < 4 {
        return s.chars().take(max_chars).collect();
    }
    let truncated: String = s.chars().take(max_chars - 3).collect();
    format!("{truncated}...")
}

/// Render routes as a bordered table.
///
/// Columns are the origin and the destination leg; the first-leg station is
/// deliberately not displayed. Rows are numbered positionally from 1. An
/// empty listing renders an informational message and no borders.
#[must_use]
pub fn format_route_table(routes: &[RouteListing]) -> String {
    if routes.is_empty() {
        return "Route list is empty.\n".to_string();
    }

    let line = format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(ORIGIN_WIDTH),
        "-".repeat(DESTINATION_WIDTH)
    );

    let mut out = String::new();
    out.push_str(&line);
    out.push('\n');
    out.push_str(&format!(
        "| {:^INDEX_WIDTH$} | {:^ORIGIN_WIDTH$} | {:^DESTINATION_WIDTH$} |\n",
        "№", "Origin", "Destination"
    ));
    out.push_str(&line);
    out.push('\n');

    for (idx, route) in routes.iter().enumerate() {
        out.push_str(&format!(
            "| {:^INDEX_WIDTH$} | {:^ORIGIN_WIDTH$} | {:^DESTINATION_WIDTH$} |\n",
            idx + 1,
            truncate_str(&route.start_point, ORIGIN_WIDTH),
            truncate_str(&route.second_station, DESTINATION_WIDTH)
        ));
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Print a route table to stdout
pub fn print_route_table(routes: &[RouteListing]) {
    print!("{}", format_route_table(routes));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(start: &str, first: &str, second: &str) -> RouteListing {
        RouteListing {
            start_point: start.to_string(),
            first_station: first.to_string(),
            second_station: second.to_string(),
        }
    }

    #[test]
    fn test_empty_listing_message() {
        let rendered = format_route_table(&[]);
        assert_eq!(rendered, "Route list is empty.\n");
        assert!(!rendered.contains('+'));
    }

    #[test]
    fn test_table_geometry() {
        let rendered = format_route_table(&[listing("Moscow", "Tver", "Kazan")]);
        let lines: Vec<&str> = rendered.lines().collect();

        // border, header, border, row, border
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[4]);
        assert!(lines[1].contains('№'));
        assert!(lines[1].contains("Origin"));
        assert!(lines[1].contains("Destination"));
        // every line has the same display width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_rows_numbered_from_one() {
        let rendered =
            format_route_table(&[listing("A", "B", "C"), listing("D", "E", "F")]);
        let lines: Vec<&str> = rendered.lines().collect();

        // border, header, border, then a row and a border per route
        assert_eq!(lines.len(), 7);
        assert!(lines[3].contains(" 1 ") && lines[3].contains('A') && lines[3].contains('C'));
        assert!(lines[5].contains(" 2 ") && lines[5].contains('D') && lines[5].contains('F'));
    }

    #[test]
    fn test_first_leg_not_displayed() {
        let rendered = format_route_table(&[listing("Moscow", "Tver", "Kazan")]);
        assert!(rendered.contains("Moscow"));
        assert!(rendered.contains("Kazan"));
        assert!(!rendered.contains("Tver"));
    }

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("short", 10), "short");
        let long = "станция".repeat(10);
        let truncated = truncate_str(&long, 20);
        assert!(truncated.chars().count() <= 20);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_str_narrow_widths() {
        // Widths below the ellipsis length must still respect the limit
        assert_eq!(truncate_str("abcdef", 0), "");
        assert_eq!(truncate_str("abcdef", 2), "ab");
        assert_eq!(truncate_str("abcdef", 3), "abc");
        assert_eq!(truncate_str("abcdef", 4), "a...");
        for max in 0..8 {
            assert!(truncate_str("abcdefgh", max).chars().count() <= max);
        }
    }

    #[test]
    fn test_overlong_cell_keeps_alignment() {
        let long_origin = "A".repeat(64);
        let rendered = format_route_table(&[listing(&long_origin, "B", "C")]);
        let lines: Vec<&str> = rendered.lines().collect();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
