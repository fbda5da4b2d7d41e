//! Output formatting and progress indicators for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::{Board, Digit};

/// Create a spinner for search-heavy tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render the board as a bordered grid with row and column labels.
pub fn render_board(board: &Board) -> String {
    let cells: Vec<char> = board.encode().chars().collect();
    let mut out = String::new();
    out.push_str("     0   1   2\n");
    out.push_str("   +---+---+---+\n");
    for row in 0..3 {
        out.push_str(&format!(" {row} "));
        for col in 0..3 {
            out.push_str(&format!("| {} ", cells[row * 3 + col]));
        }
        out.push_str("|\n");
        out.push_str("   +---+---+---+\n");
    }
    out
}

/// Format a digit list as `1, 3, 5`, or `(none)` when empty.
pub fn format_digit_set(digits: &[Digit]) -> String {
    if digits.is_empty() {
        return "(none)".to_string();
    }
    digits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human description of a line given as flat cell indices.
pub fn describe_line(line: [usize; 3]) -> String {
    let rows: Vec<usize> = line.iter().map(|&i| i / 3).collect();
    let cols: Vec<usize> = line.iter().map(|&i| i % 3).collect();
    if rows.iter().all(|&r| r == rows[0]) {
        format!("row {}", rows[0])
    } else if cols.iter().all(|&c| c == cols[0]) {
        format!("column {}", cols[0])
    } else if line == [0, 4, 8] {
        "the main diagonal".to_string()
    } else {
        "the anti-diagonal".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(59704), "59,704");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_render_board() {
        let board = Board::from_string("2..9..4..").unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "     0   1   2");
        assert_eq!(lines[1], "   +---+---+---+");
        assert_eq!(lines[2], " 0 | 2 | . | . |");
        assert_eq!(lines[4], " 1 | 9 | . | . |");
        assert_eq!(lines[6], " 2 | 4 | . | . |");
        assert_eq!(lines[7], "   +---+---+---+");
    }

    #[test]
    fn test_format_digit_set() {
        let digits: Vec<Digit> = [1u8, 3, 0]
            .iter()
            .map(|&d| Digit::new(d).unwrap())
            .collect();
        assert_eq!(format_digit_set(&digits), "1, 3, 0");
        assert_eq!(format_digit_set(&[]), "(none)");
    }

    #[test]
    fn test_describe_line() {
        assert_eq!(describe_line([0, 1, 2]), "row 0");
        assert_eq!(describe_line([6, 7, 8]), "row 2");
        assert_eq!(describe_line([0, 3, 6]), "column 0");
        assert_eq!(describe_line([2, 5, 8]), "column 2");
        assert_eq!(describe_line([0, 4, 8]), "the main diagonal");
        assert_eq!(describe_line([2, 4, 6]), "the anti-diagonal");
    }
}
