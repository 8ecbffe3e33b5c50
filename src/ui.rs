use colored::Colorize;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.chars().count()).dimmed());
}

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

// ============================================================================
// Tables
// ============================================================================

/// Render rows as left-aligned columns separated by two spaces.
///
/// The last column is never padded.
pub fn columns(rows: &[Vec<String>]) -> Vec<String> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..width)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            row.iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i == last {
                        cell.clone()
                    } else {
                        format!("{:<w$}", cell, w = widths[i])
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Print a table with a dimmed header row.
pub fn table(header_row: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        dim("(none)");
        return;
    }

    let mut all = Vec::with_capacity(rows.len() + 1);
    all.push(header_row.iter().map(ToString::to_string).collect());
    all.extend(rows.iter().cloned());

    let mut lines = columns(&all).into_iter();
    if let Some(first) = lines.next() {
        println!("  {}", first.dimmed());
    }
    for line in lines {
        println!("  {line}");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_columns_align() {
        let lines = columns(&[
            row(&["Interface", "Description"]),
            row(&["Ethernet1/1", "core1:Eth3/1"]),
            row(&["Po1", "core1:Eth3/1"]),
        ]);
        assert_eq!(
            lines,
            vec![
                "Interface    Description",
                "Ethernet1/1  core1:Eth3/1",
                "Po1          core1:Eth3/1",
            ]
        );
    }

    #[test]
    fn test_columns_ragged_rows() {
        let lines = columns(&[row(&["a", "bb", "c"]), row(&["aaa"])]);
        assert_eq!(lines, vec!["a    bb  c", "aaa"]);
    }

    #[test]
    fn test_columns_empty() {
        assert!(columns(&[]).is_empty());
    }
}
