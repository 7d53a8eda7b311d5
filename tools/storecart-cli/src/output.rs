//! Output formatting for the CLI.

use console::style;
use storecart_core::cart::LineItem;
use storecart_core::{Currency, Money, Notice, NoticeKind, Notifier};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print the cart as a table with a total footer.
    pub fn cart_table(&self, items: &[LineItem], total: Money, currency: Currency) {
        if self.json {
            return;
        }
        if items.is_empty() {
            println!("  {}", style("Your cart is empty").dim());
            return;
        }

        let rows = cart_rows(items, currency);
        let widths = column_widths(&rows);

        let header: Vec<String> = rows[0]
            .iter()
            .zip(&widths)
            .map(|(col, width)| format!("{:width$}", style(col).bold(), width = width))
            .collect();
        println!("  {}", header.join("  "));

        for row in &rows[1..] {
            let cols: Vec<&str> = row.iter().map(String::as_str).collect();
            self.table_row(&cols, &widths);
        }

        let footer_width: usize = widths[..3].iter().sum::<usize>() + 4;
        println!(
            "  {:>width$}  {}",
            style("Total:").bold(),
            style(currency.format(total)).bold(),
            width = footer_width
        );
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

impl Notifier for Output {
    fn notify(&self, notice: &Notice) {
        match notice.kind() {
            NoticeKind::Success => self.success(&notice.to_string()),
            NoticeKind::Warning => self.warn(&notice.to_string()),
        }
    }
}

/// Header plus one row per line: Item, Price, Quantity, Total.
fn cart_rows(items: &[LineItem], currency: Currency) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Item".to_string(),
        "Price".to_string(),
        "Quantity".to_string(),
        "Total".to_string(),
    ]];
    rows.extend(items.iter().map(|item| {
        vec![
            item.name.clone(),
            currency.format(item.unit_price),
            item.quantity.to_string(),
            currency.format(item.subtotal()),
        ]
    }));
    rows
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.first().map_or(0, Vec::len);
    (0..columns)
        .map(|c| {
            rows.iter()
                .map(|row| row[c].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_rows() {
        let mut tea = LineItem::new("Tea", Money::from_major(20));
        tea.quantity = 3;
        let rows = cart_rows(&[tea], Currency::INR);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Item", "Price", "Quantity", "Total"]);
        assert_eq!(rows[1], vec!["Tea", "₹20", "3", "₹60"]);
    }

    #[test]
    fn test_column_widths_count_chars() {
        let rows = cart_rows(
            &[LineItem::new("Masala Chai", Money::from_minor(1250))],
            Currency::INR,
        );
        assert_eq!(column_widths(&rows), vec![11, 5, 8, 5]);
    }

    #[test]
    fn test_format_row_pads_columns() {
        assert_eq!(format_row(&["a", "bb"], &[3, 2]), "a    bb");
    }
}
