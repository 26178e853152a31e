//! Output formatting for the CLI.

use console::{pad_str, style, Alignment, Term};
use indicatif::{ProgressBar, ProgressStyle};

use vitrine_commerce::catalog::{Product, ProductStatus};
use vitrine_store::NoticeKind;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
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

    /// Print a plain body line.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Print a horizontal rule.
    pub fn rule(&self) {
        if self.json {
            return;
        }
        let width = (self.term.size().1 as usize).clamp(20, 60);
        println!("{}", style("─".repeat(width)).dim());
    }

    /// Print a toast-style notice.
    pub fn notice(&self, kind: NoticeKind, msg: &str) {
        if self.json {
            return;
        }
        let glyph = match kind {
            NoticeKind::Success => style("✓").green(),
            NoticeKind::Error => style("✗").red(),
            NoticeKind::Info => style("ℹ").blue(),
            NoticeKind::Warning => style("⚠").yellow(),
        };
        println!("{} {}", glyph, style(msg).bold());
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

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table header row followed by a separator line.
    pub fn table_header(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let cells: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad_str(col, *width, Alignment::Left, None).into_owned())
            .collect();
        println!("  {}", style(cells.join("  ")).dim());
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        println!("  {}", style("─".repeat(total)).dim());
    }

    /// Print a table row. Cells wider than their column are truncated
    /// with an ellipsis; styled cells keep their alignment.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let cells: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad_str(col, *width, Alignment::Left, Some("…")).into_owned())
            .collect();
        println!("  {}", cells.join("  "));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Styled label for a product status.
pub fn status_badge(status: ProductStatus) -> String {
    match status {
        ProductStatus::Active => style("Ativo").green().to_string(),
        ProductStatus::Draft => style("Rascunho").yellow().to_string(),
        ProductStatus::Archived => style("Arquivado").dim().to_string(),
    }
}

/// NOVO/SALE tags for a product listing row.
pub fn tag_badges(product: &Product) -> String {
    let mut tags = String::new();
    if product.is_new {
        tags.push(' ');
        tags.push_str(&style("NOVO").green().bold().to_string());
    }
    if product.is_sale {
        tags.push(' ');
        tags.push_str(&style("SALE").red().bold().to_string());
    }
    tags
}

/// Star rating with review count, e.g. `★ 4.8 (124)`.
pub fn format_rating(rating: f64, reviews: u32) -> String {
    format!("★ {:.1} ({})", rating, reviews)
}
