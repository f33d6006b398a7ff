//! Rendering primitives for CLI output.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render the application header.
///
/// Pretty mode: "Shelf · subtitle" with a bold title
/// Plain mode: "shelf subtitle"
pub fn header(ctx: &UiContext, subtitle: &str) -> String {
    if ctx.mode.is_pretty() {
        let title = styled("Shelf", styles::bold(), ctx.color);
        format!("{} \u{00B7} {}", title, subtitle)
    } else {
        format!("shelf {}", subtitle)
    }
}

/// Render a divider line sized to the terminal.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        "\u{2500}".repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with a message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let token = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        token
    } else {
        format!("{} {}", token, message)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint: {}", text)
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print a status notice: badged in pretty mode, the bare sentence otherwise.
pub fn notice(ctx: &UiContext, kind: Badge, message: &str) {
    if ctx.mode.is_pretty() {
        print(ctx, &badge(ctx, kind, message));
    } else {
        print(ctx, message);
    }
}

/// Print an error with an optional hint to stderr.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    if ctx.mode.is_pretty() {
        eprintln!("{}", badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            eprintln!("{}", hint(ctx, h));
        }
    } else {
        eprintln!("error: {}", message);
        if let Some(h) = error_hint {
            eprintln!("hint: {}", h);
        }
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a borderless table for listings.
///
/// Pretty mode: aligned columns with dim headers
/// Plain mode: space-separated values, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "interactive catalog");
        assert!(h.contains("Shelf"));
        assert!(h.contains("interactive catalog"));
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "interactive catalog"), "shelf interactive catalog");
    }

    #[test]
    fn test_divider() {
        assert!(divider(&pretty_ctx()).contains("\u{2500}"));
        assert_eq!(divider(&plain_ctx()), "---");
    }

    #[test]
    fn test_badge_ascii() {
        let b = badge(&plain_ctx(), Badge::Ok, "Done");
        assert!(b.contains("[OK]"));
        assert!(b.contains("Done"));
    }

    #[test]
    fn test_hint_pretty() {
        let h = hint(&pretty_ctx(), "try add");
        assert!(h.contains("Hint:"));
        assert!(h.contains("try add"));
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain_ctx(), "try add"), "hint: try add");
    }

    #[test]
    fn test_simple_table_plain_is_rows_only() {
        let columns = [Column::new("Title"), Column::new("Year")];
        let rows = vec![vec!["Dune".to_string(), "1965".to_string()]];
        let t = simple_table(&plain_ctx(), &columns, &rows);
        assert_eq!(t, "Dune 1965");
    }

    #[test]
    fn test_simple_table_pretty_includes_headers() {
        let columns = [Column::new("Title"), Column::new("Year")];
        let rows = vec![
            vec!["Dune".to_string(), "1965".to_string()],
            vec!["Hyperion".to_string(), "1989".to_string()],
        ];
        let t = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Title"));
        assert!(t.contains("Year"));
        assert!(t.contains("Dune"));
        assert!(t.contains("Hyperion"));
    }
}
