//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Stockbook · command (context)"
/// Plain mode: "stockbook command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Stockbook", styles::bold(), ctx.color);
            if let Some(c) = context {
                format!("{} \u{00B7} {} ({})", title, command, c)
            } else {
                format!("{} \u{00B7} {}", title, command)
            }
        }
        OutputMode::Plain => format!("stockbook {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a divider line sized to the terminal.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        let line = if ctx.unicode { "\u{2500}" } else { "-" };
        line.repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
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

/// Render a table using comfy-table for pretty mode.
///
/// Pretty mode: Styled table with borders
/// Plain mode: Pipe-separated values (no header)
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();

        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
        }

        table.set_content_arrangement(ContentArrangement::Dynamic);

        let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join(" | "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a line unless the string is empty (JSON mode renders nothing).
pub fn print(ctx: &UiContext, line: &str) {
    if !ctx.mode.is_json() && !line.is_empty() {
        println!("{}", line);
    }
}

/// Print an empty line in pretty mode only.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_kv_plain_is_machine_friendly() {
        let ctx = plain_ctx();
        assert_eq!(kv(&ctx, "Total Qty", "13"), "total_qty=13");
    }

    #[test]
    fn test_kv_pretty_keeps_key_casing() {
        let ctx = pretty_ctx();
        assert_eq!(kv(&ctx, "Total Qty", "13"), "Total Qty: 13");
    }

    #[test]
    fn test_header_plain() {
        let ctx = plain_ctx();
        assert_eq!(header(&ctx, "list", None), "stockbook list");
    }

    #[test]
    fn test_table_plain_joins_rows() {
        let ctx = plain_ctx();
        let columns = [Column::new("A"), Column::new("B")];
        let rows = vec![vec!["1".to_string(), "2".to_string()]];
        assert_eq!(table(&ctx, &columns, &rows), "1 | 2");
    }

    #[test]
    fn test_badge_without_message() {
        let ctx = plain_ctx();
        assert_eq!(badge(&ctx, Badge::Ok, ""), "[\u{2713}]");
    }
}
