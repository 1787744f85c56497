//! Text rendering helpers shared by the commands.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use super::context::UiContext;

/// Emphasize a result line.
pub fn bold(ctx: &UiContext, text: &str) -> String {
    if ctx.color {
        text.bold().to_string()
    } else {
        text.to_owned()
    }
}

/// One labeled value: `Shift: 3` on a terminal, `shift=3` otherwise.
pub fn kv(ctx: &UiContext, label: &str, value: &str) -> String {
    if !ctx.mode.is_pretty() {
        let key = label.to_lowercase().replace(' ', "_");
        return format!("{key}={value}");
    }
    let label = format!("{label}:");
    if ctx.color {
        format!("{} {value}", label.dimmed())
    } else {
        format!("{label} {value}")
    }
}

/// Rows under a header. Plain output drops the header and tab-separates cells.
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|title| {
            let cell = Cell::new(title);
            if ctx.color {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        }));
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}
